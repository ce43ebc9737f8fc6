//! Scene tick integration tests for steering, motion, collisions and coins.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;
use std::sync::{Arc, Mutex};

use coinchase::components::animation::AnimationSet;
use coinchase::components::group::{ASTEROID, ENEMY, Group, PLAYER, SHIP};
use coinchase::components::playercontrol::PlayerControl;
use coinchase::components::sprite::{DrawTarget, GameSprite};
use coinchase::components::spritesheet::{SourceRect, SpriteSheet};
use coinchase::error::AnimationError;
use coinchase::events::coin::CoinCollectedEvent;
use coinchase::events::collision::CollisionEvent;
use coinchase::events::switchdebug::{SwitchDebugEvent, switch_debug_observer};
use coinchase::game::{self, SceneSheets, WALK_KEYS};
use coinchase::resources::collectibles::CollectibleManager;
use coinchase::resources::debugmode::DebugMode;
use coinchase::resources::gameconfig::GameConfig;
use coinchase::resources::input::InputState;
use coinchase::resources::score::Score;
use coinchase::resources::worldtime::WorldTime;
use coinchase::systems::collectibles::{
    coin_collected_observer, collect_coins, update_collectibles,
};
use coinchase::systems::collision::{collision_detector, collision_observer};
use coinchase::systems::movement::sprite_update;
use coinchase::systems::playercontroller::player_controller;
use coinchase::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(sprite_update);
    schedule.run(world);
}

fn tick_controls(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((player_controller, sprite_update).chain());
    schedule.run(world);
}

fn tick_collision_detector(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(collision_detector);
    schedule.run(world);
}

fn tick_coins(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((update_collectibles, collect_coins).chain());
    schedule.run(world);
}

fn block(x: f32, y: f32) -> GameSprite {
    GameSprite::new_static(&SpriteSheet::new("block", 10, 10)).with_position(x, y)
}

fn coin_at(x: f32, y: f32) -> GameSprite {
    let set = AnimationSet::single(&SpriteSheet::new("coin", 64, 16), "Spin", 4).unwrap();
    let mut coin = GameSprite::new_animated(set).with_position(x, y);
    coin.play_animation("Spin").unwrap();
    coin
}

/// 32x32 frames, one row per key.
fn walker(keys: &[&str]) -> GameSprite {
    let rows = keys.len() as u32;
    let sheet = SpriteSheet::new("walker", 96, 32 * rows);
    let mut sprite = GameSprite::new_static(&sheet);
    AnimationSet::build(&sheet, 3, rows, keys)
        .unwrap()
        .attach_to(&mut sprite);
    sprite.into_player(PlayerControl::four_way(100.0))
}

/// Collects the texture keys of every draw call.
#[derive(Default)]
struct Recorder {
    keys: Vec<String>,
}

impl DrawTarget for Recorder {
    fn draw_region(
        &mut self,
        tex_key: &str,
        _source: SourceRect,
        _dest: SourceRect,
        _origin: Vector2,
        _rotation: f32,
    ) {
        self.keys.push(tex_key.to_string());
    }
}

fn draw_all(world: &mut World) -> Vec<String> {
    let mut recorder = Recorder::default();
    let mut query = world.query::<&GameSprite>();
    for sprite in query.iter(world) {
        sprite.draw(&mut recorder);
    }
    recorder.keys
}

// ==================== MOVEMENT ====================

#[test]
fn sprite_update_integrates_speed_and_spin() {
    let mut world = make_world();
    let entity = world
        .spawn(
            block(0.0, 0.0)
                .with_direction(1.0, 0.0)
                .with_speed(10.0)
                .with_rotation_speed(2.0),
        )
        .id();

    update_world_time(&mut world, 0.5);
    tick_movement(&mut world);

    let sprite = world.get::<GameSprite>(entity).unwrap();
    assert!(approx_eq(sprite.body.position.x, 5.0));
    assert!(approx_eq(sprite.body.position.y, 0.0));
    assert!(approx_eq(sprite.body.rotation, 1.0));
}

#[test]
fn sprite_update_freezes_inactive_sprites() {
    let mut world = make_world();
    let mut sprite = block(3.0, 4.0).with_direction(1.0, 1.0).with_speed(50.0);
    sprite.body.is_active = false;
    let entity = world.spawn(sprite).id();

    update_world_time(&mut world, 1.0);
    tick_movement(&mut world);

    let sprite = world.get::<GameSprite>(entity).unwrap();
    assert!(approx_eq(sprite.body.position.x, 3.0));
    assert!(approx_eq(sprite.body.position.y, 4.0));
}

#[test]
fn sprite_update_advances_animation_frames() {
    let mut world = make_world();
    let entity = world.spawn(coin_at(0.0, 0.0)).id();

    // 5 fps: each 0.25s tick is one frame
    update_world_time(&mut world, 0.25);
    tick_movement(&mut world);
    assert!(approx_eq(world.get::<GameSprite>(entity).unwrap().source_rect().x, 0.0));

    update_world_time(&mut world, 0.25);
    tick_movement(&mut world);
    assert!(approx_eq(world.get::<GameSprite>(entity).unwrap().source_rect().x, 16.0));
}

#[test]
fn negative_frame_time_does_not_rewind() {
    let mut world = make_world();
    let entity = world
        .spawn(block(10.0, 0.0).with_direction(1.0, 0.0).with_speed(10.0))
        .id();

    update_world_time(&mut world, -1.0);
    tick_movement(&mut world);

    let sprite = world.get::<GameSprite>(entity).unwrap();
    assert!(approx_eq(sprite.body.position.x, 10.0));
    assert_eq!(world.resource::<WorldTime>().frame_count, 1);
}

// ==================== PLAYER CONTROL ====================

#[test]
fn four_way_player_walks_and_picks_animation() {
    let mut world = make_world();
    let entity = world.spawn(walker(&WALK_KEYS)).id();
    world.resource_mut::<InputState>().walk_right.active = true;

    update_world_time(&mut world, 0.5);
    tick_controls(&mut world);

    let sprite = world.get::<GameSprite>(entity).unwrap();
    assert_eq!(sprite.active_animation(), Some("Right"));
    assert!(sprite.animator().unwrap().is_playing());
    assert!(approx_eq(sprite.body.position.x, 50.0));
    assert!(approx_eq(sprite.body.position.y, 0.0));
}

#[test]
fn four_way_player_stops_without_input() {
    let mut world = make_world();
    let entity = world.spawn(walker(&WALK_KEYS)).id();
    world.resource_mut::<InputState>().walk_down.active = true;
    update_world_time(&mut world, 0.1);
    tick_controls(&mut world);

    world.resource_mut::<InputState>().walk_down.active = false;
    update_world_time(&mut world, 0.1);
    tick_controls(&mut world);

    let sprite = world.get::<GameSprite>(entity).unwrap();
    assert_eq!(sprite.active_animation(), Some("Down"));
    assert!(!sprite.animator().unwrap().is_playing());
    assert!(approx_eq(sprite.body.speed, 0.0));
    assert!(approx_eq(sprite.body.position.y, 10.0));
}

#[test]
fn missing_walk_row_keeps_previous_animation() {
    let mut world = make_world();
    let entity = world.spawn(walker(&["Down", "Left", "Right"])).id();

    world.resource_mut::<InputState>().walk_right.active = true;
    update_world_time(&mut world, 0.1);
    tick_controls(&mut world);

    {
        let mut input = world.resource_mut::<InputState>();
        input.walk_right.active = false;
        input.walk_up.active = true;
    }
    update_world_time(&mut world, 0.1);
    tick_controls(&mut world);

    let sprite = world.get::<GameSprite>(entity).unwrap();
    assert_eq!(sprite.active_animation(), Some("Right"));
    // still moves even without a matching animation
    assert!(approx_eq(sprite.body.position.y, -10.0));
}

#[test]
fn rotational_player_turns_and_thrusts() {
    let mut world = make_world();
    let ship = block(0.0, 0.0).into_player(PlayerControl::rotational(100.0, 2.0));
    let entity = world.spawn(ship).id();
    {
        let mut input = world.resource_mut::<InputState>();
        input.turn_right.active = true;
        input.thrust.active = true;
    }

    update_world_time(&mut world, 0.5);
    tick_controls(&mut world);

    let sprite = world.get::<GameSprite>(entity).unwrap();
    assert!(approx_eq(sprite.body.rotation, 1.0));
    assert!(approx_eq(sprite.body.speed, 100.0));
    assert!(approx_eq(sprite.body.position.x, 50.0 * 1.0_f32.cos()));
    assert!(approx_eq(sprite.body.position.y, 50.0 * 1.0_f32.sin()));
}

#[test]
fn rotational_player_coasts_to_a_stop_without_thrust() {
    let mut world = make_world();
    let ship = block(0.0, 0.0)
        .with_speed(100.0)
        .into_player(PlayerControl::rotational(100.0, 2.0));
    let entity = world.spawn(ship).id();

    update_world_time(&mut world, 0.5);
    tick_controls(&mut world);

    let sprite = world.get::<GameSprite>(entity).unwrap();
    assert!(approx_eq(sprite.body.speed, 0.0));
    assert!(approx_eq(sprite.body.position.x, 0.0));
}

#[test]
fn controller_ignores_non_player_sprites() {
    let mut world = make_world();
    let entity = world
        .spawn(block(0.0, 0.0).with_direction(0.0, 1.0).with_speed(20.0))
        .id();
    world.resource_mut::<InputState>().walk_right.active = true;

    update_world_time(&mut world, 0.5);
    tick_controls(&mut world);

    let sprite = world.get::<GameSprite>(entity).unwrap();
    assert!(approx_eq(sprite.body.position.x, 0.0));
    assert!(approx_eq(sprite.body.position.y, 10.0));
}

// ==================== COLLISIONS ====================

#[test]
fn collision_detector_triggers_event_for_overlap() {
    let mut world = make_world();
    let a = world.spawn(block(0.0, 0.0)).id();
    let b = world.spawn(block(5.0, 5.0)).id();
    world.spawn(block(100.0, 100.0));

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    world.add_observer(move |trigger: On<CollisionEvent>| {
        let event = trigger.event();
        seen_clone.lock().unwrap().push((event.a, event.b));
    });
    world.flush();

    tick_collision_detector(&mut world);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (x, y) = seen[0];
    assert!((x == a && y == b) || (x == b && y == a));
}

#[test]
fn touching_edges_do_not_collide() {
    let mut world = make_world();
    world.spawn(block(0.0, 0.0));
    world.spawn(block(10.0, 0.0));

    let count = Arc::new(Mutex::new(0));
    let count_clone = count.clone();
    world.add_observer(move |_trigger: On<CollisionEvent>| {
        *count_clone.lock().unwrap() += 1;
    });
    world.flush();

    tick_collision_detector(&mut world);

    assert_eq!(*count.lock().unwrap(), 0);
}

#[test]
fn asteroid_destroys_ship() {
    let mut world = make_world();
    world.add_observer(collision_observer);
    world.flush();

    let ship = world.spawn((Group(SHIP), block(0.0, 0.0))).id();
    let asteroid = world.spawn((Group(ASTEROID), block(4.0, 4.0))).id();

    tick_collision_detector(&mut world);

    let ship = world.get::<GameSprite>(ship).unwrap();
    assert!(!ship.body.is_alive);
    assert!(!ship.body.is_active);
    assert!(!ship.body.is_visible);
    let asteroid = world.get::<GameSprite>(asteroid).unwrap();
    assert!(asteroid.body.is_alive);
    assert!(asteroid.body.is_active);
}

#[test]
fn asteroid_rule_holds_in_either_spawn_order() {
    let mut world = make_world();
    world.add_observer(collision_observer);
    world.flush();

    let asteroid = world.spawn((Group(ASTEROID), block(4.0, 4.0))).id();
    let ship = world.spawn((Group(SHIP), block(0.0, 0.0))).id();

    tick_collision_detector(&mut world);

    assert!(!world.get::<GameSprite>(ship).unwrap().body.is_alive);
    assert!(world.get::<GameSprite>(asteroid).unwrap().body.is_alive);
}

#[test]
fn enemy_freezes_player_and_itself() {
    let mut world = make_world();
    world.add_observer(collision_observer);
    world.flush();

    let player = world.spawn((Group(PLAYER), walker(&WALK_KEYS))).id();
    let enemy = world
        .spawn((
            Group(ENEMY),
            block(20.0, 20.0).with_direction(-1.0, 0.0).with_speed(30.0),
        ))
        .id();

    tick_collision_detector(&mut world);

    let player_sprite = world.get::<GameSprite>(player).unwrap();
    assert!(!player_sprite.body.is_active);
    assert!(player_sprite.body.is_visible);
    assert!(!world.get::<GameSprite>(enemy).unwrap().body.is_active);

    // frozen sprites no longer move
    update_world_time(&mut world, 1.0);
    tick_movement(&mut world);
    assert!(approx_eq(
        world.get::<GameSprite>(enemy).unwrap().body.position.x,
        20.0
    ));
}

#[test]
fn caught_player_stays_on_screen() {
    let mut world = make_world();
    world.add_observer(collision_observer);
    world.flush();

    world.spawn((Group(PLAYER), walker(&WALK_KEYS)));
    world.spawn((Group(ENEMY), block(20.0, 20.0)));

    tick_collision_detector(&mut world);

    let mut drawn = draw_all(&mut world);
    drawn.sort();
    assert_eq!(drawn, vec!["block".to_string(), "walker".to_string()]);
}

#[test]
fn destroyed_ship_leaves_the_screen() {
    let mut world = make_world();
    world.add_observer(collision_observer);
    world.flush();

    world.spawn((Group(SHIP), block(0.0, 0.0)));
    world.spawn((
        Group(ASTEROID),
        GameSprite::new_static(&SpriteSheet::new("asteroid", 10, 10)).with_position(4.0, 4.0),
    ));

    tick_collision_detector(&mut world);

    assert_eq!(draw_all(&mut world), vec!["asteroid".to_string()]);
}

#[test]
fn unrelated_groups_ignore_each_other() {
    let mut world = make_world();
    world.add_observer(collision_observer);
    world.flush();

    let ship = world.spawn((Group(SHIP), block(0.0, 0.0))).id();
    let enemy = world.spawn((Group(ENEMY), block(2.0, 2.0))).id();

    tick_collision_detector(&mut world);

    assert!(world.get::<GameSprite>(ship).unwrap().body.is_active);
    assert!(world.get::<GameSprite>(enemy).unwrap().body.is_active);
}

// ==================== COINS ====================

fn coin_world(coins: Vec<GameSprite>) -> World {
    let mut world = make_world();
    let mut manager = CollectibleManager::new();
    for coin in coins {
        manager.add(coin);
    }
    world.insert_resource(manager);
    world.init_resource::<Score>();
    world.add_observer(coin_collected_observer);
    world.flush();
    world
}

#[test]
fn coin_under_player_scores_once() {
    let mut world = coin_world(vec![coin_at(100.0, 100.0), coin_at(500.0, 500.0)]);
    world.spawn((Group(PLAYER), walker(&WALK_KEYS).with_position(100.0, 100.0)));

    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();
    world.add_observer(move |trigger: On<CoinCollectedEvent>| {
        events_clone.lock().unwrap().push(trigger.event().index);
    });
    world.flush();

    tick_coins(&mut world);
    assert_eq!(world.resource::<Score>().score, 1);
    assert_eq!(*events.lock().unwrap(), vec![0]);

    tick_coins(&mut world);
    assert_eq!(world.resource::<Score>().score, 1);
    assert_eq!(events.lock().unwrap().len(), 1);

    let coins = world.resource::<CollectibleManager>();
    assert_eq!(coins.remaining(), 1);
    assert!(!coins.collectibles()[0].body.is_visible);
}

#[test]
fn only_players_collect_coins() {
    let mut world = coin_world(vec![coin_at(0.0, 0.0)]);
    world.spawn((Group(ENEMY), block(0.0, 0.0)));

    tick_coins(&mut world);

    assert_eq!(world.resource::<Score>().score, 0);
    assert_eq!(world.resource::<CollectibleManager>().remaining(), 1);
}

#[test]
fn coins_keep_spinning_between_pickups() {
    let mut world = coin_world(vec![coin_at(0.0, 0.0)]);
    update_world_time(&mut world, 0.25);
    tick_coins(&mut world);
    update_world_time(&mut world, 0.25);
    tick_coins(&mut world);

    let coins = world.resource::<CollectibleManager>();
    assert!(approx_eq(coins.collectibles()[0].source_rect().x, 16.0));
}

// ==================== SCENE ====================

fn synthetic_sheets(coin_width: u32) -> SceneSheets {
    SceneSheets {
        ship: SpriteSheet::new("ship", 64, 64),
        asteroid: SpriteSheet::new("asteroid", 128, 128),
        player: SpriteSheet::new("player", 96, 128),
        enemy: SpriteSheet::new("enemy", 96, 128),
        coin: SpriteSheet::new("coin", coin_width, 16),
    }
}

#[test]
fn spawn_scene_builds_every_sprite() {
    let mut world = make_world();
    let config = GameConfig::new();
    let mut rng = fastrand::Rng::with_seed(42);

    game::spawn_scene(&mut world, &synthetic_sheets(128), &config, &mut rng).unwrap();

    let mut query = world.query::<(&Group, &GameSprite)>();
    let sprites: Vec<(&'static str, GameSprite)> = query
        .iter(&world)
        .map(|(group, sprite)| (group.name(), sprite.clone()))
        .collect();
    assert_eq!(sprites.len(), 4);

    let find = |name: &str| {
        sprites
            .iter()
            .find(|(group, _)| *group == name)
            .map(|(_, sprite)| sprite)
            .unwrap()
    };
    assert!(find(SHIP).is_player_controlled());
    assert!(!find(SHIP).has_animation());
    assert!(find(PLAYER).is_player_controlled());
    assert!(find(PLAYER).has_animation());
    assert_eq!(find(ENEMY).active_animation(), Some("Left"));
    assert!(!find(ASTEROID).has_animation());

    // 96x128 walk sheet: 32x32 frames drawn at scale 2
    assert!(approx_eq(find(PLAYER).body.width(), 64.0));

    let coins = world.resource::<CollectibleManager>();
    assert_eq!(coins.len(), config.coins as usize);
    assert!(coins.collectibles().iter().all(GameSprite::has_animation));
    assert_eq!(*world.resource::<Score>(), Score::default());
}

#[test]
fn spawn_scene_rejects_uneven_coin_sheet() {
    let mut world = make_world();
    let config = GameConfig::new();
    let mut rng = fastrand::Rng::with_seed(1);

    let result = game::spawn_scene(&mut world, &synthetic_sheets(100), &config, &mut rng);

    assert!(matches!(
        result,
        Err(AnimationError::UnevenFrameWidth {
            width: 100,
            frame_count: 8
        })
    ));
}

// ==================== DEBUG TOGGLE ====================

#[test]
fn switch_debug_event_toggles_overlay() {
    let mut world = make_world();
    world.add_observer(switch_debug_observer);
    world.flush();

    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(world.contains_resource::<DebugMode>());

    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(!world.contains_resource::<DebugMode>());
}
