//! Scene setup and teardown.
//!
//! The scene holds two small demos side by side:
//! - a ship the player turns with A/D and thrusts with Space, and an asteroid
//!   drifting across the screen that destroys it on contact;
//! - a walking character moved with the arrow keys, an enemy walking towards
//!   it and coins to collect.
//!
//! Textures are loaded by [`load_sheets`]; everything after that works on
//! plain [`SpriteSheet`] descriptions so [`spawn_scene`] runs without a
//! window.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::{RaylibHandle, RaylibThread};

use crate::components::animation::AnimationSet;
use crate::components::group::{ASTEROID, ENEMY, Group, PLAYER, SHIP};
use crate::components::playercontrol::{ANIM_LEFT, PlayerControl};
use crate::components::sprite::GameSprite;
use crate::components::spritesheet::{SourceRect, SpriteSheet};
use crate::components::zindex::ZIndex;
use crate::error::AnimationError;
use crate::resources::collectibles::CollectibleManager;
use crate::resources::gameconfig::GameConfig;
use crate::resources::score::Score;
use crate::resources::texturestore::TextureStore;
use crate::systems::render::BACKGROUND_KEY;

/// Walk sheets have one row per direction, in this order.
pub const WALK_KEYS: [&str; 4] = ["Down", "Left", "Right", "Up"];
const WALK_COLUMNS: u32 = 3;
const WALK_ROWS: u32 = 4;
const WALK_SCALE: f32 = 2.0;

pub const COIN_ANIMATION: &str = "Spin";

const SHIP_TURN_RATE: f32 = 3.0;
const SHIP_SPEED: f32 = 200.0;
const ASTEROID_SPEED: f32 = 100.0;
const ASTEROID_SPIN: f32 = 2.0;

/// Height of the HUD strip kept free of coins.
const HUD_HEIGHT: f32 = 32.0;

/// Descriptions of every texture the scene uses.
#[derive(Debug, Clone)]
pub struct SceneSheets {
    pub ship: SpriteSheet,
    pub asteroid: SpriteSheet,
    pub player: SpriteSheet,
    pub enemy: SpriteSheet,
    pub coin: SpriteSheet,
}

/// Load the scene textures into `textures`.
///
/// The background is optional; every sprite texture is required.
pub fn load_sheets(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    textures: &mut TextureStore,
) -> Result<SceneSheets, String> {
    if let Err(e) = textures.load(
        rl,
        th,
        BACKGROUND_KEY,
        "./assets/textures/green_background720p.png",
    ) {
        warn!("{}; drawing a plain background", e);
    }

    Ok(SceneSheets {
        ship: textures.load(rl, th, "ship", "./assets/textures/GreenShip.png")?,
        asteroid: textures.load(rl, th, "asteroid", "./assets/textures/Stones2Filled_01.png")?,
        player: textures.load(rl, th, "player", "./assets/textures/rsc-sprite-sheet1.png")?,
        enemy: textures.load(rl, th, "enemy", "./assets/textures/rsc-sprite-sheet3.png")?,
        coin: textures.load(rl, th, "coin", "./assets/textures/coin_copper.png")?,
    })
}

/// Single-image sprite spinning while it drifts left.
pub fn asteroid(sheet: &SpriteSheet) -> GameSprite {
    GameSprite::new_static(sheet)
        .with_position(1200.0, 500.0)
        .with_direction(-1.0, 0.0)
        .with_speed(ASTEROID_SPEED)
        .with_rotation(3.0_f32.to_radians())
        .with_rotation_speed(ASTEROID_SPIN)
}

/// Single-image sprite steered by rotation and thrust.
pub fn ship(sheet: &SpriteSheet) -> GameSprite {
    GameSprite::new_static(sheet)
        .with_position(200.0, 500.0)
        .with_direction(1.0, 0.0)
        .with_speed(SHIP_SPEED)
        .into_player(PlayerControl::rotational(SHIP_SPEED, SHIP_TURN_RATE))
}

fn walk_set(sheet: &SpriteSheet, config: &GameConfig) -> Result<AnimationSet, AnimationError> {
    let mut set = AnimationSet::build(sheet, WALK_COLUMNS, WALK_ROWS, &WALK_KEYS)?;
    set.set_frames_per_second(config.animation_fps)?;
    Ok(set)
}

/// Four-direction walker driven by the arrow keys.
pub fn walker(sheet: &SpriteSheet, config: &GameConfig) -> Result<GameSprite, AnimationError> {
    let mut sprite = GameSprite::new_static(sheet);
    walk_set(sheet, config)?.attach_to(&mut sprite);
    Ok(sprite
        .with_scale(WALK_SCALE)
        .with_position(200.0, 200.0)
        .with_direction(1.0, 0.0)
        .with_speed(config.player_speed)
        .into_player(PlayerControl::four_way(config.player_speed)))
}

/// Enemy walking left forever.
pub fn enemy(sheet: &SpriteSheet, config: &GameConfig) -> Result<GameSprite, AnimationError> {
    let mut sprite = GameSprite::new_animated(walk_set(sheet, config)?)
        .with_scale(WALK_SCALE)
        .with_position(1000.0, 200.0)
        .with_direction(-1.0, 0.0)
        .with_speed(config.enemy_speed);
    sprite.play_animation(ANIM_LEFT)?;
    Ok(sprite)
}

/// Spinning coin, used as the template for every collectible.
pub fn coin(sheet: &SpriteSheet, config: &GameConfig) -> Result<GameSprite, AnimationError> {
    let mut set = AnimationSet::single(sheet, COIN_ANIMATION, config.coin_frames)?;
    set.set_frames_per_second(config.animation_fps)?;
    let mut sprite = GameSprite::new_animated(set);
    sprite.play_animation(COIN_ANIMATION)?;
    Ok(sprite)
}

/// Spawn every sprite and insert the scene resources.
pub fn spawn_scene(
    world: &mut World,
    sheets: &SceneSheets,
    config: &GameConfig,
    rng: &mut fastrand::Rng,
) -> Result<(), AnimationError> {
    world.spawn((Group(SHIP), ZIndex(1), ship(&sheets.ship)));
    world.spawn((Group(ASTEROID), ZIndex(0), asteroid(&sheets.asteroid)));
    world.spawn((Group(PLAYER), ZIndex(2), walker(&sheets.player, config)?));
    world.spawn((Group(ENEMY), ZIndex(2), enemy(&sheets.enemy, config)?));

    let area = SourceRect::new(
        0.0,
        HUD_HEIGHT,
        config.window_width as f32,
        config.window_height as f32 - HUD_HEIGHT,
    );
    let mut coins = CollectibleManager::new();
    coins.spawn_coins(&coin(&sheets.coin, config)?, config.coins, area, rng);
    world.insert_resource(coins);
    world.init_resource::<Score>();

    info!("Scene ready");
    Ok(())
}

/// Release host resources before the window closes.
pub fn teardown(world: &mut World) {
    if let Some(mut textures) = world.get_non_send_resource_mut::<TextureStore>() {
        textures.clear();
    }
    if let Some(score) = world.get_resource::<Score>() {
        info!("Final score: {}", score.score);
    }
}
