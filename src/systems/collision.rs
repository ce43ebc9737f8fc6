//! Collision systems.
//!
//! - [`collision_detector`] tests every pair of sprite entities and triggers
//!   a [`CollisionEvent`] for each overlapping pair.
//! - [`collision_observer`] applies the scene rules:
//!   the ship is destroyed by an asteroid, and the walking player and the
//!   enemy both freeze when they meet (the player stays on screen).
//!
//! Coins are not entities; they are checked separately by
//! [`collect_coins`](crate::systems::collectibles::collect_coins).
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::group::{ASTEROID, ENEMY, Group, PLAYER, SHIP};
use crate::components::sprite::GameSprite;
use crate::events::collision::CollisionEvent;

pub fn collision_detector(query: Query<(Entity, &GameSprite)>, mut commands: Commands) {
    let mut pairs: Vec<(Entity, Entity)> = Vec::new();

    for [(entity_a, sprite_a), (entity_b, sprite_b)] in query.iter_combinations() {
        if sprite_a.has_collided(sprite_b) {
            pairs.push((entity_a, entity_b));
        }
    }

    for (a, b) in pairs {
        commands.trigger(CollisionEvent { a, b });
    }
}

/// Order `(a, b)` so the first entity belongs to `first` and the second to
/// `second`. `None` if the pair is not that combination.
fn match_pair(
    groups: &Query<&Group>,
    a: Entity,
    b: Entity,
    first: &str,
    second: &str,
) -> Option<(Entity, Entity)> {
    let group_a = groups.get(a).ok()?;
    let group_b = groups.get(b).ok()?;
    if group_a.is(first) && group_b.is(second) {
        Some((a, b))
    } else if group_b.is(first) && group_a.is(second) {
        Some((b, a))
    } else {
        None
    }
}

pub fn collision_observer(
    trigger: On<CollisionEvent>,
    groups: Query<&Group>,
    mut sprites: Query<&mut GameSprite>,
) {
    let CollisionEvent { a, b } = *trigger.event();

    if let Some((ship, _asteroid)) = match_pair(&groups, a, b, SHIP, ASTEROID) {
        if let Ok(mut sprite) = sprites.get_mut(ship) {
            if sprite.body.is_alive {
                sprite.body.kill();
                info!("Ship destroyed by asteroid");
            }
        }
        return;
    }

    if let Some((player, enemy)) = match_pair(&groups, a, b, PLAYER, ENEMY) {
        if let Ok(mut sprite) = sprites.get_mut(player) {
            sprite.body.is_active = false;
            sprite.body.is_alive = false;
        }
        if let Ok(mut sprite) = sprites.get_mut(enemy) {
            sprite.body.is_active = false;
        }
        info!("Player caught by enemy");
    }
}
