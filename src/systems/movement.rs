//! Sprite update system.
//!
//! Integrates motion and advances animation for every sprite entity.
//! Inactive sprites are left untouched by [`GameSprite::update`].
use bevy_ecs::prelude::*;

use crate::components::sprite::GameSprite;
use crate::resources::worldtime::WorldTime;

pub fn sprite_update(mut query: Query<&mut GameSprite>, time: Res<WorldTime>) {
    for mut sprite in query.iter_mut() {
        sprite.update(time.delta);
    }
}
