//! Player score and health shown in the HUD.

use bevy_ecs::prelude::Resource;

/// Points awarded per collected coin.
pub const COIN_VALUE: u32 = 1;

#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    pub score: u32,
    pub health: i32,
}

impl Default for Score {
    fn default() -> Self {
        Self {
            score: 0,
            health: 100,
        }
    }
}
