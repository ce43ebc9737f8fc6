//! Group tags used by the collision rules.

use bevy_ecs::prelude::Component;

pub const PLAYER: &str = "player";
pub const ENEMY: &str = "enemy";
pub const SHIP: &str = "ship";
pub const ASTEROID: &str = "asteroid";

/// Names the role a sprite plays in the scene.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(pub &'static str);

impl Group {
    pub fn name(&self) -> &'static str {
        self.0
    }

    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}
