//! Draw order for sprite entities.

use bevy_ecs::prelude::Component;

/// Higher values are drawn later (on top). Entities without one draw at 0.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
