//! Screen size resource.
//!
//! The fixed playing area in pixels. The renderer lays out the HUD with it.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}
