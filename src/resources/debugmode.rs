//! Debug toggle resource.
//!
//! While present, the renderer outlines every active bounding box and shows
//! the frame rate. Toggled with F11 or started on with `--debug`.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, debug overlays are drawn.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
