//! Collision event.
//!
//! The [`collision_detector`](crate::systems::collision::collision_detector)
//! system emits [`CollisionEvent`] for every pair of active sprites whose
//! bounding boxes overlap. The scene rules live in
//! [`collision_observer`](crate::systems::collision::collision_observer).
use bevy_ecs::prelude::*;

/// Event fired when two sprites overlap.
///
/// No ordering guarantees are given between [`CollisionEvent::a`] and
/// [`CollisionEvent::b`].
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}
