//! Coin Chase library.
//!
//! Sprite animation, motion and collision for a small raylib scene, hosted
//! in a bevy_ecs world. Exposed as a library for the integration tests.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
