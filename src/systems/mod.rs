//! Scene systems.
//!
//! Per tick they run in this order: input, player controller, sprite and
//! coin updates, collision checks, render.
//!
//! Submodules overview
//! - [`collectibles`] – animate coins, pick them up, score them
//! - [`collision`] – pairwise overlap checks and the scene's collision rules
//! - [`input`] – read the keyboard into [`crate::resources::input::InputState`]
//! - [`movement`] – integrate motion and advance animations
//! - [`playercontroller`] – steer player sprites from input
//! - [`render`] – draw the scene with raylib
//! - [`time`] – update simulation time and delta

pub mod collectibles;
pub mod collision;
pub mod input;
pub mod movement;
pub mod playercontroller;
pub mod render;
pub mod time;
