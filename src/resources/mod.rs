//! ECS resources made available to systems.
//!
//! Overview
//! - `collectibles` – the coins and their pickup logic
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – INI-backed settings
//! - `input` – per-frame keyboard state
//! - `score` – score and health shown in the HUD
//! - `screensize` – playing area in pixels
//! - `texturestore` – loaded textures keyed by string IDs (non-send)
//! - `worldtime` – simulation time and delta
pub mod collectibles;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod score;
pub mod screensize;
pub mod texturestore;
pub mod worldtime;
