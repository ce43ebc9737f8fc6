//! Game configuration resource.
//!
//! Settings loaded from an INI file at startup. Every value has a default,
//! so a missing or partial file still starts the scene.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! vsync = true
//!
//! [game]
//! coins = 5
//! coin_frames = 8
//! player_speed = 200
//! enemy_speed = 50
//! animation_fps = 5
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::animation::DEFAULT_FPS;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_COINS: u32 = 5;
const DEFAULT_COIN_FRAMES: u32 = 8;
const DEFAULT_PLAYER_SPEED: f32 = 200.0;
const DEFAULT_ENEMY_SPEED: f32 = 50.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels. Also the width of the playing area.
    pub window_width: u32,
    /// Window height in pixels. Also the height of the playing area.
    pub window_height: u32,
    pub target_fps: u32,
    pub vsync: bool,
    /// Number of coins scattered at startup.
    pub coins: u32,
    /// Frames in the coin sheet's single row.
    pub coin_frames: u32,
    pub player_speed: f32,
    pub enemy_speed: f32,
    /// Playback rate of every sprite animation.
    pub animation_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            coins: DEFAULT_COINS,
            coin_frames: DEFAULT_COIN_FRAMES,
            player_speed: DEFAULT_PLAYER_SPEED,
            enemy_speed: DEFAULT_ENEMY_SPEED,
            animation_fps: DEFAULT_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = read_u32(&config, "window", "width") {
            self.window_width = width;
        }
        if let Some(height) = read_u32(&config, "window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = read_u32(&config, "window", "target_fps") {
            self.target_fps = fps;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [game] section
        if let Some(coins) = read_u32(&config, "game", "coins") {
            self.coins = coins;
        }
        if let Some(frames) = read_u32(&config, "game", "coin_frames") {
            self.coin_frames = frames;
        }
        if let Some(speed) = config.getfloat("game", "player_speed").ok().flatten() {
            self.player_speed = speed as f32;
        }
        if let Some(speed) = config.getfloat("game", "enemy_speed").ok().flatten() {
            self.enemy_speed = speed as f32;
        }
        if let Some(fps) = read_u32(&config, "game", "animation_fps") {
            if fps == 0 {
                warn!("Ignoring animation_fps = 0, keeping {}", self.animation_fps);
            } else {
                self.animation_fps = fps;
            }
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, coins={}, animation_fps={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.coins,
            self.animation_fps
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [game] section
        config.set("game", "coins", Some(self.coins.to_string()));
        config.set("game", "coin_frames", Some(self.coin_frames.to_string()));
        config.set("game", "player_speed", Some(self.player_speed.to_string()));
        config.set("game", "enemy_speed", Some(self.enemy_speed.to_string()));
        config.set("game", "animation_fps", Some(self.animation_fps.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

/// Read an unsigned key, ignoring values that do not fit in a `u32`.
fn read_u32(config: &Ini, section: &str, key: &str) -> Option<u32> {
    let value = config.getuint(section, key).ok().flatten()?;
    match u32::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}.{} = {}: out of range", section, key, value);
            None
        }
    }
}
