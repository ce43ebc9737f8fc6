//! Coin Chase main entry point.
//!
//! A small 2D scene built with:
//! - **raylib** for windowing, textures, keyboard and drawing
//! - **bevy_ecs** to hold the sprites and run the per-tick systems
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing), open the window
//! 2. Load textures and spawn the scene
//! 3. Each frame: input, player steering, sprite updates, collisions, render
//! 4. Release textures before the window closes
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --debug
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use coinchase::events::switchdebug::switch_debug_observer;
use coinchase::game;
use coinchase::resources::debugmode::DebugMode;
use coinchase::resources::gameconfig::GameConfig;
use coinchase::resources::input::InputState;
use coinchase::resources::screensize::ScreenSize;
use coinchase::resources::texturestore::TextureStore;
use coinchase::resources::worldtime::WorldTime;
use coinchase::systems::collectibles::{
    coin_collected_observer, collect_coins, update_collectibles,
};
use coinchase::systems::collision::{collision_detector, collision_observer};
use coinchase::systems::input::update_input_state;
use coinchase::systems::movement::sprite_update;
use coinchase::systems::playercontroller::player_controller;
use coinchase::systems::render::render_system;
use coinchase::systems::time::update_world_time;

/// Coin Chase: animated sprites, motion and collisions on raylib.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Start with the debug overlay (bounding boxes, FPS) enabled.
    #[arg(long)]
    debug: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,

    /// Seed for coin placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    // Early-exit: write config and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .title("Coin Chase");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    let mut textures = TextureStore::new();
    let sheets = match game::load_sheets(&mut rl, &thread, &mut textures) {
        Ok(sheets) => sheets,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(ScreenSize {
        w: window_width as i32,
        h: window_height as i32,
    });
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    let mut rng = cli
        .seed
        .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    if let Err(e) = game::spawn_scene(&mut world, &sheets, &config, &mut rng) {
        error!("Failed to build scene: {}", e);
        std::process::exit(1);
    }
    world.insert_resource(config);

    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.add_observer(collision_observer);
    world.add_observer(coin_collected_observer);
    world.add_observer(switch_debug_observer);
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(player_controller.after(update_input_state));
    update.add_systems(sprite_update.after(player_controller));
    update.add_systems(update_collectibles.after(player_controller));
    update.add_systems(
        collision_detector
            .after(sprite_update)
            .after(update_collectibles),
    );
    update.add_systems(collect_coins.after(sprite_update).after(update_collectibles));
    update.add_systems(render_system.after(collision_detector).after(collect_coins));

    info!("Starting Coin Chase");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }

    game::teardown(&mut world);
}
