//! Delve headless runner.
//!
//! Runs a session of the simulation core without a window: the built-in
//! contact detector stands in for physics, a scripted autopilot plays the
//! controller, and audio commands are logged by a stand-in audio thread.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 42 --frames 3600
//! cargo run -- --dump-map --sections 4x4
//! ```

mod components;
mod entities;
mod error;
mod events;
mod game;
mod resources;
mod scene;
mod systems;

use std::path::PathBuf;
use std::thread;

use bevy_ecs::prelude::*;
use clap::Parser;
use crossbeam_channel::Receiver;
use glam::Vec2;

use crate::components::mapposition::MapPosition;
use crate::components::movement::EnemyMove;
use crate::events::audio::AudioCmd;
use crate::events::input::{ControllerButton, ControllerEvent, ControllerStick};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameMode;
use crate::resources::tilemap::TileMap;
use crate::scene::Scene;

/// Delve, headless
#[derive(Parser)]
#[command(version, about = "Runs the Delve simulation core without a window.")]
struct Cli {
    /// INI configuration file (default: ./delve.ini, ignored if missing).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for level generation.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to simulate at 60 fps.
    #[arg(long, default_value_t = 3600)]
    frames: u32,

    /// Level size in sections, e.g. 5x3.
    #[arg(long, value_name = "WxH", value_parser = parse_sections)]
    sections: Option<(usize, usize)>,

    /// Print the first generated level as ASCII and exit.
    #[arg(long)]
    dump_map: bool,

    /// JSON file with section catalogs to use instead of the built-in ones.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,
}

fn parse_sections(s: &str) -> Result<(usize, usize), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
    let w = w.trim().parse().map_err(|e| format!("bad width: {e}"))?;
    let h = h.trim().parse().map_err(|e| format!("bad height: {e}"))?;
    Ok((w, h))
}

fn load_config(cli: &Cli) -> error::Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = GameConfig::with_path(path);
            config.load_from_file()?;
            config
        }
        None => {
            let mut config = GameConfig::new();
            if let Err(e) = config.load_from_file() {
                log::debug!("Using default config: {}", e);
            }
            config
        }
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some((w, h)) = cli.sections {
        config.level.layout.sections_x = w;
        config.level.layout.sections_y = h;
    }
    if cli.catalog.is_some() {
        config.level.catalog = cli.catalog.clone();
    }
    config.contact_detection = true;
    Ok(config)
}

fn spawn_audio_logger(rx: Receiver<AudioCmd>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for cmd in rx.iter() {
            match cmd {
                AudioCmd::Shutdown => break,
                cmd => log::debug!("audio: {:?}", cmd),
            }
        }
        log::debug!("Audio thread stopped");
    })
}

/// Scripted controller: confirms every prompt, wanders, and throws at the
/// nearest enemy in range.
struct Autopilot {
    rng: fastrand::Rng,
    wander_left: f32,
    confirm_left: f32,
    aim_range: f32,
}

impl Autopilot {
    fn new(seed: Option<u64>, aim_range: f32) -> Self {
        Autopilot {
            rng: seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed),
            wander_left: 0.0,
            confirm_left: 0.5,
            aim_range,
        }
    }

    fn drive(&mut self, scene: &mut Scene, dt: f32) {
        match scene.mode() {
            GameMode::Initial | GameMode::Win | GameMode::Lose => {
                self.confirm_left -= dt;
                if self.confirm_left <= 0.0 {
                    self.confirm_left = 0.5;
                    scene.send_input(ControllerEvent::press(ControllerButton::A));
                    scene.send_input(ControllerEvent::release(ControllerButton::A));
                }
            }
            GameMode::Active => {
                self.wander_left -= dt;
                if self.wander_left <= 0.0 {
                    self.wander_left = 1.0;
                    let angle = self.rng.f32() * std::f32::consts::TAU;
                    scene.send_input(ControllerEvent::stick(
                        ControllerStick::Left,
                        angle.cos(),
                        angle.sin(),
                    ));
                }
                let aim = self.nearest_enemy_offset(scene).unwrap_or(Vec2::ZERO);
                scene.send_input(ControllerEvent::stick(ControllerStick::Right, aim.x, aim.y));
            }
            GameMode::Paused | GameMode::Limbo => {}
        }
    }

    fn nearest_enemy_offset(&self, scene: &mut Scene) -> Option<Vec2> {
        let player = scene.player()?;
        let world = scene.world_mut();
        let player_pos = world.get::<MapPosition>(player)?.pos;
        world
            .query_filtered::<&MapPosition, With<EnemyMove>>()
            .iter(world)
            .map(|p| p.pos - player_pos)
            .filter(|offset| offset.length() < self.aim_range)
            .min_by(|a, b| a.length_squared().total_cmp(&b.length_squared()))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let seed = config.seed;
    let aim_range = config.enemy.sense_radius;
    let max_step = config.max_step;

    let mut scene = match Scene::new(config) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if cli.dump_map {
        match scene.world().get_resource::<TileMap>() {
            Some(map) => print!("{}", map.to_ascii()),
            None => {
                eprintln!("Error: no level was generated");
                std::process::exit(1);
            }
        }
        return;
    }

    log::info!("Delve running headless for {} frames", cli.frames);
    let audio = spawn_audio_logger(scene.install_audio());
    let mut autopilot = Autopilot::new(seed, aim_range);
    let mut last_mode = scene.mode();
    for _ in 0..cli.frames {
        autopilot.drive(&mut scene, max_step);
        scene.tick(max_step);
        let mode = scene.mode();
        if mode != last_mode {
            log::info!(
                "Level {}: {:?} -> {:?}, health {}",
                scene.difficulty(),
                last_mode,
                mode,
                scene.health()
            );
            last_mode = mode;
        }
    }

    scene.shutdown_audio();
    if audio.join().is_err() {
        log::error!("Audio thread panicked");
    }
    log::info!(
        "Finished at level {} in {:?} with health {}",
        scene.difficulty(),
        scene.mode(),
        scene.health()
    );
}
