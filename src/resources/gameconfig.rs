//! Game configuration resource.
//!
//! Tuning values for the simulation, loaded from an INI file. Every value has
//! a default matching the shipped game, so a missing file or key never
//! prevents startup.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! max_step = 0.0166667
//! contact_detection = true
//! seed = 42
//!
//! [player]
//! speed = 320
//! hurt_shader_seconds = 1.2
//!
//! [health]
//! base = 1000
//! step = 100
//! floor = 200
//! decay_interval = 2.0
//! decay_amount = 5
//! contact_damage = 50
//! food_heal = 40
//!
//! [enemy]
//! speed = 70
//! sense_radius = 300
//! max_health = 1.0
//! projectile_damage = 0.55
//! corpse_seconds = 3.0
//!
//! [projectile]
//! speed = 235.5
//! spin = 15.5
//! cooldown = 0.3
//!
//! [level]
//! sections_x = 5
//! sections_y = 3
//! section_width = 10
//! section_height = 10
//! tile_size = 32
//! victory_delay = 2.0
//! catalog = ./assets/sections.json
//!
//! [camera]
//! zoom = 0.44
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;

use crate::error::{DelveError, Result};
use crate::resources::session::HealthTiers;
use crate::resources::tilemap::MapLayout;

const DEFAULT_MAX_STEP: f32 = 1.0 / 60.0;
const DEFAULT_CONFIG_PATH: &str = "./delve.ini";

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSettings {
    pub speed: f32,
    /// Seconds after a hit before the damage shader is cleared.
    pub hurt_shader_seconds: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        PlayerSettings {
            speed: 320.0,
            hurt_shader_seconds: 1.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthSettings {
    pub tiers: HealthTiers,
    pub decay_interval: f32,
    pub decay_amount: i32,
    pub contact_damage: i32,
    pub food_heal: i32,
}

impl Default for HealthSettings {
    fn default() -> Self {
        HealthSettings {
            tiers: HealthTiers::default(),
            decay_interval: 2.0,
            decay_amount: 5,
            contact_damage: 50,
            food_heal: 40,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnemySettings {
    pub speed: f32,
    pub sense_radius: f32,
    pub max_health: f32,
    pub projectile_damage: f32,
    /// Delay between a kill and the corpse being removed.
    pub corpse_seconds: f32,
}

impl Default for EnemySettings {
    fn default() -> Self {
        EnemySettings {
            speed: 70.0,
            sense_radius: 300.0,
            max_health: 1.0,
            projectile_damage: 0.55,
            corpse_seconds: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileSettings {
    pub speed: f32,
    /// Spin in radians per second.
    pub spin: f32,
    /// Minimum seconds between throws.
    pub cooldown: f32,
}

impl Default for ProjectileSettings {
    fn default() -> Self {
        ProjectileSettings {
            speed: 235.5,
            spin: 15.5,
            cooldown: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LevelSettings {
    pub layout: MapLayout,
    pub tile_size: f32,
    /// Seconds between reaching the exit and the win banner.
    pub victory_delay: f32,
    /// Section catalogs to load instead of the built-in set.
    pub catalog: Option<PathBuf>,
}

impl Default for LevelSettings {
    fn default() -> Self {
        LevelSettings {
            layout: MapLayout::default(),
            tile_size: 32.0,
            victory_delay: 2.0,
            catalog: None,
        }
    }
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Longest simulated step; longer frames are clamped to it.
    pub max_step: f32,
    /// Run the built-in overlap detector instead of waiting for the host's
    /// physics to report contacts.
    pub contact_detection: bool,
    /// Seed for level generation. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub player: PlayerSettings,
    pub health: HealthSettings,
    pub enemy: EnemySettings,
    pub projectile: ProjectileSettings,
    pub level: LevelSettings,
    pub camera_zoom: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with the shipped default values.
    pub fn new() -> Self {
        Self {
            max_step: DEFAULT_MAX_STEP,
            contact_detection: true,
            seed: None,
            player: PlayerSettings::default(),
            health: HealthSettings::default(),
            enemy: EnemySettings::default(),
            projectile: ProjectileSettings::default(),
            level: LevelSettings::default(),
            camera_zoom: 0.44,
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

    /// Load configuration from the INI file at `config_path`.
    ///
    /// Missing values retain their current values.
    pub fn load_from_file(&mut self) -> Result<()> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(|e| {
            DelveError::Config(format!("failed to load {:?}: {}", self.config_path, e))
        })?;
        self.apply(&config)?;
        info!("Loaded config from {:?}", self.config_path);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<()> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| DelveError::Config(format!("failed to parse config: {}", e)))?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<()> {
        // [simulation] section
        if let Some(v) = float(config, "simulation", "max_step")? {
            self.max_step = v;
        }
        if let Some(v) = config
            .getbool("simulation", "contact_detection")
            .map_err(DelveError::Config)?
        {
            self.contact_detection = v;
        }
        if let Some(v) = config
            .getuint("simulation", "seed")
            .map_err(DelveError::Config)?
        {
            self.seed = Some(v);
        }

        // [player] section
        if let Some(v) = float(config, "player", "speed")? {
            self.player.speed = v;
        }
        if let Some(v) = float(config, "player", "hurt_shader_seconds")? {
            self.player.hurt_shader_seconds = v;
        }

        // [health] section
        if let Some(v) = int(config, "health", "base")? {
            self.health.tiers.base = v;
        }
        if let Some(v) = int(config, "health", "step")? {
            self.health.tiers.step = v;
        }
        if let Some(v) = int(config, "health", "floor")? {
            self.health.tiers.floor = v;
        }
        if let Some(v) = float(config, "health", "decay_interval")? {
            self.health.decay_interval = v;
        }
        if let Some(v) = int(config, "health", "decay_amount")? {
            self.health.decay_amount = v;
        }
        if let Some(v) = int(config, "health", "contact_damage")? {
            self.health.contact_damage = v;
        }
        if let Some(v) = int(config, "health", "food_heal")? {
            self.health.food_heal = v;
        }

        // [enemy] section
        if let Some(v) = float(config, "enemy", "speed")? {
            self.enemy.speed = v;
        }
        if let Some(v) = float(config, "enemy", "sense_radius")? {
            self.enemy.sense_radius = v;
        }
        if let Some(v) = float(config, "enemy", "max_health")? {
            self.enemy.max_health = v;
        }
        if let Some(v) = float(config, "enemy", "projectile_damage")? {
            self.enemy.projectile_damage = v;
        }
        if let Some(v) = float(config, "enemy", "corpse_seconds")? {
            self.enemy.corpse_seconds = v;
        }

        // [projectile] section
        if let Some(v) = float(config, "projectile", "speed")? {
            self.projectile.speed = v;
        }
        if let Some(v) = float(config, "projectile", "spin")? {
            self.projectile.spin = v;
        }
        if let Some(v) = float(config, "projectile", "cooldown")? {
            self.projectile.cooldown = v;
        }

        // [level] section
        if let Some(v) = uint(config, "level", "sections_x")? {
            self.level.layout.sections_x = v;
        }
        if let Some(v) = uint(config, "level", "sections_y")? {
            self.level.layout.sections_y = v;
        }
        if let Some(v) = uint(config, "level", "section_width")? {
            self.level.layout.section_width = v;
        }
        if let Some(v) = uint(config, "level", "section_height")? {
            self.level.layout.section_height = v;
        }
        if let Some(v) = float(config, "level", "tile_size")? {
            self.level.tile_size = v;
        }
        if let Some(v) = float(config, "level", "victory_delay")? {
            self.level.victory_delay = v;
        }
        if let Some(path) = config.get("level", "catalog") {
            self.level.catalog = Some(PathBuf::from(path));
        }

        // [camera] section
        if let Some(v) = float(config, "camera", "zoom")? {
            self.camera_zoom = v;
        }

        if self.max_step <= 0.0 {
            return Err(DelveError::Config(format!(
                "max_step must be positive, got {}",
                self.max_step
            )));
        }
        self.level.layout.validate()?;

        info!(
            "Config: {}x{} sections of {}x{}, tile {}, max_step {:.4}, contact_detection={}",
            self.level.layout.sections_x,
            self.level.layout.sections_y,
            self.level.layout.section_width,
            self.level.layout.section_height,
            self.level.tile_size,
            self.max_step,
            self.contact_detection
        );
        Ok(())
    }

    /// Save configuration to the INI file at `config_path`.
    pub fn save_to_file(&self) -> Result<()> {
        let mut config = Ini::new();

        config.set("simulation", "max_step", Some(self.max_step.to_string()));
        config.set(
            "simulation",
            "contact_detection",
            Some(self.contact_detection.to_string()),
        );
        if let Some(seed) = self.seed {
            config.set("simulation", "seed", Some(seed.to_string()));
        }

        config.set("player", "speed", Some(self.player.speed.to_string()));
        config.set(
            "player",
            "hurt_shader_seconds",
            Some(self.player.hurt_shader_seconds.to_string()),
        );

        config.set("health", "base", Some(self.health.tiers.base.to_string()));
        config.set("health", "step", Some(self.health.tiers.step.to_string()));
        config.set("health", "floor", Some(self.health.tiers.floor.to_string()));
        config.set(
            "health",
            "decay_interval",
            Some(self.health.decay_interval.to_string()),
        );
        config.set(
            "health",
            "decay_amount",
            Some(self.health.decay_amount.to_string()),
        );
        config.set(
            "health",
            "contact_damage",
            Some(self.health.contact_damage.to_string()),
        );
        config.set("health", "food_heal", Some(self.health.food_heal.to_string()));

        config.set("enemy", "speed", Some(self.enemy.speed.to_string()));
        config.set(
            "enemy",
            "sense_radius",
            Some(self.enemy.sense_radius.to_string()),
        );
        config.set("enemy", "max_health", Some(self.enemy.max_health.to_string()));
        config.set(
            "enemy",
            "projectile_damage",
            Some(self.enemy.projectile_damage.to_string()),
        );
        config.set(
            "enemy",
            "corpse_seconds",
            Some(self.enemy.corpse_seconds.to_string()),
        );

        config.set("projectile", "speed", Some(self.projectile.speed.to_string()));
        config.set("projectile", "spin", Some(self.projectile.spin.to_string()));
        config.set(
            "projectile",
            "cooldown",
            Some(self.projectile.cooldown.to_string()),
        );

        let layout = self.level.layout;
        config.set("level", "sections_x", Some(layout.sections_x.to_string()));
        config.set("level", "sections_y", Some(layout.sections_y.to_string()));
        config.set(
            "level",
            "section_width",
            Some(layout.section_width.to_string()),
        );
        config.set(
            "level",
            "section_height",
            Some(layout.section_height.to_string()),
        );
        config.set("level", "tile_size", Some(self.level.tile_size.to_string()));
        config.set(
            "level",
            "victory_delay",
            Some(self.level.victory_delay.to_string()),
        );
        if let Some(catalog) = &self.level.catalog {
            config.set("level", "catalog", Some(catalog.display().to_string()));
        }

        config.set("camera", "zoom", Some(self.camera_zoom.to_string()));

        config.write(&self.config_path).map_err(|source| DelveError::Io {
            path: self.config_path.display().to_string(),
            source,
        })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

fn float(config: &Ini, section: &str, key: &str) -> Result<Option<f32>> {
    Ok(config
        .getfloat(section, key)
        .map_err(DelveError::Config)?
        .map(|v| v as f32))
}

fn int(config: &Ini, section: &str, key: &str) -> Result<Option<i32>> {
    Ok(config
        .getint(section, key)
        .map_err(DelveError::Config)?
        .map(|v| v as i32))
}

fn uint(config: &Ini, section: &str, key: &str) -> Result<Option<usize>> {
    Ok(config
        .getuint(section, key)
        .map_err(DelveError::Config)?
        .map(|v| v as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_game() {
        let config = GameConfig::new();
        assert!((config.max_step - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(config.player.speed, 320.0);
        assert_eq!(config.enemy.speed, 70.0);
        assert_eq!(config.enemy.sense_radius, 300.0);
        assert_eq!(config.projectile.speed, 235.5);
        assert_eq!(config.level.layout.grid_size(), (50, 30));
        assert_eq!(config.health.contact_damage, 50);
        assert_eq!(config.health.food_heal, 40);
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[simulation]\ncontact_detection = false\nseed = 7\n\n\
                 [enemy]\nspeed = 90.5\n\n[level]\nsections_x = 3\n",
            )
            .unwrap();
        assert!(!config.contact_detection);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.enemy.speed, 90.5);
        assert_eq!(config.enemy.sense_radius, 300.0);
        assert_eq!(config.level.layout.sections_x, 3);
        assert_eq!(config.level.layout.sections_y, 3);
    }

    #[test]
    fn malformed_number_is_a_config_error() {
        let mut config = GameConfig::new();
        let err = config
            .load_from_str("[player]\nspeed = fast\n")
            .unwrap_err();
        assert!(matches!(err, DelveError::Config(_)));
    }

    #[test]
    fn degenerate_layout_is_rejected() {
        let mut config = GameConfig::new();
        let err = config
            .load_from_str("[level]\nsections_y = 1\n")
            .unwrap_err();
        assert!(matches!(err, DelveError::Layout(_)));
    }

    #[test]
    fn missing_file_is_reported() {
        let mut config = GameConfig::with_path("/nonexistent/delve.ini");
        assert!(config.load_from_file().is_err());
    }

    #[test]
    fn save_then_load_preserves_tuning() {
        let path = std::env::temp_dir().join(format!("delve-config-{}.ini", std::process::id()));
        let mut config = GameConfig::with_path(&path);
        config.enemy.sense_radius = 250.0;
        config.seed = Some(99);
        config.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.enemy.sense_radius, 250.0);
        assert_eq!(loaded.seed, Some(99));
    }
}
