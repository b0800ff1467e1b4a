//! Top-level frame driver.
//!
//! A [`Scene`] owns the ECS [`World`] and the per-tick [`Schedule`]. Hosts
//! drive it with three entry points:
//!
//! - [`Scene::tick`] once per frame with the elapsed time,
//! - [`Scene::contact`] whenever their physics reports two bodies touching,
//! - [`Scene::send_input`] for every controller event.
//!
//! Everything else (rendering, audio playback, physics) reads the world or
//! the audio channel returned by [`Scene::install_audio`].

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;
use log::info;

use crate::components::movement::PlayerMove;
use crate::components::persistent::Persistent;
use crate::error::Result;
use crate::events::audio::AudioCmd;
use crate::events::contact::ContactEvent;
use crate::events::gamestate::observe_gamestate_change_event;
use crate::events::input::ControllerEvent;
use crate::resources::animationstore::AnimationStore;
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::contacts::ActiveContacts;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameMode, GameState, NextGameState};
use crate::resources::input::InputState;
use crate::resources::levelrng::LevelRng;
use crate::resources::sectioncatalog::SectionCatalogs;
use crate::resources::session::{GameSession, Progress};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::{animation_playback, apply_animation_requests};
use crate::systems::attack::fire_projectile;
use crate::systems::audio::{forward_audio_cmds, update_audio_cmds};
use crate::systems::camera::camera_follow;
use crate::systems::collision::collision_detector;
use crate::systems::combat::resolve_contact;
use crate::systems::gamestate::{
    apply_pending_transitions, enter_initial, simulation_running, victory_delay,
};
use crate::systems::health::{health_check, health_decay, hurt_flash_system};
use crate::systems::input::{apply_player_intent, route_controller_input};
use crate::systems::movement::{enemy_movement, player_movement, projectile_movement};
use crate::systems::time::update_world_time;
use crate::systems::ttl::ttl_system;

/// Run condition for the built-in contact detector.
fn contact_detection_enabled(config: Res<GameConfig>) -> bool {
    config.contact_detection
}

pub struct Scene {
    world: World,
    schedule: Schedule,
}

impl Scene {
    /// Create a scene using the catalogs named in `config`, or the built-in
    /// ones, and enter the first level.
    pub fn new(config: GameConfig) -> Result<Self> {
        let catalogs = match &config.level.catalog {
            Some(path) => SectionCatalogs::load_from_file(path)?,
            None => SectionCatalogs::builtin()?,
        };
        Self::with_catalogs(config, catalogs)
    }

    /// Create a scene with explicit section catalogs and enter the first level.
    pub fn with_catalogs(config: GameConfig, catalogs: SectionCatalogs) -> Result<Self> {
        config.level.layout.validate()?;
        catalogs.validate(
            config.level.layout.section_width,
            config.level.layout.section_height,
        )?;

        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(1.0));
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        world.insert_resource(GameSession::new(config.projectile.cooldown));
        world.insert_resource(Progress::default());
        world.insert_resource(InputState::default());
        world.insert_resource(Camera2DRes::new(config.camera_zoom));
        world.insert_resource(AnimationStore::default());
        world.insert_resource(LevelRng::new(config.seed));
        world.insert_resource(ActiveContacts::default());
        world.insert_resource(catalogs);
        world.init_resource::<Messages<AudioCmd>>();
        world.insert_resource(config);

        world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
        world.spawn((Observer::new(resolve_contact), Persistent));
        // Observers must be registered before anything triggers.
        world.flush();

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                route_controller_input,
                (
                    (apply_player_intent, player_movement).chain(),
                    (
                        projectile_movement,
                        apply_animation_requests,
                        animation_playback,
                    )
                        .chain(),
                    enemy_movement,
                    camera_follow,
                    fire_projectile,
                    (health_decay, hurt_flash_system, ttl_system, victory_delay).chain(),
                    health_check,
                    collision_detector.run_if(contact_detection_enabled),
                )
                    .chain()
                    .run_if(simulation_running),
                apply_pending_transitions,
                // audio systems must be together
                (update_audio_cmds, forward_audio_cmds).chain(),
            )
                .chain(),
        );

        enter_initial(&mut world);
        info!("Scene ready");
        Ok(Scene { world, schedule })
    }

    /// Advance the simulation by `dt` seconds (clamped to the configured max step).
    pub fn tick(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Deliver a contact between two bodies and resolve it right away,
    /// including any mode change it causes.
    pub fn contact(&mut self, a: Entity, b: Entity) {
        self.world.trigger(ContactEvent { a, b });
        self.world.flush();
        apply_pending_transitions(&mut self.world);
    }

    /// Queue a controller event for the next tick.
    pub fn send_input(&mut self, event: ControllerEvent) {
        self.world.resource_mut::<InputState>().push(event);
    }

    /// Connect an audio channel; the receiver gets every command from now on.
    pub fn install_audio(&mut self) -> Receiver<AudioCmd> {
        setup_audio(&mut self.world)
    }

    /// Send `Shutdown` to the audio channel and disconnect it.
    pub fn shutdown_audio(&mut self) {
        shutdown_audio(&mut self.world);
    }

    pub fn mode(&self) -> GameMode {
        self.world.resource::<GameState>().get()
    }

    pub fn health(&self) -> i32 {
        self.world.resource::<GameSession>().health
    }

    pub fn difficulty(&self) -> u32 {
        self.world.resource::<Progress>().difficulty
    }

    /// The player entity of the current level, if one was spawned.
    pub fn player(&mut self) -> Option<Entity> {
        self.world
            .query_filtered::<Entity, With<PlayerMove>>()
            .iter(&self.world)
            .next()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::banner::{Banner, BannerKind};

    #[test]
    fn new_scene_waits_in_initial_with_a_level() {
        let mut config = GameConfig::new();
        config.seed = Some(7);
        let mut scene = Scene::new(config).unwrap();
        assert_eq!(scene.mode(), GameMode::Initial);
        assert_eq!(scene.health(), 1000);
        assert!(scene.player().is_some());
        let kinds: Vec<BannerKind> = scene
            .world_mut()
            .query::<&Banner>()
            .iter(scene.world())
            .map(|b| b.kind)
            .collect();
        assert!(kinds.contains(&BannerKind::TapToStart));
        assert!(kinds.contains(&BannerKind::LevelNumber));
    }

    #[test]
    fn bad_catalogs_fail_construction() {
        let mut catalogs = SectionCatalogs::builtin().unwrap();
        catalogs.top_left.clear();
        assert!(Scene::with_catalogs(GameConfig::new(), catalogs).is_err());
    }

    #[test]
    fn frozen_scene_still_counts_frames() {
        let mut scene = Scene::new(GameConfig::new()).unwrap();
        scene.tick(1.0 / 60.0);
        scene.tick(1.0 / 60.0);
        assert_eq!(scene.world().resource::<WorldTime>().frame_count, 2);
        assert_eq!(scene.mode(), GameMode::Initial);
    }
}
