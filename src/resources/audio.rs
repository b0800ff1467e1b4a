//! Bridge between the ECS world and the host's audio thread.
//!
//! Use [`setup_audio`] once during initialization. It inserts the
//! [`AudioBridge`] resource and returns the receiving end of the command
//! channel; the host moves it onto whatever thread owns the audio device.
//! Without a bridge, commands are still written to `Messages<AudioCmd>` and
//! simply dropped at the end of the tick.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::audio::AudioCmd;

/// Shared bridge between the ECS world and the audio thread.
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
}

/// Create the command channel and register the bridge resource.
pub fn setup_audio(world: &mut World) -> Receiver<AudioCmd> {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    world.insert_resource(AudioBridge { tx_cmd });
    if !world.contains_resource::<Messages<AudioCmd>>() {
        world.init_resource::<Messages<AudioCmd>>();
    }
    rx_cmd
}

/// Tell the audio thread to stop and drop the bridge.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
    }
}
