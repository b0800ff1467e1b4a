//! Audio forwarding systems.
//!
//! - [`forward_audio_cmds`] sends every [`AudioCmd`] written this tick to the
//!   host audio thread over the [`AudioBridge`] channel, if one is installed.
//! - [`update_audio_cmds`] advances the message queue so this tick's
//!   commands are dropped after one more frame.

use bevy_ecs::prelude::*;

use crate::events::audio::AudioCmd;
use crate::resources::audio::AudioBridge;

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Option<Res<AudioBridge>>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        if let Some(bridge) = &bridge {
            // Ignore send errors: the receiver is gone once the host shuts audio down.
            let _ = bridge.tx_cmd.send(cmd.clone());
        }
    }
}

/// Advance the ECS message queue for AudioCmd.
pub fn update_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}
