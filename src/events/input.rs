//! Controller input events.
//!
//! The host's input driver translates gamepad buttons, analog sticks, touch
//! taps and device tilt into [`ControllerEvent`]s and hands them to
//! [`Scene::send_input`](crate::scene::Scene::send_input). They are queued on
//! [`InputState`](crate::resources::input::InputState) and routed once per
//! tick according to the session's current input mode.

use glam::Vec2;

/// Digital buttons the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerButton {
    A,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    Pause,
}

impl ControllerButton {
    /// Parse the element names used by game-controller profiles
    /// (`"buttonA"`, `"dpad_up"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "buttonA" => Some(ControllerButton::A),
            "dpad_up" => Some(ControllerButton::DpadUp),
            "dpad_down" => Some(ControllerButton::DpadDown),
            "dpad_left" => Some(ControllerButton::DpadLeft),
            "dpad_right" => Some(ControllerButton::DpadRight),
            "pause" => Some(ControllerButton::Pause),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerStick {
    Left,
    Right,
}

impl ControllerStick {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "leftstick" => Some(ControllerStick::Left),
            "rightstick" => Some(ControllerStick::Right),
            _ => None,
        }
    }
}

/// Kind of gamepad attached next to a tilt-capable device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerKind {
    /// Full profile with sticks and shoulder buttons.
    Standard,
    /// Micro or otherwise reduced profile.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerEvent {
    /// A digital button changed. `value` is the analog pressure for d-pad
    /// buttons (0.0 when released).
    Button {
        button: ControllerButton,
        value: f32,
        pressed: bool,
    },
    /// An analog stick moved to `point` (each axis in -1.0..=1.0).
    Stick { stick: ControllerStick, point: Vec2 },
    /// A touch at `location`, in world coordinates.
    Tap { location: Vec2 },
    /// Device tilt from the accelerometer. `controller` is the gamepad
    /// attached alongside the device, if any: with none, tilt moves the
    /// player; with a standard gamepad, tilt aims; with any other gamepad,
    /// tilt is ignored.
    Tilt {
        acceleration: Vec2,
        controller: Option<ControllerKind>,
    },
}

impl ControllerEvent {
    pub fn press(button: ControllerButton) -> Self {
        ControllerEvent::Button {
            button,
            value: 1.0,
            pressed: true,
        }
    }

    pub fn release(button: ControllerButton) -> Self {
        ControllerEvent::Button {
            button,
            value: 0.0,
            pressed: false,
        }
    }

    pub fn stick(stick: ControllerStick, x: f32, y: f32) -> Self {
        ControllerEvent::Stick {
            stick,
            point: Vec2::new(x, y),
        }
    }
}
