use bevy_ecs::prelude::Component;

/// Kinds of on-screen announcement a game mode can put up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerKind {
    TapToStart,
    LevelNumber,
    YouWon,
    YouDied,
}

/// Text overlay shown on the GUI layer until the owning mode exits.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn new(kind: BannerKind, level: u32) -> Self {
        let text = match kind {
            BannerKind::TapToStart => "Tap to start".to_string(),
            BannerKind::LevelNumber => format!("Level {level}"),
            BannerKind::YouWon => "You Won!!!".to_string(),
            BannerKind::YouDied => "You Died!".to_string(),
        };
        Banner { kind, text }
    }
}
