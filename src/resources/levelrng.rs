use bevy_ecs::prelude::Resource;

/// Random source for level generation and floor texture picks.
///
/// Lives for the whole session, so a seeded run reproduces every level in
/// sequence, not just the first.
#[derive(Resource, Debug, Clone)]
pub struct LevelRng(pub fastrand::Rng);

impl LevelRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => LevelRng(fastrand::Rng::with_seed(seed)),
            None => LevelRng(fastrand::Rng::new()),
        }
    }
}
