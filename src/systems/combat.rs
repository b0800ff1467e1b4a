//! Collision/combat resolver.
//!
//! [`resolve_contact`] is a global observer for
//! [`ContactEvent`](crate::events::contact::ContactEvent). It looks at the
//! [`Actor`] tags of both entities, ignores the order they arrived in, and
//! applies the consequence of the pair:
//!
//! | pair                  | consequence |
//! |-----------------------|-------------|
//! | level exit + player   | request `LevelExitReached` |
//! | enemy + player        | enemy removed, player loses health, damage cue and flash |
//! | food + player         | food removed, player gains health, pickup cue |
//! | wall + projectile     | projectile removed |
//! | projectile + enemy    | projectile removed, enemy damaged; on death the enemy stops chasing, loses its body, plays its death clip and is removed after a delay |
//!
//! Any other pair is ignored. Enemy health is written immediately, so a
//! second contact with an enemy that is already dead (two projectiles landing
//! in the same tick, or a corpse touching the player) is a no-op.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::actor::Actor;
use crate::components::animation::{AnimationState, Animated};
use crate::components::collision::CollisionBody;
use crate::components::health::{EnemyHealth, HurtFlash};
use crate::components::movement::EnemyMove;
use crate::components::ttl::Ttl;
use crate::error::{DelveError, invariant_violated};
use crate::events::audio::{AudioCmd, Cue};
use crate::events::contact::ContactEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{ModeEvent, NextGameState};
use crate::resources::session::GameSession;

/// A contact with both sides tagged.
struct TaggedContact {
    a: (Entity, Actor),
    b: (Entity, Actor),
}

impl TaggedContact {
    /// The entities playing `first` and `second`, in that order, if the
    /// contact is between exactly those roles.
    fn pair(&self, first: Actor, second: Actor) -> Option<(Entity, Entity)> {
        if self.a.1 == first && self.b.1 == second {
            Some((self.a.0, self.b.0))
        } else if self.b.1 == first && self.a.1 == second {
            Some((self.b.0, self.a.0))
        } else {
            None
        }
    }
}

pub fn resolve_contact(
    trigger: On<ContactEvent>,
    config: Res<GameConfig>,
    mut session: ResMut<GameSession>,
    mut next_state: ResMut<NextGameState>,
    actors: Query<&Actor>,
    mut enemies: Query<(&mut EnemyHealth, Option<&mut Animated>)>,
    mut flashes: Query<&mut HurtFlash>,
    mut commands: Commands,
    mut audio: MessageWriter<AudioCmd>,
) {
    let ContactEvent { a, b } = *trigger.event();
    let (Ok(&actor_a), Ok(&actor_b)) = (actors.get(a), actors.get(b)) else {
        debug!("contact between untagged or removed entities {:?} and {:?}", a, b);
        return;
    };
    let contact = TaggedContact {
        a: (a, actor_a),
        b: (b, actor_b),
    };

    if contact.pair(Actor::LevelExit, Actor::Player).is_some() {
        next_state.request(ModeEvent::LevelExitReached);
    } else if let Some((enemy, player)) = contact.pair(Actor::Enemy, Actor::Player) {
        let Ok((mut health, _)) = enemies.get_mut(enemy) else {
            invariant_violated(DelveError::MissingCapability {
                entity: enemy,
                capability: "EnemyHealth",
                required_by: "Actor::Enemy",
            });
            return;
        };
        if health.is_dead() {
            debug!("dead enemy {:?} touched the player, ignored", enemy);
            return;
        }
        health.0 = 0.0;
        commands.entity(enemy).try_despawn();
        session.health -= config.health.contact_damage;
        audio.write(AudioCmd::PlayFx(Cue::Damage));
        if let Ok(mut flash) = flashes.get_mut(player) {
            flash.hit();
        }
    } else if let Some((food, _)) = contact.pair(Actor::Food, Actor::Player) {
        commands.entity(food).try_despawn();
        session.health += config.health.food_heal;
        audio.write(AudioCmd::PlayFx(Cue::Pickup));
    } else if let Some((_, projectile)) = contact.pair(Actor::Wall, Actor::Projectile) {
        commands.entity(projectile).try_despawn();
    } else if let Some((projectile, enemy)) = contact.pair(Actor::Projectile, Actor::Enemy) {
        let Ok((mut health, animated)) = enemies.get_mut(enemy) else {
            invariant_violated(DelveError::MissingCapability {
                entity: enemy,
                capability: "EnemyHealth",
                required_by: "Actor::Enemy",
            });
            return;
        };
        if health.is_dead() {
            debug!("projectile {:?} hit dead enemy {:?}, ignored", projectile, enemy);
            return;
        }
        commands.entity(projectile).try_despawn();
        health.0 -= config.enemy.projectile_damage;
        if !health.is_dead() {
            audio.write(AudioCmd::PlayFx(Cue::Hit));
            return;
        }

        audio.write(AudioCmd::PlayFx(Cue::Kill));
        match animated {
            Some(mut animated) => animated.request(AnimationState::DieDown),
            None => invariant_violated(DelveError::MissingCapability {
                entity: enemy,
                capability: "Animated",
                required_by: "EnemyHealth",
            }),
        }
        commands
            .entity(enemy)
            .try_remove::<(EnemyMove, CollisionBody)>()
            .try_insert(Ttl::new(config.enemy.corpse_seconds));
    } else {
        debug!("no rule for contact {:?} / {:?}", actor_a, actor_b);
    }
}
