//! Consumable effects triggered by [`ItemAction`](super::ItemAction).
//!
//! Each effect is planned against the unmodified state first; planning is
//! where every refusal happens. Activation only mutates.

use crate::action::{ActionError, Impossible, lookup_actor, lookup_actor_mut, subject_phrase};
use crate::combat::{KillReport, apply_damage};
use crate::message::{MessageColor, MessageSink};
use crate::state::{Consumable, EntityId, GameState, Position};

/// What consuming an item did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumeOutcome {
    Healed {
        amount: i32,
    },
    Struck {
        target: EntityId,
        damage: i32,
        kill: Option<KillReport>,
    },
    Exploded {
        hits: Vec<(EntityId, Option<KillReport>)>,
        damage: i32,
    },
    Confused {
        target: EntityId,
        turns: u32,
    },
}

/// A validated effect, ready to apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
    Heal { amount: i32 },
    Lightning { target: EntityId, damage: i32 },
    Fireball { targets: Vec<EntityId>, damage: i32 },
    Confuse { target: EntityId, turns: u32 },
}

/// Resolves targets and checks every precondition without mutating.
pub(crate) fn plan(
    state: &GameState,
    consumer: EntityId,
    consumable: Consumable,
    target: Position,
) -> Result<Effect, ActionError> {
    let actor = lookup_actor(state, consumer)?;

    match consumable {
        Consumable::Healing { amount } => {
            let amount = amount.min(actor.fighter.missing_hp());
            if amount <= 0 {
                return Err(Impossible::HealthFull.into());
            }
            Ok(Effect::Heal { amount })
        }
        Consumable::LightningDamage {
            damage,
            maximum_range,
        } => {
            let reach = i64::from(maximum_range) + 1;
            let origin = actor.position;
            // `min_by_key` keeps the first of equal distances.
            let closest = state
                .living_actors_except(consumer)
                .filter(|other| other.faction != actor.faction)
                .map(|other| (other.id, origin.distance_squared(other.position)))
                .filter(|&(_, distance)| distance < reach * reach)
                .min_by_key(|&(_, distance)| distance)
                .ok_or(Impossible::NoTargetInRange)?;
            Ok(Effect::Lightning {
                target: closest.0,
                damage,
            })
        }
        Consumable::FireballDamage { damage, radius } => {
            if !state.in_bounds(target) {
                return Err(Impossible::OutOfBounds.into());
            }
            let radius = i64::from(radius);
            let targets: Vec<EntityId> = state
                .entities
                .living_actors()
                .filter(|other| target.distance_squared(other.position) <= radius * radius)
                .map(|other| other.id)
                .collect();
            if targets.is_empty() {
                return Err(Impossible::NoTargetsInRadius.into());
            }
            Ok(Effect::Fireball { targets, damage })
        }
        Consumable::Confusion { number_of_turns } => {
            let victim = state.actor_at(target).ok_or(Impossible::NoTarget)?;
            if victim.id == consumer {
                return Err(Impossible::CannotTargetSelf.into());
            }
            Ok(Effect::Confuse {
                target: victim.id,
                turns: number_of_turns,
            })
        }
    }
}

/// Applies a planned effect and narrates it.
pub(crate) fn activate(
    effect: Effect,
    state: &mut GameState,
    log: &mut dyn MessageSink,
    consumer: EntityId,
    item_name: &str,
) -> Result<ConsumeOutcome, ActionError> {
    let attack_color = MessageColor::attack(consumer.is_player());

    match effect {
        Effect::Heal { amount } => {
            let actor = lookup_actor_mut(state, consumer)?;
            let amount = actor.fighter.heal(amount);
            let subject = subject_phrase(actor, "consume", "consumes");
            let verb = if actor.is_player() { "recover" } else { "recovers" };
            log.add_message(
                format!("{subject} the {item_name}, and {verb} {amount} HP!"),
                MessageColor::HealthRecovered,
            );
            Ok(ConsumeOutcome::Healed { amount })
        }
        Effect::Lightning { target, damage } => {
            let name = lookup_actor(state, target)?.name.clone();
            log.add_message(
                format!(
                    "A lightning bolt strikes the {name} with a loud thunder, for {damage} damage!"
                ),
                attack_color,
            );
            let kill = apply_damage(state, log, consumer, target, damage)?;
            Ok(ConsumeOutcome::Struck {
                target,
                damage,
                kill,
            })
        }
        Effect::Fireball { targets, damage } => {
            let mut hits = Vec::with_capacity(targets.len());
            for target in targets {
                let name = lookup_actor(state, target)?.name.clone();
                log.add_message(
                    format!("The {name} is engulfed in a fiery explosion, taking {damage} damage!"),
                    attack_color,
                );
                let kill = apply_damage(state, log, consumer, target, damage)?;
                hits.push((target, kill));
            }
            Ok(ConsumeOutcome::Exploded { hits, damage })
        }
        Effect::Confuse { target, turns } => {
            let victim = lookup_actor_mut(state, target)?;
            victim.confused_turns = turns;
            log.add_message(
                format!(
                    "The eyes of the {} look vacant, as it starts to stumble around!",
                    victim.name
                ),
                MessageColor::StatusEffectApplied,
            );
            Ok(ConsumeOutcome::Confused { target, turns })
        }
    }
}
