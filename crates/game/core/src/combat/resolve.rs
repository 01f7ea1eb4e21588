//! Shared strike resolution for melee, ranged and healing.

use crate::action::{ActionError, Impossible};
use crate::message::{MessageColor, MessageSink, capitalize};
use crate::state::{EntityId, GameState, Position};

use super::damage::{StrikeKind, strike_magnitude};
use super::kill::{KillReport, resolve_kill};

/// How a strike ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrikeOutcome {
    /// Faction gating stopped the strike. Nothing was narrated.
    Ignored { target: EntityId },
    /// Magnitude was not positive; narrated but nothing applied.
    NoEffect { target: EntityId, magnitude: i32 },
    /// Hp changed by `magnitude`. `kill` is set if the target died.
    Applied {
        target: EntityId,
        magnitude: i32,
        kill: Option<KillReport>,
    },
}

impl StrikeOutcome {
    pub fn target(&self) -> EntityId {
        match self {
            StrikeOutcome::Ignored { target }
            | StrikeOutcome::NoEffect { target, .. }
            | StrikeOutcome::Applied { target, .. } => *target,
        }
    }

    pub fn kill(&self) -> Option<&KillReport> {
        match self {
            StrikeOutcome::Applied { kill, .. } => kill.as_ref(),
            _ => None,
        }
    }
}

/// Resolves a strike from `attacker` against whoever stands on `target_position`.
///
/// Steps run in a fixed order: target lookup, faction gating, magnitude,
/// narration, mutation, kill check. Only the lookup can fail with
/// [`Impossible::NothingToAttack`], and it fails before anything changes.
pub fn resolve_strike(
    state: &mut GameState,
    log: &mut dyn MessageSink,
    attacker_id: EntityId,
    target_position: Position,
    kind: StrikeKind,
) -> Result<StrikeOutcome, ActionError> {
    let attacker = state
        .entities
        .actor(attacker_id)
        .ok_or(ActionError::ActorNotFound(attacker_id))?;
    let target = state
        .actor_at(target_position)
        .ok_or(Impossible::NothingToAttack)?;
    let target_id = target.id;

    if kind.is_gated(attacker.faction.is_allied_with(target.faction)) {
        tracing::debug!(
            attacker = %attacker_id,
            target = %target_id,
            kind = %kind,
            "strike gated by faction"
        );
        return Ok(StrikeOutcome::Ignored { target: target_id });
    }

    let magnitude = strike_magnitude(
        kind,
        attacker.power(),
        attacker.combat_trait,
        target.defense(),
    );
    tracing::trace!(
        kind = %kind,
        power = attacker.power(),
        defense = target.defense(),
        magnitude,
        "strike magnitude"
    );

    let description = kind.describe(
        &capitalize(&attacker.name),
        attacker.combat_trait,
        &target.name,
    );
    let color = MessageColor::attack(attacker.is_player());

    if magnitude <= 0 {
        log.add_message(
            format!("{description} {}", kind.no_effect_suffix()),
            color,
        );
        return Ok(StrikeOutcome::NoEffect {
            target: target_id,
            magnitude,
        });
    }

    log.add_message(format!("{description} for {magnitude} hit points."), color);

    let target = state
        .entities
        .actor_mut(target_id)
        .ok_or(ActionError::ActorNotFound(target_id))?;
    let kill = if kind.is_damage() {
        target.fighter.hp = target.fighter.hp.saturating_sub(magnitude);
        resolve_kill(state, log, attacker_id, target_id)?
    } else {
        target.fighter.hp = target.fighter.hp.saturating_add(magnitude);
        None
    };

    tracing::debug!(
        attacker = %attacker_id,
        target = %target_id,
        kind = %kind,
        magnitude,
        killed = kill.is_some(),
        "strike resolved"
    );

    Ok(StrikeOutcome::Applied {
        target: target_id,
        magnitude,
        kill,
    })
}
