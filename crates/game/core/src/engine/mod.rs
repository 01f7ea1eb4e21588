//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! drives each action through `pre_validate` then `apply` and tags failures
//! with the phase that produced them.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionContext, BumpOutcome, ConsumeOutcome, Moved};
use crate::combat::StrikeOutcome;
use crate::env::GameEnv;
use crate::message::{MessageColor, MessageSink};
use crate::state::{EntityId, EquipToggle, GameState, Position};

/// Action-specific execution result.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Wait,
    /// Id of the item now in the inventory.
    Pickup(EntityId),
    /// `None` when the item had no use.
    UseItem(Option<ConsumeOutcome>),
    /// Where the item now lies.
    DropItem(Position),
    Equip(EquipToggle),
    /// Depth of the floor the actor arrived on.
    TakeStairs(u32),
    Move(Moved),
    Bump(BumpOutcome),
    /// Melee, ranged and healing strikes.
    Strike(StrikeOutcome),
}

/// Game engine that manages action execution.
///
/// Every state mutation flows through the two-phase action pipeline:
/// pre_validate → apply
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes an action by routing it through the appropriate transition pipeline.
    ///
    /// A failure in `pre_validate` leaves the state exactly as it was.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
        log: &mut dyn MessageSink,
    ) -> Result<ActionResult, ExecuteError> {
        tracing::debug!(
            action = action.as_snake_case(),
            actor = %action.actor(),
            "executing action"
        );

        let mut ctx = ActionContext::new(env, log);
        let result = transition::execute_transition(action, self.state, &mut ctx);

        if let Err(error) = &result {
            tracing::debug!(
                action = action.as_snake_case(),
                phase = error.phase().as_str(),
                %error,
                "action failed"
            );
        }
        result
    }

    /// Runs one turn, turning a refusal into a message instead of an error.
    ///
    /// Returns `Ok(None)` when the action was impossible; the reason has been
    /// narrated with [`MessageColor::Impossible`] and the caller should
    /// prompt again. Contract violations are still returned as errors.
    pub fn try_turn(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
        log: &mut dyn MessageSink,
    ) -> Result<Option<ActionResult>, ExecuteError> {
        match self.execute(env, action, log) {
            Ok(result) => Ok(Some(result)),
            Err(error) => match error.impossible() {
                Some(reason) => {
                    log.add_message(reason.to_string(), MessageColor::Impossible);
                    Ok(None)
                }
                None => Err(error),
            },
        }
    }
}
