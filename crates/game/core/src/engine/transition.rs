//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionContext, ActionTransition};
use crate::state::GameState;

use super::ActionResult;
use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the two-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    ctx: &mut ActionContext<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, &ctx.env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, ctx)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))
}

/// Executes an action through the transition pipeline and returns ActionResult.
///
/// This is the internal implementation used by GameEngine::execute().
/// Routes each action type to its transition and wraps the result in ActionResult.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    ctx: &mut ActionContext<'_>,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::Wait(transition) => {
            drive_transition(transition, state, ctx).map_err(ExecuteError::Wait)?;
            Ok(ActionResult::Wait)
        }
        Action::Pickup(transition) => drive_transition(transition, state, ctx)
            .map(ActionResult::Pickup)
            .map_err(ExecuteError::Pickup),
        Action::UseItem(transition) => drive_transition(transition, state, ctx)
            .map(ActionResult::UseItem)
            .map_err(ExecuteError::UseItem),
        Action::DropItem(transition) => drive_transition(transition, state, ctx)
            .map(ActionResult::DropItem)
            .map_err(ExecuteError::DropItem),
        Action::Equip(transition) => drive_transition(transition, state, ctx)
            .map(ActionResult::Equip)
            .map_err(ExecuteError::Equip),
        Action::TakeStairs(transition) => drive_transition(transition, state, ctx)
            .map(ActionResult::TakeStairs)
            .map_err(ExecuteError::TakeStairs),
        Action::Move(transition) => drive_transition(transition, state, ctx)
            .map(ActionResult::Move)
            .map_err(ExecuteError::Move),
        Action::Bump(transition) => drive_transition(transition, state, ctx)
            .map(ActionResult::Bump)
            .map_err(ExecuteError::Bump),
        Action::Melee(transition) => drive_transition(transition, state, ctx)
            .map(ActionResult::Strike)
            .map_err(ExecuteError::Melee),
        Action::Ranged(transition) => drive_transition(transition, state, ctx)
            .map(ActionResult::Strike)
            .map_err(ExecuteError::Ranged),
        Action::Heal(transition) => drive_transition(transition, state, ctx)
            .map(ActionResult::Strike)
            .map_err(ExecuteError::Heal),
    }
}
