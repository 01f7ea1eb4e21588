//! Error types for action execution pipeline.

use crate::action::{
    ActionError, ActionTransition, BumpAction, DropItemAction, EquipAction, HealingAction,
    Impossible, ItemAction, MeleeAction, MovementAction, PickupAction, RangedAction,
    TakeStairsAction, WaitAction,
};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

type PhaseError<A> = TransitionPhaseError<<A as ActionTransition>::Error>;

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("wait action failed: {0}")]
    #[cfg_attr(feature = "serde", serde(skip))]
    Wait(PhaseError<WaitAction>),

    #[error("pickup action failed: {0}")]
    Pickup(PhaseError<PickupAction>),

    #[error("use item action failed: {0}")]
    UseItem(PhaseError<ItemAction>),

    #[error("drop item action failed: {0}")]
    DropItem(PhaseError<DropItemAction>),

    #[error("equip action failed: {0}")]
    Equip(PhaseError<EquipAction>),

    #[error("take stairs action failed: {0}")]
    TakeStairs(PhaseError<TakeStairsAction>),

    #[error("move action failed: {0}")]
    Move(PhaseError<MovementAction>),

    #[error("bump action failed: {0}")]
    Bump(PhaseError<BumpAction>),

    #[error("melee action failed: {0}")]
    Melee(PhaseError<MeleeAction>),

    #[error("ranged action failed: {0}")]
    Ranged(PhaseError<RangedAction>),

    #[error("heal action failed: {0}")]
    Heal(PhaseError<HealingAction>),
}

impl ExecuteError {
    /// Returns the phase that failed.
    pub fn phase(&self) -> TransitionPhase {
        self.phase_error().phase
    }

    /// Returns the underlying action error.
    pub fn action_error(&self) -> &ActionError {
        &self.phase_error().error
    }

    /// Returns the recoverable refusal, if that is what happened.
    pub fn impossible(&self) -> Option<Impossible> {
        self.action_error().impossible()
    }

    fn phase_error(&self) -> &TransitionPhaseError<ActionError> {
        match self {
            ExecuteError::Wait(error) => match error.error {},
            ExecuteError::Pickup(error)
            | ExecuteError::UseItem(error)
            | ExecuteError::DropItem(error)
            | ExecuteError::Equip(error)
            | ExecuteError::TakeStairs(error)
            | ExecuteError::Move(error)
            | ExecuteError::Bump(error)
            | ExecuteError::Melee(error)
            | ExecuteError::Ranged(error)
            | ExecuteError::Heal(error) => error,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.action_error().severity()
    }

    fn error_code(&self) -> &'static str {
        self.action_error().error_code()
    }
}
