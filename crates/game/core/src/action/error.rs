//! Action execution errors.
//!
//! `Impossible` carries every recoverable reason an intent can be refused;
//! its `Display` text is what the player reads. `ActionError` adds the
//! contract violations a caller can commit (unknown actor, unheld item,
//! missing collaborator).

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, StateError};

// ============================================================================
// Recoverable refusals
// ============================================================================

/// This turn's intent cannot be carried out. Never fatal; state is untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Impossible {
    #[error("Your inventory is full.")]
    InventoryFull,

    #[error("There is nothing here to pick up.")]
    NothingToPickUp,

    #[error("That way is blocked.")]
    Blocked,

    #[error("There are no stairs here.")]
    NoStairs,

    #[error("Nothing to attack.")]
    NothingToAttack,

    #[error("That item cannot be equipped.")]
    NotEquippable,

    #[error("Your health is already full.")]
    HealthFull,

    #[error("No enemy is close enough to strike.")]
    NoTargetInRange,

    #[error("You must select an enemy to target.")]
    NoTarget,

    #[error("You cannot target yourself!")]
    CannotTargetSelf,

    #[error("You cannot target an area outside the map.")]
    OutOfBounds,

    #[error("There are no targets in the radius.")]
    NoTargetsInRadius,
}

impl Impossible {
    pub fn error_code(&self) -> &'static str {
        use Impossible::*;
        match self {
            InventoryFull => "IMPOSSIBLE_INVENTORY_FULL",
            NothingToPickUp => "IMPOSSIBLE_NOTHING_TO_PICK_UP",
            Blocked => "IMPOSSIBLE_BLOCKED",
            NoStairs => "IMPOSSIBLE_NO_STAIRS",
            NothingToAttack => "IMPOSSIBLE_NOTHING_TO_ATTACK",
            NotEquippable => "IMPOSSIBLE_NOT_EQUIPPABLE",
            HealthFull => "IMPOSSIBLE_HEALTH_FULL",
            NoTargetInRange => "IMPOSSIBLE_NO_TARGET_IN_RANGE",
            NoTarget => "IMPOSSIBLE_NO_TARGET",
            CannotTargetSelf => "IMPOSSIBLE_CANNOT_TARGET_SELF",
            OutOfBounds => "IMPOSSIBLE_OUT_OF_BOUNDS",
            NoTargetsInRadius => "IMPOSSIBLE_NO_TARGETS_IN_RADIUS",
        }
    }
}

// ============================================================================
// Action Execution Errors
// ============================================================================

/// Errors that can occur during action execution.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Precondition failed; shown to the player and the turn is re-prompted.
    #[error(transparent)]
    Impossible(#[from] Impossible),

    /// Actor not found in game state.
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    /// Item is not held by the acting actor.
    #[error("item {0} not found in inventory")]
    ItemNotFound(EntityId),

    /// Required oracle missing from the environment.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl ActionError {
    /// Returns the recoverable reason, if this is one.
    pub fn impossible(&self) -> Option<Impossible> {
        match self {
            ActionError::Impossible(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl From<StateError> for ActionError {
    fn from(error: StateError) -> Self {
        match error {
            StateError::InventoryFull { .. } => Impossible::InventoryFull.into(),
            StateError::NotEquippable(_) => Impossible::NotEquippable.into(),
            StateError::ItemNotInInventory(item) => ActionError::ItemNotFound(item),
        }
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ActionError::Impossible(_) => ErrorSeverity::Recoverable,
            ActionError::ActorNotFound(_) | ActionError::ItemNotFound(_) => {
                ErrorSeverity::Validation
            }
            ActionError::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ActionError::Impossible(reason) => reason.error_code(),
            ActionError::ActorNotFound(_) => "ACTION_ACTOR_NOT_FOUND",
            ActionError::ItemNotFound(_) => "ACTION_ITEM_NOT_FOUND",
            ActionError::Oracle(error) => error.error_code(),
        }
    }
}
