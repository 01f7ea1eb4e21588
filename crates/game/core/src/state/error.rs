//! State management errors.
//!
//! Errors related to inventory capacity and equipment bookkeeping.

use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Errors that occur during actor state operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Inventory is at capacity.
    #[error("inventory is full (capacity: {capacity})")]
    InventoryFull { capacity: usize },

    /// Item is not held in the actor's inventory.
    #[error("item {0} is not in the inventory")]
    ItemNotInInventory(EntityId),

    /// Item has no equippable behaviour.
    #[error("item {0} cannot be equipped")]
    NotEquippable(EntityId),
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StateError::InventoryFull { .. } | StateError::NotEquippable(_) => {
                ErrorSeverity::Recoverable
            }
            StateError::ItemNotInInventory(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StateError::InventoryFull { .. } => "STATE_INVENTORY_FULL",
            StateError::ItemNotInInventory(_) => "STATE_ITEM_NOT_IN_INVENTORY",
            StateError::NotEquippable(_) => "STATE_NOT_EQUIPPABLE",
        }
    }
}
