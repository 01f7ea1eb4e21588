//! Inventory system for actors.
//!
//! Inventories keep items in pickup order. Each actor has its own capacity,
//! bounded by `GameConfig::MAX_INVENTORY_SLOTS`.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::StateError;
use crate::state::types::{EntityId, Item};

type InventoryItems = ArrayVec<Item, { GameConfig::MAX_INVENTORY_SLOTS }>;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    capacity: usize,
    items: InventoryItems,
}

impl InventoryState {
    /// Creates an empty inventory. Capacity is clamped to the slot bound.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.min(GameConfig::MAX_INVENTORY_SLOTS),
            items: ArrayVec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: EntityId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Appends an item. A full inventory hands the item back untouched.
    pub fn push(&mut self, item: Item) -> Result<(), (StateError, Item)> {
        if self.is_full() {
            return Err((
                StateError::InventoryFull {
                    capacity: self.capacity,
                },
                item,
            ));
        }
        self.items
            .try_push(item)
            .map_err(|err| {
                (
                    StateError::InventoryFull {
                        capacity: self.capacity,
                    },
                    err.element(),
                )
            })
    }

    /// Removes an item while keeping the order of the remaining ones.
    pub fn remove(&mut self, id: EntityId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32) -> Item {
        Item::new(EntityId(id), format!("item-{id}"))
    }

    #[test]
    fn push_fails_when_full_without_truncating() {
        let mut inventory = InventoryState::with_capacity(1);
        inventory.push(item(1)).unwrap();

        let (error, rejected) = inventory.push(item(2)).unwrap_err();
        assert_eq!(error, StateError::InventoryFull { capacity: 1 });
        assert_eq!(rejected.id, EntityId(2));
        assert_eq!(inventory.len(), 1);
        assert!(inventory.contains(EntityId(1)));
    }

    #[test]
    fn zero_capacity_is_always_full() {
        let inventory = InventoryState::with_capacity(0);
        assert!(inventory.is_full());
    }

    #[test]
    fn capacity_is_clamped_to_slot_bound() {
        let inventory = InventoryState::with_capacity(10_000);
        assert_eq!(inventory.capacity(), GameConfig::MAX_INVENTORY_SLOTS);
    }

    #[test]
    fn remove_preserves_order() {
        let mut inventory = InventoryState::with_capacity(3);
        for id in 1..=3 {
            inventory.push(item(id)).unwrap();
        }

        let removed = inventory.remove(EntityId(2)).unwrap();
        assert_eq!(removed.id, EntityId(2));
        let ids: Vec<_> = inventory.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![EntityId(1), EntityId(3)]);
        assert!(inventory.remove(EntityId(2)).is_none());
    }
}
