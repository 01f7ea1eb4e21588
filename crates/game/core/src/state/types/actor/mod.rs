//! Actor-related state types.
//!
//! This module contains all types specific to actors:
//! - ActorState: Main actor structure
//! - Fighter: Health and combat stats
//! - Level: Experience tracking
//! - Equipment: Weapon and armor slots
//! - Inventory: Item storage for actors

pub mod equipment;
pub mod fighter;
pub mod inventory;
pub mod level;

pub use equipment::Equipment;
pub use fighter::Fighter;
pub use inventory::InventoryState;
pub use level::Level;

use super::{CombatTrait, EntityId, Equippable, Faction, Item, Position};
use crate::state::StateError;

/// Result of toggling an item's equipped state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipToggle {
    /// The item is now equipped; `replaced` was removed from the same slot.
    Equipped { replaced: Option<EntityId> },
    /// The item was equipped and is now removed.
    Unequipped,
}

/// Complete actor state.
///
/// # Invariants
///
/// - Every handle in `equipment` refers to an item in `inventory`
/// - `hp <= 0` means dead; dead actors stay in the entity list
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub faction: Faction,
    pub combat_trait: CombatTrait,
    pub fighter: Fighter,
    pub level: Level,
    pub inventory: InventoryState,
    pub equipment: Equipment,

    /// Remaining turns of confusion. Consumed by whatever drives the actor.
    pub confused_turns: u32,
}

impl ActorState {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        position: Position,
        faction: Faction,
        fighter: Fighter,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            faction,
            combat_trait: CombatTrait::None,
            fighter,
            level: Level::default(),
            inventory: InventoryState::empty(),
            equipment: Equipment::empty(),
            confused_turns: 0,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_inventory(mut self, inventory: InventoryState) -> Self {
        self.inventory = inventory;
        self
    }

    #[must_use]
    pub fn with_combat_trait(mut self, combat_trait: CombatTrait) -> Self {
        self.combat_trait = combat_trait;
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.fighter.hp > 0
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.id.is_player()
    }

    /// Base power plus the bonuses of everything equipped.
    pub fn power(&self) -> i32 {
        self.fighter.base_power + self.equipped_bonus(|bonus| bonus.power_bonus)
    }

    /// Base defense plus the bonuses of everything equipped.
    pub fn defense(&self) -> i32 {
        self.fighter.base_defense + self.equipped_bonus(|bonus| bonus.defense_bonus)
    }

    fn equipped_bonus(&self, pick: impl Fn(&Equippable) -> i32) -> i32 {
        self.equipment
            .equipped()
            .filter_map(|id| self.inventory.get(id))
            .filter_map(|item| item.equippable.as_ref())
            .map(pick)
            .sum()
    }

    pub fn is_equipped(&self, item: EntityId) -> bool {
        self.equipment.is_equipped(item)
    }

    /// Equips the item if unequipped, unequips it otherwise.
    pub fn toggle_equip(&mut self, item: EntityId) -> Result<EquipToggle, StateError> {
        let held = self
            .inventory
            .get(item)
            .ok_or(StateError::ItemNotInInventory(item))?;
        let equippable = held.equippable.ok_or(StateError::NotEquippable(item))?;

        if self.equipment.unequip(item) {
            return Ok(EquipToggle::Unequipped);
        }
        let replaced = self.equipment.equip(equippable.slot, item);
        Ok(EquipToggle::Equipped { replaced })
    }

    /// Takes an item out of the inventory, unequipping it first.
    pub fn take_item(&mut self, item: EntityId) -> Result<Item, StateError> {
        if !self.inventory.contains(item) {
            return Err(StateError::ItemNotInInventory(item));
        }
        self.equipment.unequip(item);
        self.inventory
            .remove(item)
            .ok_or(StateError::ItemNotInInventory(item))
    }
}
