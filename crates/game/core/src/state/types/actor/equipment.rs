//! Equipment system for actors.
//!
//! Equipment slots reference items by `EntityId`. The item itself (name,
//! bonuses) stays in the actor's inventory.

use crate::state::types::{EntityId, EquipmentSlot};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    /// Currently equipped weapon.
    pub weapon: Option<EntityId>,

    /// Currently equipped armor.
    pub armor: Option<EntityId>,
}

impl Equipment {
    /// Creates empty equipment (no weapon or armor).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: EquipmentSlot) -> Option<EntityId> {
        match slot {
            EquipmentSlot::Weapon => self.weapon,
            EquipmentSlot::Armor => self.armor,
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<EntityId> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
        }
    }

    pub fn is_equipped(&self, item: EntityId) -> bool {
        self.weapon == Some(item) || self.armor == Some(item)
    }

    /// Equips an item into `slot`, returning the previously equipped handle if any.
    pub fn equip(&mut self, slot: EquipmentSlot, item: EntityId) -> Option<EntityId> {
        self.slot_mut(slot).replace(item)
    }

    /// Clears whichever slot holds `item`. Returns false if it was not equipped.
    pub fn unequip(&mut self, item: EntityId) -> bool {
        for slot in [EquipmentSlot::Weapon, EquipmentSlot::Armor] {
            let current = self.slot_mut(slot);
            if *current == Some(item) {
                *current = None;
                return true;
            }
        }
        false
    }

    pub fn equipped(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.weapon.into_iter().chain(self.armor)
    }
}
