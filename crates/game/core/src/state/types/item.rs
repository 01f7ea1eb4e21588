//! Item-related state types.
//!
//! This module contains foundational item types:
//! - Item: an item instance with its optional behaviours
//! - GroundItem: an item lying on the map (not inside any inventory)
//! - Consumable / Equippable: behaviour descriptors
//!
//! An item is owned either by the map's ground list or by exactly one
//! inventory. Moving between the two moves the value, so an item can never
//! be in both places.

use super::{EntityId, Position};

/// Single-use behaviour triggered through `ItemAction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Consumable {
    /// Restores hit points to the consumer.
    Healing { amount: i32 },
    /// Strikes the closest hostile actor within range.
    LightningDamage { damage: i32, maximum_range: u32 },
    /// Damages every actor within `radius` of the target tile.
    FireballDamage { damage: i32, radius: u32 },
    /// Confuses the actor standing on the target tile.
    Confusion { number_of_turns: u32 },
}

/// Equipment slot an equippable item occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipmentSlot {
    Weapon,
    Armor,
}

/// Stat bonuses granted while the item is equipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equippable {
    pub slot: EquipmentSlot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub power_bonus: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense_bonus: i32,
}

impl Equippable {
    pub const fn weapon(power_bonus: i32) -> Self {
        Self {
            slot: EquipmentSlot::Weapon,
            power_bonus,
            defense_bonus: 0,
        }
    }

    pub const fn armor(defense_bonus: i32) -> Self {
        Self {
            slot: EquipmentSlot::Armor,
            power_bonus: 0,
            defense_bonus,
        }
    }
}

/// A concrete item instance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    pub consumable: Option<Consumable>,
    pub equippable: Option<Equippable>,
}

impl Item {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            consumable: None,
            equippable: None,
        }
    }

    #[must_use]
    pub fn with_consumable(mut self, consumable: Consumable) -> Self {
        self.consumable = Some(consumable);
        self
    }

    #[must_use]
    pub fn with_equippable(mut self, equippable: Equippable) -> Self {
        self.equippable = Some(equippable);
        self
    }
}

/// Items that exist on the ground (not inside inventories).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundItem {
    pub position: Position,
    pub item: Item,
}

impl GroundItem {
    pub fn new(position: Position, item: Item) -> Self {
        Self { position, item }
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.item.id
    }
}
