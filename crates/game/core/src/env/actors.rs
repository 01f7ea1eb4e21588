//! Actor template definitions.
//!
//! This module provides `ActorTemplate` for defining all actors (including player)
//! in a data-driven way. Templates can be deserialized from RON files and spawned
//! into `ActorState` instances.

use crate::config::GameConfig;
use crate::state::{
    ActorState, CombatTrait, EntityId, Faction, Fighter, InventoryState, Level, Position,
};

/// Actor template defining all ActorState fields except id/position.
///
/// `xp_given` is what a killer is awarded; `inventory_capacity` falls back to
/// `GameConfig::default_inventory_capacity` when absent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    pub name: String,
    pub faction: Faction,
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat_trait: CombatTrait,
    pub hp: i32,
    pub defense: i32,
    pub power: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mana: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mana_regen: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub xp_given: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory_capacity: Option<usize>,
}

impl ActorTemplate {
    /// Create a new actor from this template with the given id and position.
    ///
    /// Health and mana start full; level progression comes from `config`.
    pub fn to_actor(&self, id: EntityId, position: Position, config: &GameConfig) -> ActorState {
        let fighter =
            Fighter::new(self.hp, self.defense, self.power).with_mana(self.mana, self.mana_regen);
        let level = Level::new(config.level_up_base, config.level_up_factor, self.xp_given);
        let capacity = self
            .inventory_capacity
            .unwrap_or(config.default_inventory_capacity);

        ActorState::new(id, self.name.clone(), position, self.faction, fighter)
            .with_level(level)
            .with_inventory(InventoryState::with_capacity(capacity))
            .with_combat_trait(self.combat_trait)
    }

    /// Create a builder for constructing actor templates
    pub fn builder(name: impl Into<String>) -> ActorTemplateBuilder {
        ActorTemplateBuilder::new(name)
    }
}

/// Builder for constructing actor templates.
pub struct ActorTemplateBuilder {
    template: ActorTemplate,
}

impl ActorTemplateBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            template: ActorTemplate {
                name: name.into(),
                faction: Faction::None,
                combat_trait: CombatTrait::None,
                hp: 1,
                defense: 0,
                power: 0,
                mana: 0,
                mana_regen: 0,
                xp_given: 0,
                inventory_capacity: None,
            },
        }
    }

    /// Set faction
    pub fn faction(mut self, faction: Faction) -> Self {
        self.template.faction = faction;
        self
    }

    /// Set hp, defense and power
    pub fn stats(mut self, hp: i32, defense: i32, power: i32) -> Self {
        self.template.hp = hp;
        self.template.defense = defense;
        self.template.power = power;
        self
    }

    /// Set mana pool and regeneration
    pub fn mana(mut self, mana: i32, mana_regen: i32) -> Self {
        self.template.mana = mana;
        self.template.mana_regen = mana_regen;
        self
    }

    pub fn combat_trait(mut self, combat_trait: CombatTrait) -> Self {
        self.template.combat_trait = combat_trait;
        self
    }

    pub fn xp_given(mut self, xp_given: u32) -> Self {
        self.template.xp_given = xp_given;
        self
    }

    pub fn inventory_capacity(mut self, capacity: usize) -> Self {
        self.template.inventory_capacity = Some(capacity);
        self
    }

    /// Build the actor template
    pub fn build(self) -> ActorTemplate {
        self.template
    }
}
