//! Moving items between the map, inventories and equipment slots.

use crate::action::{
    ActionContext, ActionError, ActionTransition, Impossible, lookup_actor, lookup_actor_mut,
    subject_phrase,
};
use crate::env::GameEnv;
use crate::message::MessageColor;
use crate::state::{EntityId, EquipToggle, GameState, GroundItem, Position};

// ============================================================================
// Pickup
// ============================================================================

/// Picks up the first item (in placement order) lying under the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupAction {
    pub actor: EntityId,
}

impl PickupAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }

    /// Index of the ground item to take.
    fn locate(&self, state: &GameState) -> Result<usize, ActionError> {
        let actor = lookup_actor(state, self.actor)?;
        let index = state
            .items_on_map()
            .iter()
            .position(|ground| ground.position == actor.position)
            .ok_or(Impossible::NothingToPickUp)?;
        if actor.inventory.is_full() {
            return Err(Impossible::InventoryFull.into());
        }
        Ok(index)
    }
}

impl ActionTransition for PickupAction {
    type Error = ActionError;
    type Result = EntityId;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.locate(state).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        ctx: &mut ActionContext<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let index = self.locate(state)?;
        let GroundItem { position, item } = state.entities.items.remove(index);
        let item_id = item.id;
        let name = item.name.clone();

        let actor = lookup_actor_mut(state, self.actor)?;
        if let Err((error, item)) = actor.inventory.push(item) {
            state
                .entities
                .items
                .insert(index, GroundItem::new(position, item));
            return Err(error.into());
        }

        ctx.log.add_message(
            format!("{} the {name}!", subject_phrase(actor, "picked up", "picked up")),
            MessageColor::Default,
        );
        tracing::debug!(actor = %self.actor, item = %item_id, "item picked up");
        Ok(item_id)
    }
}

// ============================================================================
// Drop
// ============================================================================

/// Puts an inventory item on the ground under the actor, unequipping it first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropItemAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl DropItemAction {
    pub fn new(actor: EntityId, item: EntityId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for DropItemAction {
    type Error = ActionError;
    type Result = Position;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let actor = lookup_actor(state, self.actor)?;
        if !actor.inventory.contains(self.item) {
            return Err(ActionError::ItemNotFound(self.item));
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        ctx: &mut ActionContext<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let actor = lookup_actor_mut(state, self.actor)?;
        let was_equipped = actor.is_equipped(self.item);
        let item = actor.take_item(self.item)?;
        let position = actor.position;

        if was_equipped {
            ctx.log.add_message(
                format!("{} the {}.", subject_phrase(actor, "remove", "removes"), item.name),
                MessageColor::Default,
            );
        }
        ctx.log.add_message(
            format!("{} the {}.", subject_phrase(actor, "dropped", "dropped"), item.name),
            MessageColor::Default,
        );

        state.place_item(position, item);
        tracing::debug!(actor = %self.actor, item = %self.item, %position, "item dropped");
        Ok(position)
    }
}

// ============================================================================
// Equip
// ============================================================================

/// Equips an unequipped inventory item, or unequips an equipped one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl EquipAction {
    pub fn new(actor: EntityId, item: EntityId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for EquipAction {
    type Error = ActionError;
    type Result = EquipToggle;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let actor = lookup_actor(state, self.actor)?;
        let item = actor
            .inventory
            .get(self.item)
            .ok_or(ActionError::ItemNotFound(self.item))?;
        if item.equippable.is_none() {
            return Err(Impossible::NotEquippable.into());
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        ctx: &mut ActionContext<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let actor = lookup_actor_mut(state, self.actor)?;
        let toggle = actor.toggle_equip(self.item)?;

        let name_of = |id: EntityId| {
            actor
                .inventory
                .get(id)
                .map(|item| item.name.clone())
                .unwrap_or_default()
        };
        let mut lines = Vec::with_capacity(2);
        match toggle {
            EquipToggle::Equipped { replaced } => {
                if let Some(previous) = replaced {
                    lines.push(format!(
                        "{} the {}.",
                        subject_phrase(actor, "remove", "removes"),
                        name_of(previous)
                    ));
                }
                lines.push(format!(
                    "{} the {}.",
                    subject_phrase(actor, "equip", "equips"),
                    name_of(self.item)
                ));
            }
            EquipToggle::Unequipped => {
                lines.push(format!(
                    "{} the {}.",
                    subject_phrase(actor, "remove", "removes"),
                    name_of(self.item)
                ));
            }
        }
        for line in lines {
            ctx.log.add_message(line, MessageColor::Default);
        }

        tracing::debug!(actor = %self.actor, item = %self.item, ?toggle, "equipment toggled");
        Ok(toggle)
    }
}
