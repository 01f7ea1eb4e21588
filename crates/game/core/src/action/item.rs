//! Using an inventory item.

use crate::action::consume::{self, ConsumeOutcome};
use crate::action::{ActionContext, ActionError, ActionTransition, lookup_actor, lookup_actor_mut};
use crate::env::GameEnv;
use crate::state::{EntityId, GameState, Position};

/// Activates a held item, optionally aimed at a map coordinate.
///
/// Without an explicit target the actor's own position is used. Items with
/// no consumable behaviour do nothing and stay in the inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemAction {
    pub actor: EntityId,
    pub item: EntityId,
    pub target: Option<Position>,
}

impl ItemAction {
    pub fn new(actor: EntityId, item: EntityId) -> Self {
        Self {
            actor,
            item,
            target: None,
        }
    }

    #[must_use]
    pub fn at(mut self, target: Position) -> Self {
        self.target = Some(target);
        self
    }

    /// Explicit target, or the actor's position.
    pub fn target_position(&self, state: &GameState) -> Result<Position, ActionError> {
        match self.target {
            Some(target) => Ok(target),
            None => Ok(lookup_actor(state, self.actor)?.position),
        }
    }

    fn plan(&self, state: &GameState) -> Result<Option<consume::Effect>, ActionError> {
        let actor = lookup_actor(state, self.actor)?;
        let item = actor
            .inventory
            .get(self.item)
            .ok_or(ActionError::ItemNotFound(self.item))?;
        let Some(consumable) = item.consumable else {
            return Ok(None);
        };
        let target = self.target_position(state)?;
        consume::plan(state, self.actor, consumable, target).map(Some)
    }
}

impl ActionTransition for ItemAction {
    type Error = ActionError;
    type Result = Option<ConsumeOutcome>;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.plan(state).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        ctx: &mut ActionContext<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let Some(effect) = self.plan(state)? else {
            tracing::debug!(actor = %self.actor, item = %self.item, "item has no use");
            return Ok(None);
        };

        let item = lookup_actor_mut(state, self.actor)?.take_item(self.item)?;
        let outcome = consume::activate(effect, state, ctx.log, self.actor, &item.name)?;

        tracing::debug!(actor = %self.actor, item = %self.item, ?outcome, "item consumed");
        Ok(Some(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Impossible;
    use crate::message::{MessageColor, MessageLog};
    use crate::state::{
        ActorState, Consumable, Equippable, Faction, Fighter, InventoryState, Item,
        MapDimensions, TerrainKind, TileMap, WorldState,
    };

    struct Fixture {
        state: GameState,
        log: MessageLog,
    }

    impl Fixture {
        fn new() -> Self {
            let player = ActorState::new(
                EntityId::PLAYER,
                "Player",
                Position::new(5, 5),
                Faction::Holy,
                Fighter::new(30, 1, 2),
            )
            .with_inventory(InventoryState::with_capacity(8));
            let tiles = TileMap::filled(
                MapDimensions::new(12, 12),
                TerrainKind::Floor,
                Position::new(0, 0),
            );
            Self {
                state: GameState::new(player, WorldState::new(1, tiles)),
                log: MessageLog::new(),
            }
        }

        fn give(&mut self, name: &str, consumable: Consumable) -> EntityId {
            let id = self.state.allocate_entity_id();
            self.state
                .entities
                .player
                .inventory
                .push(Item::new(id, name).with_consumable(consumable))
                .unwrap();
            id
        }

        fn spawn(&mut self, name: &str, faction: Faction, position: Position, hp: i32) -> EntityId {
            self.state.spawn_npc(ActorState::new(
                EntityId(0),
                name,
                position,
                faction,
                Fighter::new(hp, 0, 1),
            ))
        }

        fn use_item(&mut self, action: ItemAction) -> Result<Option<ConsumeOutcome>, ActionError> {
            let mut ctx = ActionContext::new(GameEnv::empty(), &mut self.log);
            action.pre_validate(&self.state, &ctx.env)?;
            action.apply(&mut self.state, &mut ctx)
        }
    }

    #[test]
    fn healing_potion_is_capped_and_consumed() {
        let mut fx = Fixture::new();
        fx.state.entities.player.fighter.hp = 26;
        let potion = fx.give("Health Potion", Consumable::Healing { amount: 10 });

        let outcome = fx.use_item(ItemAction::new(EntityId::PLAYER, potion)).unwrap();

        assert_eq!(outcome, Some(ConsumeOutcome::Healed { amount: 4 }));
        assert_eq!(fx.state.entities.player.fighter.hp, 30);
        assert!(!fx.state.entities.player.inventory.contains(potion));
        let last = fx.log.last().unwrap();
        assert_eq!(last.text, "You consume the Health Potion, and recover 4 HP!");
        assert_eq!(last.color, MessageColor::HealthRecovered);
    }

    #[test]
    fn healing_at_full_health_is_refused() {
        let mut fx = Fixture::new();
        let potion = fx.give("Health Potion", Consumable::Healing { amount: 10 });
        let before = fx.state.clone();

        let error = fx.use_item(ItemAction::new(EntityId::PLAYER, potion)).unwrap_err();

        assert_eq!(error.impossible(), Some(Impossible::HealthFull));
        assert_eq!(fx.state, before);
    }

    #[test]
    fn lightning_hits_closest_enemy_in_range() {
        let mut fx = Fixture::new();
        let scroll = fx.give(
            "Lightning Scroll",
            Consumable::LightningDamage {
                damage: 20,
                maximum_range: 5,
            },
        );
        fx.spawn("Templar", Faction::Holy, Position::new(5, 6), 10);
        let near = fx.spawn("Orc", Faction::Dark, Position::new(8, 5), 50);
        fx.spawn("Troll", Faction::Dark, Position::new(10, 5), 50);

        let outcome = fx.use_item(ItemAction::new(EntityId::PLAYER, scroll)).unwrap();

        assert_eq!(
            outcome,
            Some(ConsumeOutcome::Struck {
                target: near,
                damage: 20,
                kill: None
            })
        );
        assert_eq!(fx.state.entities.actor(near).unwrap().fighter.hp, 30);
        assert_eq!(
            fx.log.last().unwrap().text,
            "A lightning bolt strikes the Orc with a loud thunder, for 20 damage!"
        );
    }

    #[test]
    fn lightning_without_enemy_in_range_is_refused() {
        let mut fx = Fixture::new();
        let scroll = fx.give(
            "Lightning Scroll",
            Consumable::LightningDamage {
                damage: 20,
                maximum_range: 2,
            },
        );
        // Distance exactly 3 is outside `range + 1`.
        fx.spawn("Orc", Faction::Dark, Position::new(8, 5), 50);

        let error = fx.use_item(ItemAction::new(EntityId::PLAYER, scroll)).unwrap_err();
        assert_eq!(error.impossible(), Some(Impossible::NoTargetInRange));
        assert!(fx.state.entities.player.inventory.contains(scroll));
    }

    #[test]
    fn fireball_hits_everyone_in_radius_and_kills() {
        let mut fx = Fixture::new();
        let scroll = fx.give(
            "Fireball Scroll",
            Consumable::FireballDamage {
                damage: 12,
                radius: 1,
            },
        );
        let weak = fx.spawn("Rat", Faction::Wild, Position::new(2, 2), 5);
        let tough = fx.spawn("Ogre", Faction::Dark, Position::new(3, 2), 40);
        let far = fx.spawn("Bat", Faction::Wild, Position::new(5, 2), 40);

        let outcome = fx
            .use_item(ItemAction::new(EntityId::PLAYER, scroll).at(Position::new(2, 2)))
            .unwrap()
            .unwrap();

        let ConsumeOutcome::Exploded { hits, damage } = outcome else {
            panic!("expected explosion");
        };
        assert_eq!(damage, 12);
        assert_eq!(hits.len(), 2);
        assert!(hits[0].1.is_some());
        assert!(hits[1].1.is_none());
        assert!(!fx.state.entities.actor(weak).unwrap().is_alive());
        assert_eq!(fx.state.entities.actor(tough).unwrap().fighter.hp, 28);
        assert_eq!(fx.state.entities.actor(far).unwrap().fighter.hp, 40);
    }

    #[test]
    fn fireball_outside_map_or_empty_area_is_refused() {
        let mut fx = Fixture::new();
        let scroll = fx.give(
            "Fireball Scroll",
            Consumable::FireballDamage {
                damage: 12,
                radius: 1,
            },
        );

        let outside = fx
            .use_item(ItemAction::new(EntityId::PLAYER, scroll).at(Position::new(-3, 0)))
            .unwrap_err();
        assert_eq!(outside.impossible(), Some(Impossible::OutOfBounds));

        let empty = fx
            .use_item(ItemAction::new(EntityId::PLAYER, scroll).at(Position::new(10, 10)))
            .unwrap_err();
        assert_eq!(empty.impossible(), Some(Impossible::NoTargetsInRadius));
    }

    #[test]
    fn confusion_needs_another_actor() {
        let mut fx = Fixture::new();
        let scroll = fx.give("Confusion Scroll", Consumable::Confusion { number_of_turns: 10 });

        let own_tile = fx.use_item(ItemAction::new(EntityId::PLAYER, scroll)).unwrap_err();
        assert_eq!(own_tile.impossible(), Some(Impossible::CannotTargetSelf));

        let nobody = fx
            .use_item(ItemAction::new(EntityId::PLAYER, scroll).at(Position::new(1, 1)))
            .unwrap_err();
        assert_eq!(nobody.impossible(), Some(Impossible::NoTarget));

        let orc = fx.spawn("Orc", Faction::Dark, Position::new(1, 1), 10);
        fx.use_item(ItemAction::new(EntityId::PLAYER, scroll).at(Position::new(1, 1)))
            .unwrap();
        assert_eq!(fx.state.entities.actor(orc).unwrap().confused_turns, 10);
        assert_eq!(
            fx.log.last().unwrap().color,
            MessageColor::StatusEffectApplied
        );
    }

    #[test]
    fn items_without_a_use_do_nothing() {
        let mut fx = Fixture::new();
        let id = fx.state.allocate_entity_id();
        fx.state
            .entities
            .player
            .inventory
            .push(Item::new(id, "Sword").with_equippable(Equippable::weapon(4)))
            .unwrap();
        let before = fx.state.clone();

        let outcome = fx.use_item(ItemAction::new(EntityId::PLAYER, id)).unwrap();

        assert_eq!(outcome, None);
        assert_eq!(fx.state, before);
        assert!(fx.log.is_empty());
    }
}
