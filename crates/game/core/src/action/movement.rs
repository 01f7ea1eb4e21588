//! Stepping and the move-or-attack dispatcher.

use crate::action::{
    ActionContext, ActionError, ActionTransition, ActionWithDirection, Direction, Impossible,
    MeleeAction, lookup_actor_mut,
};
use crate::combat::StrikeOutcome;
use crate::env::GameEnv;
use crate::state::{EntityId, GameState, Position};

/// Relocates the actor by exactly `(dx, dy)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl MovementAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }

    pub fn toward(actor: EntityId, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(actor, dx, dy)
    }

    /// Bounds, then terrain, then occupants. First failure wins.
    fn check_destination(&self, state: &GameState) -> Result<Position, ActionError> {
        let destination = self.destination(state)?;
        if !state.in_bounds(destination) {
            return Err(Impossible::Blocked.into());
        }
        if !state.is_walkable(destination) {
            return Err(Impossible::Blocked.into());
        }
        if self.blocking_entity(state)?.is_some() {
            return Err(Impossible::Blocked.into());
        }
        Ok(destination)
    }
}

impl ActionWithDirection for MovementAction {
    fn acting(&self) -> EntityId {
        self.actor
    }

    fn offset(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }
}

/// Where the actor stood and where it ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Moved {
    pub from: Position,
    pub to: Position,
}

impl ActionTransition for MovementAction {
    type Error = ActionError;
    type Result = Moved;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.check_destination(state).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _ctx: &mut ActionContext<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let to = self.check_destination(state)?;
        let actor = lookup_actor_mut(state, self.actor)?;
        let from = actor.position;
        actor.position = to;

        tracing::debug!(actor = %self.actor, %from, %to, "actor moved");
        Ok(Moved { from, to })
    }
}

/// Attacks whoever stands in the way, otherwise steps there.
///
/// This is the single entry point for "move or attack in a direction".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BumpAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

/// Which behaviour a bump resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BumpOutcome {
    Moved(Moved),
    Attacked(StrikeOutcome),
}

impl BumpAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }

    pub fn toward(actor: EntityId, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(actor, dx, dy)
    }

    fn as_melee(&self) -> MeleeAction {
        MeleeAction::new(self.actor, self.dx, self.dy)
    }

    fn as_movement(&self) -> MovementAction {
        MovementAction::new(self.actor, self.dx, self.dy)
    }
}

impl ActionWithDirection for BumpAction {
    fn acting(&self) -> EntityId {
        self.actor
    }

    fn offset(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }
}

impl ActionTransition for BumpAction {
    type Error = ActionError;
    type Result = BumpOutcome;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if self.target_actor(state)?.is_some() {
            self.as_melee().pre_validate(state, env)
        } else {
            self.as_movement().pre_validate(state, env)
        }
    }

    fn apply(
        &self,
        state: &mut GameState,
        ctx: &mut ActionContext<'_>,
    ) -> Result<Self::Result, Self::Error> {
        if self.target_actor(state)?.is_some() {
            tracing::debug!(actor = %self.actor, "bump resolved to melee");
            self.as_melee()
                .apply(state, ctx)
                .map(BumpOutcome::Attacked)
        } else {
            self.as_movement().apply(state, ctx).map(BumpOutcome::Moved)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageLog;
    use crate::state::{
        ActorState, Faction, Fighter, MapDimensions, TerrainKind, TileMap, WorldState,
    };

    fn room() -> GameState {
        let player = ActorState::new(
            EntityId::PLAYER,
            "Player",
            Position::new(1, 1),
            Faction::Holy,
            Fighter::new(30, 2, 5),
        );
        let mut tiles = TileMap::filled(
            MapDimensions::new(4, 4),
            TerrainKind::Floor,
            Position::new(3, 3),
        );
        tiles.set(Position::new(1, 2), TerrainKind::Wall);
        GameState::new(player, WorldState::new(1, tiles))
    }

    fn step(state: &mut GameState, dx: i32, dy: i32) -> Result<Moved, ActionError> {
        let action = MovementAction::new(EntityId::PLAYER, dx, dy);
        let mut log = MessageLog::new();
        let mut ctx = ActionContext::new(GameEnv::empty(), &mut log);
        action.pre_validate(state, &ctx.env)?;
        action.apply(state, &mut ctx)
    }

    #[test]
    fn moves_by_exact_offset() {
        let mut state = room();
        let moved = step(&mut state, 1, 0).unwrap();
        assert_eq!(moved.from, Position::new(1, 1));
        assert_eq!(moved.to, Position::new(2, 1));
        assert_eq!(state.entities.player.position, Position::new(2, 1));
    }

    #[test]
    fn out_of_bounds_wall_and_occupant_block() {
        let mut state = room();
        state.spawn_npc(ActorState::new(
            EntityId(0),
            "Orc",
            Position::new(2, 2),
            Faction::Dark,
            Fighter::new(10, 0, 3),
        ));
        let before = state.clone();

        for (dx, dy) in [(-2, 0), (0, 1), (1, 1)] {
            let error = step(&mut state, dx, dy).unwrap_err();
            assert_eq!(error.impossible(), Some(Impossible::Blocked));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn extreme_offsets_are_refused_as_blocked() {
        let mut state = room();
        let before = state.clone();

        for (dx, dy) in [(i32::MAX, 0), (0, i32::MAX), (i32::MIN, i32::MIN)] {
            let error = step(&mut state, dx, dy).unwrap_err();
            assert_eq!(error.impossible(), Some(Impossible::Blocked));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn corpses_do_not_block() {
        let mut state = room();
        let mut corpse = ActorState::new(
            EntityId(0),
            "Orc",
            Position::new(2, 1),
            Faction::Dark,
            Fighter::new(10, 0, 3),
        );
        corpse.fighter.hp = 0;
        state.spawn_npc(corpse);

        assert!(step(&mut state, 1, 0).is_ok());
    }

    #[test]
    fn bump_attacks_occupant_and_moves_otherwise() {
        let mut state = room();
        let orc = state.spawn_npc(ActorState::new(
            EntityId(0),
            "Orc",
            Position::new(2, 1),
            Faction::Dark,
            Fighter::new(10, 0, 3),
        ));
        let mut log = MessageLog::new();
        let mut ctx = ActionContext::new(GameEnv::empty(), &mut log);

        let attacked = BumpAction::toward(EntityId::PLAYER, Direction::East)
            .apply(&mut state, &mut ctx)
            .unwrap();
        assert!(matches!(attacked, BumpOutcome::Attacked(outcome) if outcome.target() == orc));
        assert_eq!(state.entities.player.position, Position::new(1, 1));

        let moved = BumpAction::toward(EntityId::PLAYER, Direction::North)
            .apply(&mut state, &mut ctx)
            .unwrap();
        assert!(matches!(moved, BumpOutcome::Moved(_)));
        assert_eq!(state.entities.player.position, Position::new(1, 0));
    }
}
