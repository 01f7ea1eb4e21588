//! Descending to the next floor.

use crate::action::{ActionContext, ActionError, ActionTransition, Impossible, lookup_actor};
use crate::env::GameEnv;
use crate::message::MessageColor;
use crate::state::{EntityId, GameState};

/// Takes the down staircase the actor is standing on.
///
/// The new floor is produced by the environment's
/// [`FloorOracle`](crate::env::FloorOracle); the depth is incremented first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TakeStairsAction {
    pub actor: EntityId,
}

impl TakeStairsAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for TakeStairsAction {
    type Error = ActionError;
    /// Depth of the floor the actor arrived on.
    type Result = u32;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let actor = lookup_actor(state, self.actor)?;
        if actor.position != state.downstairs() {
            return Err(Impossible::NoStairs.into());
        }
        env.floors()?;
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        ctx: &mut ActionContext<'_>,
    ) -> Result<Self::Result, Self::Error> {
        if lookup_actor(state, self.actor)?.position != state.downstairs() {
            return Err(Impossible::NoStairs.into());
        }
        let floors = ctx.env.floors()?;

        let depth = state.world.depth.saturating_add(1);
        floors.generate_floor(depth, state);
        state.world.depth = depth;

        ctx.log
            .add_message("You descend the staircase.".to_owned(), MessageColor::Descend);
        tracing::info!(actor = %self.actor, depth, "descended to next floor");
        Ok(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FloorOracle, OracleError};
    use crate::message::MessageLog;
    use crate::state::{
        ActorState, Faction, Fighter, MapDimensions, Position, TerrainKind, TileMap, WorldState,
    };

    struct OpenFloor;

    impl FloorOracle for OpenFloor {
        fn generate_floor(&self, depth: u32, state: &mut GameState) {
            let tiles = TileMap::filled(
                MapDimensions::new(3, 3),
                TerrainKind::Floor,
                Position::new(2, 2),
            );
            state.reset_floor(depth, tiles);
            state.entities.player.position = Position::ORIGIN;
        }
    }

    fn on_stairs() -> GameState {
        let player = ActorState::new(
            EntityId::PLAYER,
            "Player",
            Position::new(1, 1),
            Faction::Holy,
            Fighter::new(30, 1, 2),
        );
        let tiles = TileMap::filled(
            MapDimensions::new(3, 3),
            TerrainKind::Floor,
            Position::new(1, 1),
        );
        GameState::new(player, WorldState::new(1, tiles))
    }

    #[test]
    fn descends_and_regenerates() {
        let mut state = on_stairs();
        state.spawn_npc(ActorState::new(
            EntityId(0),
            "Orc",
            Position::new(0, 1),
            Faction::Dark,
            Fighter::new(10, 0, 3),
        ));
        let mut log = MessageLog::new();
        let floors = OpenFloor;
        let mut ctx = ActionContext::new(GameEnv::with_floors(&floors), &mut log);
        let action = TakeStairsAction::new(EntityId::PLAYER);

        action.pre_validate(&state, &ctx.env).unwrap();
        let depth = action.apply(&mut state, &mut ctx).unwrap();

        assert_eq!(depth, 2);
        assert_eq!(state.world.depth, 2);
        assert!(state.entities.npcs.is_empty());
        assert_eq!(state.entities.player.position, Position::ORIGIN);
        assert_eq!(log.last().unwrap().text, "You descend the staircase.");
    }

    #[test]
    fn off_the_stairs_is_refused() {
        let mut state = on_stairs();
        state.entities.player.position = Position::new(0, 0);
        let floors = OpenFloor;
        let env = GameEnv::with_floors(&floors);

        let error = TakeStairsAction::new(EntityId::PLAYER)
            .pre_validate(&state, &env)
            .unwrap_err();
        assert_eq!(error.impossible(), Some(Impossible::NoStairs));
    }

    #[test]
    fn missing_floor_oracle_is_caught_before_mutation() {
        let state = on_stairs();
        let error = TakeStairsAction::new(EntityId::PLAYER)
            .pre_validate(&state, &GameEnv::empty())
            .unwrap_err();
        assert_eq!(error, ActionError::Oracle(OracleError::FloorsNotAvailable));
    }
}
