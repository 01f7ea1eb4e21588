//! Eight-way offsets and the lookups shared by directional actions.

use crate::state::{ActorState, EntityId, GameState, Position};

use super::{ActionError, lookup_actor};

/// Compass direction on the grid. `y` grows downward (screen coordinates).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Grid offset `(dx, dy)` of one step in this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// An action aimed at `actor position + (dx, dy)`.
pub trait ActionWithDirection {
    fn acting(&self) -> EntityId;

    fn offset(&self) -> (i32, i32);

    /// Actor position shifted by the offset.
    fn destination(&self, state: &GameState) -> Result<Position, ActionError> {
        let (dx, dy) = self.offset();
        Ok(lookup_actor(state, self.acting())?.position.offset(dx, dy))
    }

    /// Entity that would stop movement into the destination.
    fn blocking_entity(&self, state: &GameState) -> Result<Option<EntityId>, ActionError> {
        Ok(state.blocking_entity_at(self.destination(state)?))
    }

    /// Living actor standing on the destination.
    fn target_actor<'s>(&self, state: &'s GameState) -> Result<Option<&'s ActorState>, ActionError> {
        Ok(state.actor_at(self.destination(state)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_direction_is_a_single_step() {
        for direction in Direction::iter() {
            let (dx, dy) = direction.delta();
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert!((dx, dy) != (0, 0));
        }
    }

    #[test]
    fn opposite_directions_cancel() {
        let (nx, ny) = Direction::NorthEast.delta();
        let (sx, sy) = Direction::SouthWest.delta();
        assert_eq!((nx + sx, ny + sy), (0, 0));
    }

    #[test]
    fn parses_from_snake_case() {
        assert_eq!("north_west".parse::<Direction>().unwrap(), Direction::NorthWest);
    }
}
