use crate::state::GameState;

/// Produces the next floor when an actor descends.
///
/// Implementations replace terrain, NPCs and ground items (typically via
/// [`GameState::reset_floor`]) and place the player. Generation itself is
/// owned by the implementor; the core only decides when it happens.
pub trait FloorOracle {
    fn generate_floor(&self, depth: u32, state: &mut GameState);
}
