//! Collaborators and data definitions that live outside game state.
//!
//! Templates describe how actors and items are spawned. Oracles expose the
//! behaviour the core delegates (floor generation). [`GameEnv`] bundles the
//! oracles so actions can reach them without coupling to implementations.
mod actors;
mod error;
mod floors;
mod items;

pub use actors::{ActorTemplate, ActorTemplateBuilder};
pub use error::OracleError;
pub use floors::FloorOracle;
pub use items::ItemTemplate;

use core::fmt;

/// Aggregates the oracles required by the action pipeline.
#[derive(Clone, Copy, Default)]
pub struct GameEnv<'a> {
    floors: Option<&'a dyn FloorOracle>,
}

impl<'a> GameEnv<'a> {
    pub fn new(floors: Option<&'a dyn FloorOracle>) -> Self {
        Self { floors }
    }

    pub fn with_floors(floors: &'a dyn FloorOracle) -> Self {
        Self::new(Some(floors))
    }

    pub fn empty() -> Self {
        Self { floors: None }
    }

    /// Returns the FloorOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::FloorsNotAvailable` if no floor oracle was provided.
    pub fn floors(&self) -> Result<&'a dyn FloorOracle, OracleError> {
        self.floors.ok_or(OracleError::FloorsNotAvailable)
    }
}

impl fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEnv")
            .field("floors", &self.floors.is_some())
            .finish()
    }
}
