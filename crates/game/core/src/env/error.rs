//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle collaborators.
///
/// These are fatal: the engine cannot proceed without them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// FloorOracle is not available in the environment.
    #[error("FloorOracle not available")]
    FloorsNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            OracleError::FloorsNotAvailable => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::FloorsNotAvailable => "ORACLE_FLOORS_NOT_AVAILABLE",
        }
    }
}
