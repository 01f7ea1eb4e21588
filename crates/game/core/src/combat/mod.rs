//! Combat resolution system.
//!
//! This module holds the damage formula shared by melee, ranged and healing
//! strikes, and the kill check that runs after every damage application.
//!
//! # Architecture
//!
//! - **Pure formula**: [`strike_magnitude`] has no side effects
//! - **Used by Actions**: melee, ranged, healing and damage consumables call
//!   into [`resolve_strike`] and [`apply_damage`]
//! - **Ordered resolution**: gating, magnitude, narration, mutation, kill
//!
//! # Core Functions
//!
//! - `resolve_strike`: complete strike resolution against a target tile
//! - `strike_magnitude`: power/defense arithmetic per [`StrikeKind`]
//! - `apply_damage`: hp reduction followed by the kill check
//! - `resolve_kill`: kill narration and experience award
//! - `experience_award`: level-scaled xp for non-player killers

pub mod damage;
pub mod kill;
pub mod resolve;

pub use damage::{StrikeKind, strike_magnitude};
pub use kill::{KillReport, apply_damage, experience_award, resolve_kill};
pub use resolve::{StrikeOutcome, resolve_strike};
