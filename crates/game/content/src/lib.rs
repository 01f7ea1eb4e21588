//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Actor templates, including the player (data-driven via RON)
//! - Item catalogs (data-driven via RON)
//! - Floor layouts (ASCII drawings in RON)
//! - Game configuration (data-driven via TOML)
//!
//! [`FloorCatalog`] ties them together and implements the core's
//! `FloorOracle`, so descending stairs stamps the next layout onto the state.
//!
//! All loaders use descent-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod floors;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use floors::{FloorCatalog, PLAYER_TEMPLATE};
#[cfg(feature = "loaders")]
pub use loaders::{
    ActorLoader, ConfigLoader, ContentFactory, FloorLayout, ItemCatalog, ItemLoader, LoadResult,
    MapLoader,
};
