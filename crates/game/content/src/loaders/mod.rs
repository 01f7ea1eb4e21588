//! Content loaders for reading game data from files.
//!
//! Each loader turns one RON/TOML file into core types. [`ContentFactory`]
//! knows the data directory layout and wires them together.

pub mod actors;
pub mod config;
pub mod factory;
pub mod item;
pub mod map;

pub use actors::ActorLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::{ItemCatalog, ItemLoader};
pub use map::{FloorLayout, MapLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Rejects catalogs that define the same key twice.
pub(crate) fn ensure_unique_keys<'a>(
    kind: &str,
    keys: impl IntoIterator<Item = &'a str>,
) -> LoadResult<()> {
    let mut seen = std::collections::HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            anyhow::bail!("Duplicate {} id '{}'", kind, key);
        }
    }
    Ok(())
}
