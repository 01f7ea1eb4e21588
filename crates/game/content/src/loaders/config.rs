//! Game configuration loader.

use std::path::Path;

use descent_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`]. A default inventory
    /// capacity above [`GameConfig::MAX_INVENTORY_SLOTS`] is rejected.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.default_inventory_capacity > GameConfig::MAX_INVENTORY_SLOTS {
            anyhow::bail!(
                "default_inventory_capacity {} exceeds the maximum of {}",
                config.default_inventory_capacity,
                GameConfig::MAX_INVENTORY_SLOTS
            );
        }
        Ok(config)
    }
}
