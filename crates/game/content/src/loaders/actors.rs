//! Actor catalog loader.
//!
//! Loads actors (both the player and NPCs) from RON files.

use std::path::Path;

use descent_core::{ActorTemplate, GameConfig};

use crate::loaders::{LoadResult, ensure_unique_keys, read_file};

/// Loader for actor catalog from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load actor catalog from a RON file.
    ///
    /// RON format: `Vec<(String, ActorTemplate)>`, keyed by template id.
    pub fn load(path: &Path) -> LoadResult<Vec<(String, ActorTemplate)>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<(String, ActorTemplate)>> {
        let actors: Vec<(String, ActorTemplate)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor catalog RON: {}", e))?;

        ensure_unique_keys("actor", actors.iter().map(|(id, _)| id.as_str()))?;
        for (id, template) in &actors {
            if template.hp <= 0 {
                anyhow::bail!("Actor '{}' must start with positive hp", id);
            }
            if template
                .inventory_capacity
                .is_some_and(|capacity| capacity > GameConfig::MAX_INVENTORY_SLOTS)
            {
                anyhow::bail!(
                    "Actor '{}' inventory exceeds {} slots",
                    id,
                    GameConfig::MAX_INVENTORY_SLOTS
                );
            }
        }

        tracing::debug!(count = actors.len(), "loaded actor catalog");
        Ok(actors)
    }
}
