//! Content factory for building the floor catalog from data files.

use std::path::{Path, PathBuf};

use descent_core::{ActorTemplate, GameConfig, ItemTemplate};

use crate::floors::FloorCatalog;
use crate::loaders::{ActorLoader, ConfigLoader, FloorLayout, ItemLoader, LoadResult, MapLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── actors.ron
/// ├── items.ron
/// └── floors.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the `data/` directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<(String, ItemTemplate)>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load actor catalog from `actors.ron`.
    ///
    /// The player template lives here too, under the id `player`.
    pub fn load_actors(&self) -> LoadResult<Vec<(String, ActorTemplate)>> {
        ActorLoader::load(&self.data_dir.join("actors.ron"))
    }

    /// Load floor layouts from `floors.ron`.
    pub fn load_floors(&self) -> LoadResult<Vec<FloorLayout>> {
        MapLoader::load(&self.data_dir.join("floors.ron"))
    }

    /// Loads everything and cross-checks the references between files.
    pub fn load_catalog(&self) -> LoadResult<FloorCatalog> {
        let config = self.load_config()?;
        let actors = self.load_actors()?;
        let items = self.load_items()?;
        let floors = self.load_floors()?;
        tracing::info!(
            data_dir = %self.data_dir.display(),
            actors = actors.len(),
            items = items.len(),
            floors = floors.len(),
            "content loaded"
        );
        FloorCatalog::new(config, actors, items, floors)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_directory_reports_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = ContentFactory::new(dir.path()).load_config().unwrap_err();
        assert!(error.to_string().contains("config.toml"));
    }
}
