//! Floor layout loader.
//!
//! Layouts are drawn as ASCII rows in RON files:
//!
//! ```text
//! '#' wall    '.' floor    '>' down stairs    '@' player start (floor)
//! ```
//!
//! Actor and item placements reference catalog ids and are listed beside the
//! drawing. Each actor needs a tile of its own, away from the player start;
//! items may share tiles.

use std::collections::HashSet;
use std::path::Path;

use descent_core::{MapDimensions, Position, TerrainKind, TileMap};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Floor layout structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FloorLayoutRon {
    name: String,
    rows: Vec<String>,
    #[serde(default)]
    actors: Vec<(i32, i32, String)>, // (x, y, actor id)
    #[serde(default)]
    items: Vec<(i32, i32, String)>, // (x, y, item id)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FloorSetRon {
    floors: Vec<FloorLayoutRon>,
}

/// A parsed floor, ready to be stamped onto the game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloorLayout {
    pub name: String,
    pub tile_map: TileMap,
    pub player_start: Position,
    pub actors: Vec<(Position, String)>,
    pub items: Vec<(Position, String)>,
}

/// Loader for floor layouts from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load every floor layout from a RON file, in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<FloorLayout>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<FloorLayout>> {
        let set: FloorSetRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse floors RON: {}", e))?;
        if set.floors.is_empty() {
            anyhow::bail!("Floor set must contain at least one layout");
        }

        set.floors.into_iter().map(Self::build).collect()
    }

    fn build(raw: FloorLayoutRon) -> LoadResult<FloorLayout> {
        let height = raw.rows.len();
        let width = raw.rows.first().map_or(0, |row| row.chars().count());
        if width == 0 || height == 0 {
            anyhow::bail!("Floor '{}' is empty", raw.name);
        }
        if let Some((y, _)) = raw
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.chars().count() != width)
        {
            anyhow::bail!("Floor '{}' row {} is not {} tiles wide", raw.name, y, width);
        }

        let mut stairs = None;
        let mut player_start = None;
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in raw.rows.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                let terrain = match glyph {
                    '#' => TerrainKind::Wall,
                    '.' => TerrainKind::Floor,
                    '>' => {
                        if stairs.replace(position).is_some() {
                            anyhow::bail!("Floor '{}' has more than one staircase", raw.name);
                        }
                        TerrainKind::DownStairs
                    }
                    '@' => {
                        if player_start.replace(position).is_some() {
                            anyhow::bail!("Floor '{}' has more than one player start", raw.name);
                        }
                        TerrainKind::Floor
                    }
                    other => anyhow::bail!(
                        "Floor '{}' has unknown glyph '{}' at {}",
                        raw.name,
                        other,
                        position
                    ),
                };
                cells.push((position, terrain));
            }
        }

        let downstairs =
            stairs.ok_or_else(|| anyhow::anyhow!("Floor '{}' has no staircase", raw.name))?;
        let player_start = player_start
            .ok_or_else(|| anyhow::anyhow!("Floor '{}' has no player start", raw.name))?;

        let mut tile_map = TileMap::filled(
            MapDimensions::new(width as u32, height as u32),
            TerrainKind::Wall,
            downstairs,
        );
        for (position, terrain) in cells {
            tile_map.set(position, terrain);
        }

        let place = |entries: Vec<(i32, i32, String)>, kind: &str| -> LoadResult<_> {
            entries
                .into_iter()
                .map(|(x, y, id)| {
                    let position = Position::new(x, y);
                    if !tile_map.is_walkable(position) {
                        anyhow::bail!(
                            "Floor '{}' places {} '{}' on a blocked tile {}",
                            raw.name,
                            kind,
                            id,
                            position
                        );
                    }
                    Ok((position, id))
                })
                .collect::<LoadResult<Vec<_>>>()
        };
        let actors = place(raw.actors, "actor")?;
        let mut occupied = HashSet::from([player_start]);
        for (position, id) in &actors {
            if !occupied.insert(*position) {
                anyhow::bail!(
                    "Floor '{}' places actor '{}' on occupied tile {}",
                    raw.name,
                    id,
                    position
                );
            }
        }
        let items = place(raw.items, "item")?;

        Ok(FloorLayout {
            name: raw.name,
            tile_map,
            player_start,
            actors,
            items,
        })
    }
}
