use super::Position;

/// Width and height of a floor in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as i64) < i64::from(self.width)
            && (position.y as i64) < i64::from(self.height)
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Canonical terrain classes for map tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Floor,
    #[default]
    Wall,
    DownStairs,
}

impl TerrainKind {
    pub fn is_walkable(self) -> bool {
        matches!(self, TerrainKind::Floor | TerrainKind::DownStairs)
    }
}

/// Terrain grid of the current floor, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    dimensions: MapDimensions,
    tiles: Vec<TerrainKind>,
    downstairs: Position,
}

impl TileMap {
    /// Creates a map filled with `fill`. The downstairs tile is marked as such.
    pub fn filled(dimensions: MapDimensions, fill: TerrainKind, downstairs: Position) -> Self {
        let mut map = Self {
            dimensions,
            tiles: vec![fill; dimensions.area()],
            downstairs,
        };
        map.set(downstairs, TerrainKind::DownStairs);
        map
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn downstairs(&self) -> Position {
        self.downstairs
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.dimensions.contains(position).then(|| {
            position.y as usize * self.dimensions.width as usize + position.x as usize
        })
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    pub fn tile(&self, position: Position) -> Option<TerrainKind> {
        self.index(position).map(|index| self.tiles[index])
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(TerrainKind::is_walkable)
    }

    /// Overwrites a tile. Out-of-bounds writes are ignored and return false.
    pub fn set(&mut self, position: Position, terrain: TerrainKind) -> bool {
        match self.index(position) {
            Some(index) => {
                self.tiles[index] = terrain;
                true
            }
            None => false,
        }
    }
}

/// Runtime world data for the current floor.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    /// Floor number, starting at 1 for the first floor.
    pub depth: u32,
    pub tile_map: TileMap,
}

impl WorldState {
    pub fn new(depth: u32, tile_map: TileMap) -> Self {
        Self { depth, tile_map }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_exclude_negative_and_edge() {
        let dims = MapDimensions::new(3, 2);
        assert!(dims.contains(Position::new(2, 1)));
        assert!(!dims.contains(Position::new(3, 1)));
        assert!(!dims.contains(Position::new(0, 2)));
        assert!(!dims.contains(Position::new(-1, 0)));
    }

    #[test]
    fn stairs_are_walkable_walls_are_not() {
        let mut map = TileMap::filled(
            MapDimensions::new(4, 4),
            TerrainKind::Floor,
            Position::new(3, 3),
        );
        map.set(Position::new(1, 1), TerrainKind::Wall);

        assert_eq!(map.tile(Position::new(3, 3)), Some(TerrainKind::DownStairs));
        assert!(map.is_walkable(Position::new(3, 3)));
        assert!(!map.is_walkable(Position::new(1, 1)));
        assert!(!map.is_walkable(Position::new(9, 9)));
        assert!(!map.set(Position::new(9, 9), TerrainKind::Floor));
    }
}
