//! Authoritative game state representation.
//!
//! This module owns the data structures that describe entities and the
//! current floor, plus the spatial queries actions validate against. Runtime
//! layers clone or query this state but mutate it exclusively through the
//! engine.
pub mod error;
pub mod types;

pub use error::StateError;
pub use types::{
    ActorState, CombatTrait, Consumable, EntitiesState, EntityId, EquipToggle, Equipment,
    EquipmentSlot, Equippable, Faction, Fighter, GroundItem, InventoryState, Item, Level,
    MapDimensions, Position, TerrainKind, TileMap, WorldState,
};

/// Canonical snapshot of the game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Sequential entity ID allocator (monotonically increasing).
    ///
    /// Never reused. ID 0 is reserved for the player.
    next_entity_id: u32,

    /// Actors and ground items on the current floor.
    pub entities: EntitiesState,
    /// Terrain and depth of the current floor.
    pub world: WorldState,
}

impl GameState {
    /// Creates a fresh state. The player is forced onto `EntityId::PLAYER`.
    pub fn new(mut player: ActorState, world: WorldState) -> Self {
        player.id = EntityId::PLAYER;
        Self {
            next_entity_id: 1,
            entities: EntitiesState::new(player),
            world,
        }
    }

    /// Allocates a new unique EntityId.
    ///
    /// # Panics
    ///
    /// Panics if we've exhausted all available IDs.
    pub fn allocate_entity_id(&mut self) -> EntityId {
        if self.next_entity_id == EntityId::PLAYER.0 {
            self.next_entity_id = 1;
        }
        let id = EntityId(self.next_entity_id);
        self.next_entity_id = self
            .next_entity_id
            .checked_add(1)
            .expect("EntityId overflow");
        id
    }

    /// Adds an NPC with a freshly allocated id and returns that id.
    pub fn spawn_npc(&mut self, mut actor: ActorState) -> EntityId {
        let id = self.allocate_entity_id();
        actor.id = id;
        self.entities.npcs.push(actor);
        id
    }

    /// Places an item on the map. The item keeps its id.
    pub fn place_item(&mut self, position: Position, item: Item) {
        self.entities.items.push(GroundItem::new(position, item));
    }

    /// Replaces the current floor: new terrain, no NPCs, no ground items.
    ///
    /// The player and everything it carries are kept.
    pub fn reset_floor(&mut self, depth: u32, tile_map: TileMap) {
        self.entities.npcs.clear();
        self.entities.items.clear();
        self.world = WorldState::new(depth, tile_map);
    }

    // ========================================================================
    // Spatial queries
    // ========================================================================

    pub fn in_bounds(&self, position: Position) -> bool {
        self.world.tile_map.in_bounds(position)
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.world.tile_map.is_walkable(position)
    }

    pub fn downstairs(&self) -> Position {
        self.world.tile_map.downstairs()
    }

    /// Returns the living actor standing at `position`, if any.
    pub fn actor_at(&self, position: Position) -> Option<&ActorState> {
        self.entities
            .living_actors()
            .find(|actor| actor.position == position)
    }

    /// Returns the entity that blocks movement into `position`.
    ///
    /// Only living actors block; items and corpses never do.
    pub fn blocking_entity_at(&self, position: Position) -> Option<EntityId> {
        self.actor_at(position).map(|actor| actor.id)
    }

    /// Living actors other than `except`, in entity order.
    pub fn living_actors_except(&self, except: EntityId) -> impl Iterator<Item = &ActorState> {
        self.entities
            .living_actors()
            .filter(move |actor| actor.id != except)
    }

    pub fn items_on_map(&self) -> &[GroundItem] {
        &self.entities.items
    }

    /// First ground item at `position` in placement order.
    pub fn item_at(&self, position: Position) -> Option<&GroundItem> {
        self.entities
            .items
            .iter()
            .find(|ground| ground.position == position)
    }

    /// Removes a ground item from the map and returns it.
    pub fn remove_item(&mut self, id: EntityId) -> Option<GroundItem> {
        let index = self
            .entities
            .items
            .iter()
            .position(|ground| ground.id() == id)?;
        Some(self.entities.items.remove(index))
    }
}
