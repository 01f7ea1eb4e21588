pub mod actor;
pub mod common;
pub mod entities;
pub mod faction;
pub mod item;
pub mod world;

// Re-export all actor-related types
pub use actor::{ActorState, EquipToggle, Equipment, Fighter, InventoryState, Level};

// Re-export common types
pub use common::{EntityId, Position};

// Re-export entity collections
pub use entities::EntitiesState;

// Re-export allegiance and archetype tags
pub use faction::{CombatTrait, Faction};

// Re-export item types
pub use item::{Consumable, EquipmentSlot, Equippable, GroundItem, Item};

// Re-export world types
pub use world::{MapDimensions, TerrainKind, TileMap, WorldState};
