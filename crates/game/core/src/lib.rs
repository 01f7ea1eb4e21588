//! Deterministic action resolution and combat rules for Descent.
//!
//! `descent-core` defines the canonical rules (actions, combat, engine, floor
//! state) and exposes pure APIs that clients and content tooling reuse.
//! All state mutation flows through [`engine::GameEngine`], and supporting
//! crates depend on the types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod message;
pub mod state;

pub use action::{
    Action, ActionContext, ActionError, ActionTransition, ActionWithDirection, BumpAction,
    BumpOutcome, ConsumeOutcome, Direction, DropItemAction, EquipAction, HealingAction,
    Impossible, ItemAction, MeleeAction, Moved, MovementAction, PickupAction, RangedAction,
    TakeStairsAction, WaitAction,
};
pub use combat::{KillReport, StrikeKind, StrikeOutcome};
pub use config::GameConfig;
pub use engine::{ActionResult, ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{ActorTemplate, FloorOracle, GameEnv, ItemTemplate, OracleError};
pub use error::{ErrorSeverity, GameError};
pub use message::{Message, MessageColor, MessageLog, MessageSink};
pub use state::{
    ActorState, CombatTrait, Consumable, EntitiesState, EntityId, EquipToggle, Equipment,
    EquipmentSlot, Equippable, Faction, Fighter, GameState, GroundItem, InventoryState, Item,
    Level, MapDimensions, Position, StateError, TerrainKind, TileMap, WorldState,
};
