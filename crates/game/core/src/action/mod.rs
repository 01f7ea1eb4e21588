//! Action domain - one actor's intent for one turn.
//!
//! Every action kind is a small value type implementing [`ActionTransition`].
//! [`Action`] is the tagged union the engine dispatches on; callers (input
//! handling, AI) build one per turn and hand it to
//! [`GameEngine::execute`](crate::engine::GameEngine::execute).
//!
//! # Module Structure
//!
//! - `error`: `Impossible` refusals and `ActionError`
//! - `direction`: eight-way offsets and the shared destination lookups
//! - `movement`: `MovementAction`, `BumpAction`
//! - `combat`: `MeleeAction`, `RangedAction`, `HealingAction`
//! - `inventory`: `PickupAction`, `DropItemAction`, `EquipAction`
//! - `item`: `ItemAction` and the consumable effects it triggers
//! - `stairs`: `TakeStairsAction`
//! - `wait`: `WaitAction`

pub mod combat;
pub mod consume;
pub mod direction;
pub mod error;
pub mod inventory;
pub mod item;
pub mod movement;
pub mod stairs;
pub mod wait;

pub use combat::{HealingAction, MeleeAction, RangedAction};
pub use consume::ConsumeOutcome;
pub use direction::{ActionWithDirection, Direction};
pub use error::{ActionError, Impossible};
pub use inventory::{DropItemAction, EquipAction, PickupAction};
pub use item::ItemAction;
pub use movement::{BumpAction, BumpOutcome, Moved, MovementAction};
pub use stairs::TakeStairsAction;
pub use wait::WaitAction;

use crate::env::GameEnv;
use crate::message::{MessageSink, capitalize};
use crate::state::{ActorState, EntityId, GameState};

/// Collaborators handed to [`ActionTransition::apply`].
///
/// Actions never reach outward for the engine or the message log; whatever
/// they need arrives here.
pub struct ActionContext<'a> {
    pub env: GameEnv<'a>,
    pub log: &'a mut dyn MessageSink,
}

impl<'a> ActionContext<'a> {
    pub fn new(env: GameEnv<'a>, log: &'a mut dyn MessageSink) -> Self {
        Self { env, log }
    }
}

/// Defines how a concrete action variant mutates game state.
///
/// `pre_validate` must catch every refusal the action can produce so that a
/// failed action leaves the state untouched. `apply` may assume it ran.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Returns the entity performing this action.
    fn actor(&self) -> EntityId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(
        &self,
        state: &mut GameState,
        ctx: &mut ActionContext<'_>,
    ) -> Result<Self::Result, Self::Error>;
}

/// Every intent an actor can issue for a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Wait(WaitAction),
    Pickup(PickupAction),
    UseItem(ItemAction),
    DropItem(DropItemAction),
    Equip(EquipAction),
    TakeStairs(TakeStairsAction),
    Move(MovementAction),
    Bump(BumpAction),
    Melee(MeleeAction),
    Ranged(RangedAction),
    Heal(HealingAction),
}

impl Action {
    /// Returns the entity performing this action.
    pub fn actor(&self) -> EntityId {
        match self {
            Action::Wait(action) => action.actor(),
            Action::Pickup(action) => action.actor(),
            Action::UseItem(action) => action.actor(),
            Action::DropItem(action) => action.actor(),
            Action::Equip(action) => action.actor(),
            Action::TakeStairs(action) => action.actor(),
            Action::Move(action) => action.actor(),
            Action::Bump(action) => action.actor(),
            Action::Melee(action) => action.actor(),
            Action::Ranged(action) => action.actor(),
            Action::Heal(action) => action.actor(),
        }
    }

    /// Stable name for logs and error messages.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Wait(_) => "wait",
            Action::Pickup(_) => "pickup",
            Action::UseItem(_) => "use_item",
            Action::DropItem(_) => "drop_item",
            Action::Equip(_) => "equip",
            Action::TakeStairs(_) => "take_stairs",
            Action::Move(_) => "move",
            Action::Bump(_) => "bump",
            Action::Melee(_) => "melee",
            Action::Ranged(_) => "ranged",
            Action::Heal(_) => "heal",
        }
    }
}

macro_rules! impl_from_action {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Action {
                fn from(action: $ty) -> Self {
                    Action::$variant(action)
                }
            }
        )*
    };
}

impl_from_action!(
    Wait(WaitAction),
    Pickup(PickupAction),
    UseItem(ItemAction),
    DropItem(DropItemAction),
    Equip(EquipAction),
    TakeStairs(TakeStairsAction),
    Move(MovementAction),
    Bump(BumpAction),
    Melee(MeleeAction),
    Ranged(RangedAction),
    Heal(HealingAction),
);

// ============================================================================
// Shared lookups
// ============================================================================

pub(crate) fn lookup_actor(state: &GameState, id: EntityId) -> Result<&ActorState, ActionError> {
    state
        .entities
        .actor(id)
        .ok_or(ActionError::ActorNotFound(id))
}

pub(crate) fn lookup_actor_mut(
    state: &mut GameState,
    id: EntityId,
) -> Result<&mut ActorState, ActionError> {
    state
        .entities
        .actor_mut(id)
        .ok_or(ActionError::ActorNotFound(id))
}

/// "You pick up" for the player, "Orc picks up" for everyone else.
pub(crate) fn subject_phrase(actor: &ActorState, first_person: &str, third_person: &str) -> String {
    if actor.is_player() {
        format!("You {first_person}")
    } else {
        format!("{} {third_person}", capitalize(&actor.name))
    }
}
