//! Strike actions. All three share [`resolve_strike`].

use crate::action::{
    ActionContext, ActionError, ActionTransition, ActionWithDirection, Direction, Impossible,
    lookup_actor,
};
use crate::combat::{StrikeKind, StrikeOutcome, resolve_strike};
use crate::env::GameEnv;
use crate::state::{EntityId, GameState, Position};

fn require_target(state: &GameState, position: Position) -> Result<(), ActionError> {
    state
        .actor_at(position)
        .map(|_| ())
        .ok_or_else(|| Impossible::NothingToAttack.into())
}

/// Attacks the actor at `actor position + (dx, dy)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl MeleeAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }

    pub fn toward(actor: EntityId, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(actor, dx, dy)
    }
}

impl ActionWithDirection for MeleeAction {
    fn acting(&self) -> EntityId {
        self.actor
    }

    fn offset(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }
}

impl ActionTransition for MeleeAction {
    type Error = ActionError;
    type Result = StrikeOutcome;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_target(state, self.destination(state)?)
    }

    fn apply(
        &self,
        state: &mut GameState,
        ctx: &mut ActionContext<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let target = self.destination(state)?;
        resolve_strike(state, ctx.log, self.actor, target, StrikeKind::Melee)
    }
}

/// Shoots the actor standing on `target`. Range is not limited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangedAction {
    pub actor: EntityId,
    pub target: Position,
}

impl RangedAction {
    pub fn new(actor: EntityId, target: Position) -> Self {
        Self { actor, target }
    }
}

impl ActionTransition for RangedAction {
    type Error = ActionError;
    type Result = StrikeOutcome;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        lookup_actor(state, self.actor)?;
        require_target(state, self.target)
    }

    fn apply(
        &self,
        state: &mut GameState,
        ctx: &mut ActionContext<'_>,
    ) -> Result<Self::Result, Self::Error> {
        resolve_strike(state, ctx.log, self.actor, self.target, StrikeKind::Ranged)
    }
}

/// Heals the ally standing on `target` by the healer's power.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealingAction {
    pub actor: EntityId,
    pub target: Position,
}

impl HealingAction {
    pub fn new(actor: EntityId, target: Position) -> Self {
        Self { actor, target }
    }
}

impl ActionTransition for HealingAction {
    type Error = ActionError;
    type Result = StrikeOutcome;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        lookup_actor(state, self.actor)?;
        require_target(state, self.target)
    }

    fn apply(
        &self,
        state: &mut GameState,
        ctx: &mut ActionContext<'_>,
    ) -> Result<Self::Result, Self::Error> {
        resolve_strike(state, ctx.log, self.actor, self.target, StrikeKind::Healing)
    }
}
