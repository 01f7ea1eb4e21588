//! Strike kinds and the magnitude formula.

use crate::state::CombatTrait;

// ============================================================================
// Strike Kind
// ============================================================================

/// Which flavour of the shared strike algorithm is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StrikeKind {
    /// Adjacent attack. Honors [`CombatTrait::DoubleStrike`].
    Melee,
    /// Attack against an absolute coordinate.
    Ranged,
    /// Restores hp on an ally. Defense is ignored.
    Healing,
}

impl StrikeKind {
    /// Returns true when the strike silently does nothing.
    ///
    /// Damage never lands on allies and healing never lands on enemies.
    pub fn is_gated(self, allied: bool) -> bool {
        match self {
            StrikeKind::Melee | StrikeKind::Ranged => allied,
            StrikeKind::Healing => !allied,
        }
    }

    pub fn is_damage(self) -> bool {
        !matches!(self, StrikeKind::Healing)
    }

    /// Narration prefix, e.g. `"Orc attacks Player"`.
    pub fn describe(self, attacker: &str, combat_trait: CombatTrait, target: &str) -> String {
        match (self, combat_trait) {
            (StrikeKind::Melee, CombatTrait::DoubleStrike) => {
                format!("{attacker} stabs {target}, twice,")
            }
            (StrikeKind::Melee, CombatTrait::None) => format!("{attacker} attacks {target}"),
            (StrikeKind::Ranged, _) => format!("{attacker} shot {target}"),
            (StrikeKind::Healing, _) => format!("{attacker} healed {target}"),
        }
    }

    /// Suffix used when the magnitude is not positive.
    pub fn no_effect_suffix(self) -> &'static str {
        match self {
            StrikeKind::Healing => "but their wounds do not recover.",
            StrikeKind::Melee | StrikeKind::Ranged => "but does no damage.",
        }
    }
}

// ============================================================================
// Magnitude
// ============================================================================

/// Computes the strike magnitude.
///
/// # Formula
///
/// ```text
/// melee   = power - defense            (2 * power - defense with DoubleStrike)
/// ranged  = power - defense
/// healing = power
/// ```
///
/// The result may be zero or negative; callers treat that as "no effect".
pub fn strike_magnitude(
    kind: StrikeKind,
    attacker_power: i32,
    combat_trait: CombatTrait,
    target_defense: i32,
) -> i32 {
    match kind {
        StrikeKind::Melee => {
            let power = match combat_trait {
                CombatTrait::DoubleStrike => attacker_power.saturating_add(attacker_power),
                CombatTrait::None => attacker_power,
            };
            power.saturating_sub(target_defense)
        }
        StrikeKind::Ranged => attacker_power.saturating_sub(target_defense),
        StrikeKind::Healing => attacker_power,
    }
}
