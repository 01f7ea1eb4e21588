/// Allegiance tag. Two actors are allies exactly when their factions are equal.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Faction {
    /// No allegiance (default).
    #[default]
    None,
    /// The order of light; the player starts here.
    Holy,
    /// Shadow cults and their assassins.
    Dark,
    /// Beasts and other unaligned creatures.
    Wild,
}

impl Faction {
    #[inline]
    pub fn is_allied_with(self, other: Faction) -> bool {
        self == other
    }
}

/// Combat archetype flag checked by value instead of by display name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatTrait {
    #[default]
    None,
    /// Melee strikes land twice: power is added once more before defense.
    DoubleStrike,
}
