//! Combat statistics.

/// Health, base combat stats, and mana.
///
/// `hp` is signed on purpose: damage is subtracted without clamping and death
/// is `hp <= 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub hp: i32,
    pub max_hp: i32,
    pub base_power: i32,
    pub base_defense: i32,
    pub mana: i32,
    pub max_mana: i32,
    pub mana_regen: i32,
}

impl Fighter {
    pub fn new(hp: i32, base_defense: i32, base_power: i32) -> Self {
        Self {
            hp,
            max_hp: hp,
            base_power,
            base_defense,
            mana: 0,
            max_mana: 0,
            mana_regen: 0,
        }
    }

    #[must_use]
    pub fn with_mana(mut self, mana: i32, mana_regen: i32) -> Self {
        self.mana = mana;
        self.max_mana = mana;
        self.mana_regen = mana_regen;
        self
    }

    /// Restores up to `amount` hp without exceeding `max_hp`.
    ///
    /// Returns the amount actually recovered.
    pub fn heal(&mut self, amount: i32) -> i32 {
        if self.hp >= self.max_hp || amount <= 0 {
            return 0;
        }
        let recovered = amount.min(self.max_hp - self.hp);
        self.hp += recovered;
        recovered
    }

    /// Amount `heal` would recover, without mutating.
    pub fn missing_hp(&self) -> i32 {
        (self.max_hp - self.hp).max(0)
    }
}
