/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Flat xp needed to leave level 1 (before the per-level factor).
    pub level_up_base: u32,
    /// Additional xp needed per current level.
    pub level_up_factor: u32,
    /// Inventory capacity for templates that don't override it.
    pub default_inventory_capacity: usize,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Upper bound for any actor's inventory capacity.
    pub const MAX_INVENTORY_SLOTS: usize = 26;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LEVEL_UP_BASE: u32 = 200;
    pub const DEFAULT_LEVEL_UP_FACTOR: u32 = 150;

    pub fn new() -> Self {
        Self {
            level_up_base: Self::DEFAULT_LEVEL_UP_BASE,
            level_up_factor: Self::DEFAULT_LEVEL_UP_FACTOR,
            default_inventory_capacity: Self::MAX_INVENTORY_SLOTS,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
