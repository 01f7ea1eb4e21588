//! Experience and level tracking.

/// Level bookkeeping for an actor.
///
/// `current_level` is always at least 1; `xp_given` is fixed by the template
/// and is what a killer receives (before level scaling).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    current_level: u32,
    pub current_xp: u32,
    pub level_up_base: u32,
    pub level_up_factor: u32,
    pub xp_given: u32,
}

impl Level {
    pub fn new(level_up_base: u32, level_up_factor: u32, xp_given: u32) -> Self {
        Self {
            current_level: 1,
            current_xp: 0,
            level_up_base,
            level_up_factor,
            xp_given,
        }
    }

    /// Overrides the starting level. Zero is raised to 1.
    #[must_use]
    pub fn with_current_level(mut self, level: u32) -> Self {
        self.current_level = level.max(1);
        self
    }

    #[inline]
    pub fn current_level(&self) -> u32 {
        self.current_level.max(1)
    }

    /// Xp needed to leave the current level.
    pub fn experience_to_next_level(&self) -> u32 {
        self.level_up_base
            .saturating_add(self.current_level().saturating_mul(self.level_up_factor))
    }

    /// A zero threshold never levels up.
    pub fn requires_level_up(&self) -> bool {
        let threshold = self.experience_to_next_level();
        threshold > 0 && self.current_xp >= threshold
    }

    /// Accumulates xp and advances as many levels as it pays for.
    ///
    /// Returns the number of levels gained.
    pub fn add_xp(&mut self, xp: u32) -> u32 {
        self.current_xp = self.current_xp.saturating_add(xp);

        let mut gained = 0;
        while self.requires_level_up() {
            self.current_xp -= self.experience_to_next_level();
            self.current_level = self.current_level().saturating_add(1);
            gained += 1;
        }
        gained
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}
