//! Unit stats and partial stat updates.
//!
//! Stats are updated by merging a [`StatPatch`], a set-these-fields
//! delta matching how effects describe their changes. Merging always
//! re-establishes the stat invariants:
//!
//! - `current_hp` is clamped to `[0, hp]`
//! - `dodge`, when present, is clamped to `[0, MAX_DODGE]`
//!
//! Dodge exists only on heroes; a dodge patch applied to a unit
//! without dodge is ignored.

use serde::{Deserialize, Serialize};

/// Upper bound on the dodge stat.
pub const MAX_DODGE: u32 = 20;

/// A unit's combat stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Maximum hit points.
    pub hp: u32,
    /// Current hit points, always in `[0, hp]`.
    pub current_hp: u32,
    /// Attack damage.
    pub atk: u32,
    /// Attack range (Manhattan).
    pub range: u32,
    /// Movement range per move (Manhattan).
    pub movement: u32,
    /// Dodge chance in percent, hero-only, always in `[0, MAX_DODGE]`.
    pub dodge: Option<u32>,
}

impl Stats {
    /// Stats for a companion (no dodge). Starts at full health.
    #[must_use]
    pub fn companion(hp: u32, atk: u32, range: u32, movement: u32) -> Self {
        Self {
            hp,
            current_hp: hp,
            atk,
            range,
            movement,
            dodge: None,
        }
    }

    /// Stats for a hero. Starts at full health; dodge is clamped.
    #[must_use]
    pub fn hero(hp: u32, atk: u32, range: u32, movement: u32, dodge: u32) -> Self {
        Self {
            hp,
            current_hp: hp,
            atk,
            range,
            movement,
            dodge: Some(dodge.min(MAX_DODGE)),
        }
    }

    /// Merge a patch into these stats, then re-clamp.
    pub fn apply(&mut self, patch: &StatPatch) {
        if let Some(hp) = patch.hp {
            self.hp = hp;
        }
        if let Some(current_hp) = patch.current_hp {
            self.current_hp = current_hp;
        }
        if let Some(atk) = patch.atk {
            self.atk = atk;
        }
        if let Some(range) = patch.range {
            self.range = range;
        }
        if let Some(movement) = patch.movement {
            self.movement = movement;
        }
        if let (Some(slot), Some(dodge)) = (self.dodge.as_mut(), patch.dodge) {
            *slot = dodge;
        }
        self.clamp();
    }

    fn clamp(&mut self) {
        self.current_hp = self.current_hp.min(self.hp);
        if let Some(dodge) = self.dodge.as_mut() {
            *dodge = (*dodge).min(MAX_DODGE);
        }
    }

    /// Whether the unit is at full health.
    #[must_use]
    pub fn at_full_health(&self) -> bool {
        self.current_hp == self.hp
    }
}

/// A partial stat update: every `Some` field is written over the
/// current value, then invariants are re-clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatPatch {
    pub hp: Option<u32>,
    pub current_hp: Option<u32>,
    pub atk: Option<u32>,
    pub range: Option<u32>,
    pub movement: Option<u32>,
    pub dodge: Option<u32>,
}

impl StatPatch {
    /// An empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum hit points (builder pattern).
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = Some(hp);
        self
    }

    /// Set current hit points (builder pattern).
    #[must_use]
    pub fn with_current_hp(mut self, current_hp: u32) -> Self {
        self.current_hp = Some(current_hp);
        self
    }

    /// Set attack (builder pattern).
    #[must_use]
    pub fn with_atk(mut self, atk: u32) -> Self {
        self.atk = Some(atk);
        self
    }

    /// Set range (builder pattern).
    #[must_use]
    pub fn with_range(mut self, range: u32) -> Self {
        self.range = Some(range);
        self
    }

    /// Set movement (builder pattern).
    #[must_use]
    pub fn with_movement(mut self, movement: u32) -> Self {
        self.movement = Some(movement);
        self
    }

    /// Set dodge (builder pattern).
    #[must_use]
    pub fn with_dodge(mut self, dodge: u32) -> Self {
        self.dodge = Some(dodge);
        self
    }

    /// Whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_companion_stats() {
        let stats = Stats::companion(8, 2, 1, 2);
        assert_eq!(stats.current_hp, 8);
        assert_eq!(stats.dodge, None);
        assert!(stats.at_full_health());
    }

    #[test]
    fn test_hero_dodge_clamped_at_creation() {
        let stats = Stats::hero(20, 2, 2, 2, 35);
        assert_eq!(stats.dodge, Some(MAX_DODGE));
    }

    #[test]
    fn test_apply_merges_and_clamps_hp() {
        let mut stats = Stats::hero(20, 2, 2, 2, 11);

        stats.apply(&StatPatch::new().with_current_hp(25));
        assert_eq!(stats.current_hp, 20); // clamped to hp

        stats.apply(&StatPatch::new().with_current_hp(5));
        assert_eq!(stats.current_hp, 5);

        // Lowering hp drags current_hp down with it.
        stats.apply(&StatPatch::new().with_hp(3));
        assert_eq!(stats.current_hp, 3);
    }

    #[test]
    fn test_apply_clamps_dodge() {
        let mut stats = Stats::hero(20, 2, 2, 2, 11);

        stats.apply(&StatPatch::new().with_dodge(50));
        assert_eq!(stats.dodge, Some(MAX_DODGE));

        stats.apply(&StatPatch::new().with_dodge(0));
        assert_eq!(stats.dodge, Some(0));
    }

    #[test]
    fn test_dodge_patch_ignored_for_companion() {
        let mut stats = Stats::companion(8, 2, 1, 2);
        stats.apply(&StatPatch::new().with_dodge(10));
        assert_eq!(stats.dodge, None);
    }

    #[test]
    fn test_empty_patch() {
        assert!(StatPatch::new().is_empty());
        assert!(!StatPatch::new().with_atk(1).is_empty());

        let mut stats = Stats::companion(8, 2, 1, 2);
        let before = stats;
        stats.apply(&StatPatch::new());
        assert_eq!(stats, before);
    }
}
