//! Progression context: read-only view of the meta-game counters.
//!
//! The hub/economy layer owns these numbers (merchant kills, armor and sword
//! upgrades). The combat core only reads them: at spawn time to size health
//! and weapon damage, and per hit to apply tier scaling.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Incoming damage to the player grows 12% per merchant tier;
/// damage dealt to hostiles shrinks by the same factor.
pub const DAMAGE_PER_TIER: f32 = 0.12;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct Progression {
    /// How many merchants the player has murdered (0 = first run)
    pub merchant_tier: u32,
    pub armor_level: u32,
    pub sword_level: u32,
}

impl Progression {
    /// `1 + per_tier * tier`
    pub fn tier_multiplier(&self, per_tier: f32) -> f32 {
        1.0 + per_tier.max(0.0) * self.merchant_tier as f32
    }

    /// Scale applied to damage the player receives.
    pub fn incoming_player_scale(&self) -> f32 {
        self.tier_multiplier(DAMAGE_PER_TIER)
    }

    /// Scale applied to damage hostiles receive (inverse of the player scale).
    pub fn incoming_hostile_scale(&self) -> f32 {
        1.0 / self.incoming_player_scale()
    }

    /// Extra hit points from armor: milestones at 1, 3, 6, 10, 15, ... (triangular numbers).
    pub fn armor_extra_hits(&self) -> i32 {
        let mut extra = 0;
        let mut needed = 1u32;
        while self.armor_level >= needed {
            extra += 1;
            needed += extra as u32 + 1;
        }
        extra
    }

    pub fn player_max_health(&self, base: i32) -> i32 {
        (base + self.armor_extra_hits()).max(1)
    }

    /// Boss hit points grow linearly with tier, never below 1.
    pub fn boss_max_health(&self, base: i32, per_tier: f32) -> i32 {
        scaled_at_least_one(base, self.tier_multiplier(per_tier))
    }

    /// Boss sword damage grows linearly with tier, never below 1.
    pub fn boss_weapon_damage(&self, base: i32, per_tier: f32) -> i32 {
        scaled_at_least_one(base, self.tier_multiplier(per_tier))
    }

    pub fn player_weapon_damage(&self, base: i32) -> i32 {
        (base + (self.sword_level / 2) as i32).max(1)
    }
}

fn scaled_at_least_one(base: i32, multiplier: f32) -> i32 {
    ((base as f32 * multiplier).round() as i32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_armor_extra_hits_triangular() {
        let expected = [(0, 0), (1, 1), (2, 1), (3, 2), (5, 2), (6, 3), (9, 3), (10, 4), (15, 5)];
        for (armor_level, extra) in expected {
            let progression = Progression { armor_level, ..default() };
            assert_eq!(progression.armor_extra_hits(), extra, "armor {}", armor_level);
        }
    }

    #[test]
    fn test_tier_scaling() {
        let first_run = Progression::default();
        assert_eq!(first_run.incoming_player_scale(), 1.0);
        assert_eq!(first_run.incoming_hostile_scale(), 1.0);

        let third_run = Progression { merchant_tier: 2, ..default() };
        assert!((third_run.incoming_player_scale() - 1.24).abs() < 1e-5);
        assert!(third_run.incoming_hostile_scale() < 1.0);
    }

    #[test]
    fn test_boss_numbers_scale_with_tier() {
        let progression = Progression { merchant_tier: 1, ..default() };
        assert_eq!(progression.boss_max_health(50, 0.3), 65);
        assert_eq!(progression.boss_weapon_damage(2, 0.15), 2); // 2.3 rounds down
        assert_eq!(Progression::default().boss_max_health(0, 0.3), 1);
    }

    #[test]
    fn test_player_weapon_damage_from_sword_level() {
        let progression = Progression { sword_level: 5, ..default() };
        assert_eq!(progression.player_weapon_damage(1), 3);
    }
}
