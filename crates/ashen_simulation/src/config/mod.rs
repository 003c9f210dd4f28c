//! Configuration: progression context + actor tuning.

pub mod progression;
pub mod tuning;

#[cfg(test)]
mod tuning_tests;

pub use progression::{Progression, DAMAGE_PER_TIER};
pub use tuning::{
    BossConfig, BossCooldowns, CloneConfig, ComboStep, CombatTuning, DashConfig, EnemyConfig,
    LungeConfig, PlayerConfig, ShockwaveConfig, SwingConfig,
};
