//! Per-kind decision state.

use bevy::prelude::*;

use super::Cooldowns;
use crate::action::ActionKind;
use crate::config::{BossConfig, CloneConfig};

/// Boss locomotion mode between attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum BossMode {
    #[default]
    Idle,
    Chase,
}

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct BossBrain {
    pub mode: BossMode,
    pub cooldowns: Cooldowns,
}

impl BossBrain {
    /// Every attack is ready on spawn.
    pub fn new(config: &BossConfig) -> Self {
        let cooldowns = Cooldowns::new()
            .with(ActionKind::Combo, config.cooldowns.combo)
            .with(ActionKind::Charge, config.cooldowns.charge)
            .with(ActionKind::Spin, config.cooldowns.spin)
            .with(ActionKind::Dash, config.cooldowns.dash);

        Self {
            mode: BossMode::Idle,
            cooldowns,
        }
    }
}

/// Basic enemy: all the state lives in `ThreatMemory` and the scheduler.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct EnemyBrain {
    pub last_band: Option<EnemyBandKind>,
}

/// Label of the band chosen on the last decision tick (logging/debug).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum EnemyBandKind {
    LongRush,
    Approach,
    Melee,
    Investigate,
    Idle,
}

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CloneBrain {
    pub cooldowns: Cooldowns,
}

impl CloneBrain {
    pub fn new(config: &CloneConfig) -> Self {
        Self {
            cooldowns: Cooldowns::new().with(ActionKind::Slash, config.attack_cooldown),
        }
    }
}
