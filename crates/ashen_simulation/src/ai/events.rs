//! AI events: boss escalation notifications

use bevy::prelude::*;

use super::components::BossPhase;

/// Boss crossed a health threshold (music, HUD, camera shake).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransitioned {
    pub boss: Entity,
    pub phase: BossPhase,
}
