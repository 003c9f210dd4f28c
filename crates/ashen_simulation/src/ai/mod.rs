//! AI decision-making module
//!
//! - Boss: cooldown-gated weighted attack pick, chase fallback, phase
//!   escalation (tint, shockwave loop, shadow clones, berserk speed)
//! - Enemy: range bands over `ThreatMemory`
//! - Shadow clone: slash when close, chase otherwise
//!
//! Decisions never run for stunned, dead or busy actors. The chosen plan is
//! handed to the actor's `ActionScheduler`.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod policy;
pub mod systems;

#[cfg(test)]
mod policy_tests;

// Re-export основных типов
pub use components::*;
pub use events::PhaseTransitioned;
pub use policy::{
    boss_candidates, chase_velocity, clone_should_slash, enemy_band, melee_choice, pick_weighted, Candidate,
    EnemyBand,
};
pub use systems::*;

use crate::SimulationSet;

/// AI Plugin
///
/// Порядок выполнения (FixedUpdate):
/// 1. Phases: check_boss_phases
/// 2. Decision: boss_decide → enemy_decide → clone_decide
/// 3. Status (after combat timers): tick_phase_hazards → tick_shockwaves
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PhaseTransitioned>();

        app.add_systems(FixedUpdate, check_boss_phases.in_set(SimulationSet::Phases));

        app.add_systems(
            FixedUpdate,
            (boss_decide, enemy_decide, clone_decide)
                .chain()
                .in_set(SimulationSet::Decision),
        );

        app.add_systems(
            FixedUpdate,
            (tick_phase_hazards, tick_shockwaves)
                .chain()
                .in_set(SimulationSet::Status)
                .after(crate::combat::tick_hit_flashes),
        );
    }
}
