//! Threat perception
//!
//! Enemies see with range + line of sight and remember where the player was;
//! the boss uses a plain aggro/disengage hysteresis instead of vision.
//! Static geometry is only reachable through the `Spatial` resource.

use bevy::prelude::*;

pub mod aggro;
pub mod layers;
pub mod memory;
pub mod spatial;
pub mod systems;

#[cfg(test)]
mod memory_tests;
#[cfg(test)]
mod spatial_tests;

pub use aggro::{AggroChange, AggroGate};
pub use layers::*;
pub use memory::{Perception, ThreatMemory};
pub use spatial::{CastHit, Obstacle, ObstacleMap, ObstacleShape, Spatial, SpatialQuery};
pub use systems::{perceive_threats, update_boss_aggro};

use crate::SimulationSet;

/// Boss started or stopped targeting the player (health bar visibility).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossTargetingChanged {
    pub boss: Entity,
    pub targeting: bool,
}

pub struct PerceptionPlugin;

impl Plugin for PerceptionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<BossTargetingChanged>();

        if !app.world().contains_resource::<Spatial>() {
            app.insert_resource(Spatial::default());
        }

        app.add_systems(
            FixedUpdate,
            (perceive_threats, update_boss_aggro)
                .chain()
                .in_set(SimulationSet::Perception),
        );
    }
}
