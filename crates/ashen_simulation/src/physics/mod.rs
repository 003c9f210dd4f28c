//! Headless physics
//!
//! Stand-ins for the engine primitives the combat core relies on: body
//! integration, player movement input and weapon trigger contacts. A game
//! build skips this plugin and feeds positions and `HitLanded` itself.

use bevy::prelude::*;

pub mod contacts;
pub mod movement;

#[cfg(test)]
mod physics_tests;

// Re-export основных типов
pub use contacts::{detect_weapon_hits, weapon_overlaps};
pub use movement::{apply_movement_input, integrate_bodies, MovementInput};

use crate::SimulationSet;

pub struct HeadlessPhysicsPlugin;

impl Plugin for HeadlessPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (apply_movement_input, integrate_bodies, detect_weapon_hits)
                .chain()
                .in_set(SimulationSet::Physics),
        );
    }
}
