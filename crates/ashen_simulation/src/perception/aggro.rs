//! Boss aggro gate: acquire inside `aggro_range`, drop beyond `disengage_range`.

use bevy::prelude::*;

/// Minimum width of the hysteresis band.
const MIN_BAND: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggroChange {
    Acquired,
    Dropped,
}

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AggroGate {
    aggro_range: f32,
    disengage_range: f32,
    targeting: bool,
}

impl AggroGate {
    /// `disengage_range` is pushed above `aggro_range` if misconfigured.
    pub fn new(aggro_range: f32, disengage_range: f32) -> Self {
        let aggro_range = aggro_range.max(0.0);
        Self {
            aggro_range,
            disengage_range: disengage_range.max(aggro_range + MIN_BAND),
            targeting: false,
        }
    }

    pub fn aggro_range(&self) -> f32 {
        self.aggro_range
    }

    pub fn disengage_range(&self) -> f32 {
        self.disengage_range
    }

    pub fn is_targeting(&self) -> bool {
        self.targeting
    }

    /// Returns the transition, if any, caused by this distance sample.
    pub fn update(&mut self, distance: f32) -> Option<AggroChange> {
        if !self.targeting && distance <= self.aggro_range {
            self.targeting = true;
            return Some(AggroChange::Acquired);
        }
        if self.targeting && distance >= self.disengage_range {
            self.targeting = false;
            return Some(AggroChange::Dropped);
        }
        None
    }

    /// Target vanished (player despawned): drop aggro.
    pub fn release(&mut self) -> Option<AggroChange> {
        if self.targeting {
            self.targeting = false;
            Some(AggroChange::Dropped)
        } else {
            None
        }
    }
}
