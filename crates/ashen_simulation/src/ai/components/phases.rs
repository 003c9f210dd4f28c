//! Boss phase escalation: Phase1 → Phase2 (≤ 50% HP) → Phase3 (≤ 25% HP).
//!
//! Monotonic. Each transition fires at most once, both may fire on the same
//! tick (a big hit from above 50% straight under 25%).

use bevy::prelude::*;

pub const PHASE2_THRESHOLD: f32 = 0.5;
pub const PHASE3_THRESHOLD: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Reflect)]
pub enum BossPhase {
    #[default]
    Phase1,
    Phase2,
    Phase3,
}

/// Recurring hazard timer started by phase 2.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct HazardLoop {
    pub until_next: f32,
    pub interval: f32,
}

impl HazardLoop {
    /// First spawn after `delay + interval`, then every `interval`.
    pub fn new(delay: f32, interval: f32) -> Self {
        let interval = interval.max(f32::EPSILON);
        Self {
            until_next: delay.max(0.0) + interval,
            interval,
        }
    }

    /// Returns true when a spawn is due. The timer keeps running even if the
    /// caller decides to skip this spawn.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.until_next -= dt.max(0.0);
        if self.until_next > 0.0 {
            return false;
        }
        self.until_next += self.interval;
        true
    }
}

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct BossPhaseTracker {
    pub phase: BossPhase,
    pub phase2_triggered: bool,
    pub phase3_triggered: bool,
    pub hazard: Option<HazardLoop>,
}

impl Default for BossPhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl BossPhaseTracker {
    pub fn new() -> Self {
        Self {
            phase: BossPhase::Phase1,
            phase2_triggered: false,
            phase3_triggered: false,
            hazard: None,
        }
    }

    /// Transitions crossed at `health_percent`, in order. Each one is
    /// returned exactly once over the tracker's lifetime.
    pub fn evaluate(&mut self, health_percent: f32) -> Vec<BossPhase> {
        let mut fired = Vec::new();

        if health_percent <= PHASE2_THRESHOLD && !self.phase2_triggered {
            self.phase2_triggered = true;
            self.phase = self.phase.max(BossPhase::Phase2);
            fired.push(BossPhase::Phase2);
        }

        if health_percent <= PHASE3_THRESHOLD && !self.phase3_triggered {
            self.phase3_triggered = true;
            self.phase = BossPhase::Phase3;
            fired.push(BossPhase::Phase3);
        }

        fired
    }

    pub fn start_hazard(&mut self, delay: f32, interval: f32) {
        self.hazard = Some(HazardLoop::new(delay, interval));
    }
}
