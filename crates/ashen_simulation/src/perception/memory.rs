//! ThreatMemory: "last known position" memory for basic enemies.
//!
//! Sight refreshes the memory and doubles the detection range; losing sight
//! lets the alert timer run down, after which the range snaps back to base.

use bevy::prelude::*;

use super::spatial::SpatialQuery;

/// Result of one perception pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perception {
    pub can_see: bool,
    pub distance: f32,
}

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ThreatMemory {
    pub last_seen_position: Option<Vec2>,
    /// Seconds of memory left (≥ 0)
    pub alert_timer: f32,
    pub base_detection_range: f32,
    pub detection_range: f32,
    /// Fresh alert timer value on every sighting
    pub alert_duration: f32,
    /// Result of the latest `evaluate`
    pub can_see: bool,
}

impl ThreatMemory {
    pub fn new(detection_range: f32, alert_duration: f32) -> Self {
        let range = detection_range.max(0.0);
        Self {
            last_seen_position: None,
            alert_timer: 0.0,
            base_detection_range: range,
            detection_range: range,
            alert_duration: alert_duration.max(0.0),
            can_see: false,
        }
    }

    /// Seeing the target right now, or still remembering it.
    pub fn is_aware(&self) -> bool {
        self.can_see || self.alert_timer > 0.0
    }

    /// Remembered position while the memory is still warm.
    pub fn pursuit_target(&self) -> Option<Vec2> {
        if self.alert_timer > 0.0 {
            self.last_seen_position
        } else {
            None
        }
    }

    pub fn evaluate(
        &mut self,
        self_pos: Vec2,
        target_pos: Vec2,
        spatial: &dyn SpatialQuery,
        obstacle_mask: u32,
        dt: f32,
    ) -> Perception {
        let distance = self_pos.distance(target_pos);
        let can_see =
            distance < self.detection_range && !spatial.segment_blocked(self_pos, target_pos, obstacle_mask);

        if can_see {
            self.remember(target_pos);
        } else {
            self.decay(dt);
        }
        self.can_see = can_see;

        Perception { can_see, distance }
    }

    /// No target this tick (player gone): memory only decays.
    pub fn forget_tick(&mut self, dt: f32) {
        self.can_see = false;
        self.decay(dt);
    }

    fn remember(&mut self, target_pos: Vec2) {
        self.last_seen_position = Some(target_pos);
        self.alert_timer = self.alert_duration;
        self.detection_range = self.base_detection_range * 2.0;
    }

    fn decay(&mut self, dt: f32) {
        if self.alert_timer > 0.0 {
            self.alert_timer = (self.alert_timer - dt.max(0.0)).max(0.0);
        }
        if self.alert_timer <= 0.0 {
            self.alert_timer = 0.0;
            self.detection_range = self.base_detection_range;
        }
    }
}
