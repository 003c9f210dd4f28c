//! Weapon: the damage-dealing hit surface.
//!
//! The action scheduler is the only writer of `enabled` and `pivot_degrees`.
//! Each activation keeps its own hit list so one swing damages a target once.

use bevy::prelude::*;

use super::Body;

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Weapon {
    pub enabled: bool,
    pub damage: i32,
    /// Distance from body centre to the hit circle
    pub reach: f32,
    pub radius: f32,
    /// Local rotation of the weapon pivot relative to facing (degrees)
    pub pivot_degrees: f32,
    /// Targets already hit during the current activation
    pub hits: Vec<Entity>,
}

impl Weapon {
    pub fn new(damage: i32, reach: f32, radius: f32) -> Self {
        Self {
            enabled: false,
            damage: damage.max(1),
            reach: reach.max(0.0),
            radius: radius.max(0.0),
            pivot_degrees: 0.0,
            hits: Vec::new(),
        }
    }

    /// Enabling a disabled surface starts a fresh activation.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled && !self.enabled {
            self.hits.clear();
        }
        self.enabled = enabled;
    }

    /// World-space centre of the hit circle.
    pub fn tip(&self, body: &Body) -> Vec2 {
        let direction = Vec2::from_angle(self.pivot_degrees.to_radians()).rotate(body.facing);
        body.position + direction * self.reach
    }

    /// Records the target; false if it was already hit this activation.
    pub fn register_hit(&mut self, target: Entity) -> bool {
        if self.hits.contains(&target) {
            return false;
        }
        self.hits.push(target);
        true
    }
}
