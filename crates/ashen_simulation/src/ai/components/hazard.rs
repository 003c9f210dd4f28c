//! Phase 2 shockwave: an expanding ring that hits the player once.

use bevy::prelude::*;

use crate::config::ShockwaveConfig;

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Shockwave {
    pub center: Vec2,
    pub elapsed: f32,
    pub lifetime: f32,
    pub start_radius: f32,
    pub max_radius: f32,
    pub damage: i32,
    /// Boss that emitted it
    pub source: Option<Entity>,
    pub has_hit: bool,
}

impl Shockwave {
    pub fn new(center: Vec2, config: &ShockwaveConfig, source: Option<Entity>) -> Self {
        Self {
            center,
            elapsed: 0.0,
            lifetime: config.lifetime.max(f32::EPSILON),
            start_radius: config.start_radius.max(0.0),
            max_radius: config.max_radius.max(0.0),
            damage: config.damage,
            source,
            has_hit: false,
        }
    }

    pub fn radius(&self) -> f32 {
        let t = (self.elapsed / self.lifetime).clamp(0.0, 1.0);
        self.start_radius + (self.max_radius - self.start_radius) * t
    }

    /// Returns true once the lifetime is over.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt.max(0.0);
        self.elapsed >= self.lifetime
    }

    /// Ring reaches a circle of `radius` at `position`.
    pub fn reaches(&self, position: Vec2, radius: f32) -> bool {
        self.center.distance(position) <= self.radius() + radius.max(0.0)
    }
}
