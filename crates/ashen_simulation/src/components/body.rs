//! Body: 2D kinematic state owned by the actor.
//!
//! `velocity` is steering (AI, actions) and is zeroed by stops/stuns/death.
//! `knockback` is the impulse-driven part; it decays on its own so a stunned
//! or dead actor still slides back from the hit.

use bevy::prelude::*;

const DIRECTION_EPSILON: f32 = 1e-6;

#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Unit vector the actor (and its weapon pivot) faces
    pub facing: Vec2,
    pub radius: f32,
    pub knockback: Vec2,
    /// Per-second decay of `knockback` (linear drag)
    pub knockback_drag: f32,
}

impl Default for Body {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 0.5)
    }
}

impl Body {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            facing: Vec2::Y,
            radius: radius.max(0.0),
            knockback: Vec2::ZERO,
            knockback_drag: 10.0,
        }
    }

    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    /// Impulse on a unit-mass body: steering is dropped, knockback replaced.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        if impulse == Vec2::ZERO {
            return;
        }
        self.velocity = Vec2::ZERO;
        self.knockback = impulse;
    }

    /// Direction towards `target`, `None` when standing on it.
    pub fn direction_to(&self, target: Vec2) -> Option<Vec2> {
        let delta = target - self.position;
        if delta.length_squared() < DIRECTION_EPSILON {
            None
        } else {
            Some(delta.normalize())
        }
    }

    /// Snap facing to the target. Returns false if the target is on top of us.
    pub fn face_towards(&mut self, target: Vec2) -> bool {
        match self.direction_to(target) {
            Some(dir) => {
                self.facing = dir;
                true
            }
            None => false,
        }
    }

    /// Rotate facing towards the target by at most `max_degrees`.
    pub fn turn_towards(&mut self, target: Vec2, max_degrees: f32) {
        let Some(desired) = self.direction_to(target) else {
            return;
        };
        let signed = signed_angle(self.facing, desired);
        let limit = max_degrees.max(0.0).to_radians();
        let step = signed.clamp(-limit, limit);
        self.facing = Vec2::from_angle(step)
            .rotate(self.facing)
            .try_normalize()
            .unwrap_or(desired);
    }

    /// Unsigned angle (degrees) between facing and the direction to `target`.
    pub fn angle_to(&self, target: Vec2) -> Option<f32> {
        self.direction_to(target)
            .map(|dir| signed_angle(self.facing, dir).abs().to_degrees())
    }

    /// Move along the steering velocity at `speed`, facing the target.
    pub fn steer_towards(&mut self, target: Vec2, speed: f32) {
        match self.direction_to(target) {
            Some(dir) => {
                self.facing = dir;
                self.velocity = dir * speed.max(0.0);
            }
            None => self.stop(),
        }
    }
}

fn signed_angle(from: Vec2, to: Vec2) -> f32 {
    from.perp_dot(to).atan2(from.dot(to))
}
