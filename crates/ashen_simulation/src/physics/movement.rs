//! Kinematic integration for headless runs
//!
//! In the game the engine's rigidbodies own motion; headless runs (tests,
//! the demo binary) integrate `Body` here instead:
//! position += (steering velocity + knockback) * dt, knockback decays by drag.

use bevy::prelude::*;

use crate::combat::{Dead, Stun};
use crate::components::{Body, Player};

/// Player movement intent (WASD in the game, scripted in headless runs).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct MovementInput {
    /// Desired direction (any length; normalized on use)
    pub direction: Vec2,
    pub move_speed: f32,
}

impl Default for MovementInput {
    fn default() -> Self {
        Self {
            direction: Vec2::ZERO,
            move_speed: 5.0,
        }
    }
}

/// Система: MovementInput → steering velocity.
///
/// The post-hit control lock (`Stun` on the player) ignores input.
pub fn apply_movement_input(
    mut query: Query<(&MovementInput, &Stun, &mut Body), (With<Player>, Without<Dead>)>,
) {
    for (input, stun, mut body) in query.iter_mut() {
        if stun.is_active() {
            continue;
        }

        match input.direction.try_normalize() {
            Some(direction) => {
                body.facing = direction;
                body.velocity = direction * input.move_speed.max(0.0);
            }
            None => body.stop(),
        }
    }
}

/// Система: velocity → position.
pub fn integrate_bodies(time: Res<Time>, mut bodies: Query<&mut Body>) {
    let dt = time.delta_secs();

    for mut body in bodies.iter_mut() {
        let displacement = (body.velocity + body.knockback) * dt;
        body.position += displacement;

        let drag = (body.knockback_drag * dt).clamp(0.0, 1.0);
        body.knockback *= 1.0 - drag;
        if body.knockback.length_squared() < 1e-4 {
            body.knockback = Vec2::ZERO;
        }
    }
}
