//! ECS components shared by every combat actor
//!
//! - actor: kind markers (Player, Enemy, Boss, ShadowClone) + Faction
//! - body: 2D kinematics the engine syncs with its rigidbody
//! - weapon: damage-dealing hit surface + pivot
//! - tint: sprite tint with a phase baseline

pub mod actor;
pub mod body;
pub mod tint;
pub mod weapon;

#[cfg(test)]
mod body_tests;

pub use actor::*;
pub use body::*;
pub use tint::*;
pub use weapon::*;
