//! External animation signals.
//!
//! The animation layer reports frame events (swing finished, sword on/off,
//! lunge burst). Every wait on a signal also has a timeout, so a missing
//! event never stalls an actor.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionSignal {
    /// Current combo swing animation completed
    StepFinished,
    HitSurfaceOn,
    HitSurfaceOff,
    /// Velocity burst along facing
    Lunge(f32),
    StopMovement,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ActionSignalEvent {
    pub actor: Entity,
    pub signal: ActionSignal,
}
