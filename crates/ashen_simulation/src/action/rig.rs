//! Borrowed view of the parts of an actor an action may touch, plus the
//! per-tick context (target, spatial queries, outgoing events).

use bevy::prelude::*;

use crate::combat::{CueKind, SpawnKind};
use crate::components::{Body, Tint, Weapon};
use crate::perception::SpatialQuery;

use super::ActionKind;

pub struct ActorRig<'a> {
    pub body: &'a mut Body,
    pub weapon: Option<&'a mut Weapon>,
    pub tint: &'a mut Tint,
}

impl<'a> ActorRig<'a> {
    pub fn new(body: &'a mut Body, weapon: Option<&'a mut Weapon>, tint: &'a mut Tint) -> Self {
        Self { body, weapon, tint }
    }

    pub fn set_hit_surface(&mut self, enabled: bool) {
        if let Some(weapon) = self.weapon.as_deref_mut() {
            weapon.set_enabled(enabled);
        }
    }

    pub fn pivot(&self) -> f32 {
        self.weapon.as_deref().map_or(0.0, |weapon| weapon.pivot_degrees)
    }

    pub fn set_pivot(&mut self, degrees: f32) {
        if let Some(weapon) = self.weapon.as_deref_mut() {
            weapon.pivot_degrees = degrees;
        }
    }

    /// Steering velocity along facing.
    pub fn launch(&mut self, speed: f32) {
        self.body.velocity = self.body.facing * speed.max(0.0);
    }

    pub fn stop(&mut self) {
        self.body.stop();
    }

    /// Full cleanup: no movement, surface off, pivot home, baseline tint.
    pub fn reset(&mut self) {
        self.stop();
        self.set_hit_surface(false);
        self.set_pivot(0.0);
        self.tint.restore();
    }
}

/// Side effects an action wants the ECS layer to publish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionEvent {
    Spawn {
        kind: SpawnKind,
        position: Vec2,
        lifetime: Option<f32>,
    },
    Cue(CueKind),
    Finished(ActionKind),
}

pub struct ActionContext<'a> {
    /// Current target position (the player), if any
    pub target: Option<Vec2>,
    pub spatial: &'a dyn SpatialQuery,
    pub events: Vec<ActionEvent>,
}

impl<'a> ActionContext<'a> {
    pub fn new(target: Option<Vec2>, spatial: &'a dyn SpatialQuery) -> Self {
        Self {
            target,
            spatial,
            events: Vec::new(),
        }
    }

    pub fn spawn(&mut self, kind: SpawnKind, position: Vec2, lifetime: Option<f32>) {
        self.events.push(ActionEvent::Spawn {
            kind,
            position,
            lifetime,
        });
    }

    pub fn cue(&mut self, cue: CueKind) {
        self.events.push(ActionEvent::Cue(cue));
    }
}
