//! Timed status effects: stun, invulnerability, hit flash.

use bevy::prelude::*;

use super::damage::Dead;
use crate::components::{Tint, HIT_FLASH_COLOR, STUN_COLOR};

/// Damage stun (or the player's control lock). Restarts, never stacks.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Stun {
    pub remaining: f32,
    /// Shows `STUN_COLOR` while active; false for the player's control lock
    pub tinted: bool,
}

impl Stun {
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn start(&mut self, duration: f32, tinted: bool) {
        self.remaining = duration.max(0.0);
        self.tinted = tinted;
    }

    pub fn clear(&mut self) {
        self.remaining = 0.0;
        self.tinted = false;
    }

    pub fn shows_tint(&self) -> bool {
        self.is_active() && self.tinted
    }

    /// Returns true on the tick the stun runs out.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.is_active() {
            return false;
        }
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
        !self.is_active()
    }
}

/// Player i-frames after a hit.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Invulnerability {
    pub remaining: f32,
}

impl Invulnerability {
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn grant(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
    }

    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
    }
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct HitFlash {
    pub remaining: f32,
}

impl HitFlash {
    pub fn start(&mut self, duration: f32, tint: &mut Tint) {
        self.remaining = duration.max(0.0);
        tint.set(HIT_FLASH_COLOR);
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Returns true on the tick the flash runs out.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.is_active() {
            return false;
        }
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
        !self.is_active()
    }
}

/// Stun expiry restores the baseline tint unless a flash is still showing.
pub fn tick_stuns(time: Res<Time>, mut actors: Query<(&mut Stun, &mut Tint, &HitFlash), Without<Dead>>) {
    let dt = time.delta_secs();
    for (mut stun, mut tint, flash) in actors.iter_mut() {
        if stun.tick(dt) && stun.tinted && !flash.is_active() {
            tint.restore();
        }
    }
}

pub fn tick_invulnerability(time: Res<Time>, mut actors: Query<&mut Invulnerability>) {
    let dt = time.delta_secs();
    for mut invulnerability in actors.iter_mut() {
        invulnerability.tick(dt);
    }
}

/// Flash expiry hands the tint to a running stun, or back to the baseline.
pub fn tick_hit_flashes(
    time: Res<Time>,
    mut actors: Query<(&mut HitFlash, &mut Tint, &Stun), Without<Dead>>,
) {
    let dt = time.delta_secs();
    for (mut flash, mut tint, stun) in actors.iter_mut() {
        if !flash.tick(dt) {
            continue;
        }
        if stun.shows_tint() {
            tint.set(STUN_COLOR);
        } else {
            tint.restore();
        }
    }
}
