//! Health + the shared `Damageable` contract.
//!
//! Every actor kind implements `Damageable` on its own vitals component.
//! `take_damage` is pure bookkeeping: it mutates hit points and reports
//! what the ECS layer has to do (knockback, flash, stun, invulnerability,
//! death). The systems in `damage.rs` apply the report.

use bevy::prelude::*;

use crate::components::ActorKind;
use crate::config::Progression;

/// Hit points. Invariant: 0 ≤ current ≤ max, max ≥ 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Health {
    pub fn new(max: i32) -> Self {
        let max = max.max(1);
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn percent(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }

    /// Subtracts `amount` (clamped at zero), returns hit points actually lost.
    pub fn apply(&mut self, amount: i32) -> i32 {
        let before = self.current;
        self.current = (self.current - amount.max(0)).clamp(0, self.max);
        before - self.current
    }

    /// Returns hit points actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.current;
        self.current = (self.current + amount.max(0)).clamp(0, self.max);
        self.current - before
    }

    /// Re-derive max. Without `heal_to_full` the current value shifts by the
    /// same delta as max (armor upgrade grants the extra hits immediately).
    pub fn set_max(&mut self, max: i32, heal_to_full: bool) {
        let max = max.max(1);
        let delta = max - self.max;
        self.max = max;
        self.current = if heal_to_full {
            max
        } else {
            (self.current + delta).clamp(0, max)
        };
    }
}

/// Hit feedback tuning shared by every kind.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct HitProfile {
    pub knockback_force: f32,
    pub death_knockback_force: f32,
    pub flash_duration: f32,
    /// Seconds between the killing blow and the follow-up
    pub death_linger: f32,
}

/// What happens once the death linger runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum DeathFollowUp {
    /// Enemy: loot spawn request, then despawn
    DropLoot,
    /// Boss: `BossDefeated`, then despawn
    BossDefeated,
    /// Player: `PlayerDefeated`; the scene layer owns the body
    PlayerDefeated,
    /// Clone: just despawn
    Vanish,
}

impl DeathFollowUp {
    pub fn despawns(&self) -> bool {
        !matches!(self, DeathFollowUp::PlayerDefeated)
    }
}

/// Everything a single accepted hit caused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitReport {
    pub final_damage: i32,
    /// Hit points actually removed (≤ final_damage)
    pub applied: i32,
    pub knockback: Vec2,
    pub killed: bool,
    pub stun: Option<f32>,
    pub invulnerability: Option<f32>,
    pub flash: f32,
}

/// `max(1, round(max(amount, 1) * scale))`
pub fn scaled_damage(amount: i32, scale: f32) -> i32 {
    let scale = if scale.is_finite() { scale.max(0.0) } else { 1.0 };
    let incoming = amount.max(1) as f32 * scale;
    (incoming.round() as i32).max(1)
}

/// Impulse pushing `position` away from `source`; zero without a usable source.
pub fn knockback_impulse(source: Option<Vec2>, position: Vec2, force: f32) -> Vec2 {
    let Some(source) = source else {
        return Vec2::ZERO;
    };
    (position - source).normalize_or_zero() * force.max(0.0)
}

pub trait Damageable {
    const KIND: ActorKind;
    /// Whether the stun from a hit shows the stun tint
    const HIT_STUN_TINTED: bool = true;

    fn health(&self) -> &Health;
    fn health_mut(&mut self) -> &mut Health;
    fn is_dead(&self) -> bool;
    fn mark_dead(&mut self);
    fn profile(&self) -> &HitProfile;

    /// Multiplier on incoming damage for the current tier.
    fn incoming_scale(&self, progression: &Progression) -> f32;

    /// Stun duration caused by a non-lethal hit of `final_damage`.
    fn stun_for(&self, final_damage: i32) -> Option<f32>;

    fn invulnerability_after_hit(&self) -> Option<f32> {
        None
    }

    fn death_follow_up(&self) -> DeathFollowUp;

    /// Accepts or ignores a hit. `None` means nothing happened at all
    /// (already dead, or inside an invulnerability window).
    fn take_damage(
        &mut self,
        amount: i32,
        source: Option<Vec2>,
        position: Vec2,
        progression: &Progression,
        invulnerable: bool,
    ) -> Option<HitReport> {
        if self.is_dead() || invulnerable {
            return None;
        }

        let final_damage = scaled_damage(amount, self.incoming_scale(progression));
        let applied = self.health_mut().apply(final_damage);
        let killed = !self.health().is_alive();
        if killed {
            self.mark_dead();
        }

        let profile = *self.profile();
        let force = if killed {
            profile.death_knockback_force
        } else {
            profile.knockback_force
        };

        Some(HitReport {
            final_damage,
            applied,
            knockback: knockback_impulse(source, position, force),
            killed,
            stun: if killed { None } else { self.stun_for(final_damage) },
            invulnerability: if killed { None } else { self.invulnerability_after_hit() },
            flash: profile.flash_duration,
        })
    }
}
