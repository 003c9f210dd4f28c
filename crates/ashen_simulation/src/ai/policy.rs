//! Decision policies as plain functions
//!
//! - boss: cooldown-gated candidates, distance-shaped weights, weighted pick,
//!   chase when nothing is eligible
//! - enemy: fixed range bands over the current perception
//! - clone: strike when close and off cooldown, otherwise chase
//!
//! The systems in `systems/` only gather inputs and apply the outcome.

use bevy::prelude::*;

use super::components::{Cooldowns, EnemyBandKind};
use crate::action::ActionKind;
use crate::config::{BossConfig, CloneConfig, EnemyConfig};
use crate::perception::{Perception, ThreatMemory};

/// Weights are floored here so a zero-weight candidate can still be picked.
pub const MIN_WEIGHT: f32 = 1e-4;

/// Investigating enemies stop this close to the remembered position.
pub const ARRIVAL_DISTANCE: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub kind: ActionKind,
    pub weight: f32,
}

/// Clamped lerp.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// 0 when the range is degenerate.
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() < f32::EPSILON {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}

// ============================================================================
// Boss
// ============================================================================

/// Eligible boss attacks at `distance`, in a fixed order (combo, spin,
/// charge, dash).
pub fn boss_candidates(distance: f32, config: &BossConfig, cooldowns: &Cooldowns, now: f32) -> Vec<Candidate> {
    let melee = config.melee_range;
    let mut candidates = Vec::with_capacity(4);

    if distance <= melee && cooldowns.is_ready(ActionKind::Combo, now) {
        candidates.push(Candidate {
            kind: ActionKind::Combo,
            weight: lerp(2.2, 1.2, distance / melee.max(f32::EPSILON)),
        });
    }

    if distance <= melee * 2.5 && cooldowns.is_ready(ActionKind::Spin, now) {
        let ideal = melee * 1.2;
        let falloff = (1.0 - (distance - ideal).abs() / (melee * 1.5).max(f32::EPSILON)).clamp(0.0, 1.0);
        candidates.push(Candidate {
            kind: ActionKind::Spin,
            weight: 0.6 + 1.4 * falloff,
        });
    }

    if distance >= melee && distance <= config.charge_range && cooldowns.is_ready(ActionKind::Charge, now) {
        let t = inverse_lerp(melee, config.charge_range, distance);
        candidates.push(Candidate {
            kind: ActionKind::Charge,
            weight: lerp(0.7, 2.0, t),
        });
    }

    if distance >= config.dash_trigger_distance && cooldowns.is_ready(ActionKind::Dash, now) {
        let t = inverse_lerp(config.dash_trigger_distance, config.aggro_range, distance);
        candidates.push(Candidate {
            kind: ActionKind::Dash,
            weight: lerp(0.8, 1.6, t),
        });
    }

    candidates
}

/// Weighted pick with `roll` in [0, 1). `None` only for an empty list.
pub fn pick_weighted(candidates: &[Candidate], roll: f32) -> Option<ActionKind> {
    let last = candidates.last()?;

    let total: f32 = candidates.iter().map(|c| c.weight.max(MIN_WEIGHT)).sum();
    let r = roll.clamp(0.0, 1.0) * total;

    let mut acc = 0.0;
    for candidate in candidates {
        acc += candidate.weight.max(MIN_WEIGHT);
        if r <= acc {
            return Some(candidate.kind);
        }
    }

    Some(last.kind)
}

/// Chase steering: full speed far away, linear slow-down inside
/// `stop_distance + buffer`, zero at `stop_distance` or closer.
pub fn chase_velocity(from: Vec2, to: Vec2, speed: f32, stop_distance: f32, buffer: f32) -> Vec2 {
    let delta = to - from;
    let distance = delta.length();
    if distance <= stop_distance || distance <= f32::EPSILON {
        return Vec2::ZERO;
    }

    let slow_start = stop_distance + buffer.max(0.0);
    let multiplier = if distance < slow_start {
        inverse_lerp(stop_distance, slow_start, distance)
    } else {
        1.0
    };

    delta / distance * speed.max(0.0) * multiplier
}

// ============================================================================
// Enemy
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyBand {
    /// Visible and beyond the rush trigger
    LongRush,
    /// Visible, between attack range and rush trigger: walk along facing
    Approach,
    /// Visible and within attack range: swing or short lunge
    Melee,
    /// Not visible, memory still warm: walk to the remembered position
    Investigate(Vec2),
    Idle,
}

impl EnemyBand {
    pub fn kind(&self) -> EnemyBandKind {
        match self {
            EnemyBand::LongRush => EnemyBandKind::LongRush,
            EnemyBand::Approach => EnemyBandKind::Approach,
            EnemyBand::Melee => EnemyBandKind::Melee,
            EnemyBand::Investigate(_) => EnemyBandKind::Investigate,
            EnemyBand::Idle => EnemyBandKind::Idle,
        }
    }
}

pub fn enemy_band(perception: Option<Perception>, memory: &ThreatMemory, config: &EnemyConfig) -> EnemyBand {
    if let Some(perception) = perception.filter(|p| p.can_see) {
        return if perception.distance > config.rush_trigger_distance {
            EnemyBand::LongRush
        } else if perception.distance > config.attack_range {
            EnemyBand::Approach
        } else {
            EnemyBand::Melee
        };
    }

    match memory.pursuit_target() {
        Some(position) => EnemyBand::Investigate(position),
        None => EnemyBand::Idle,
    }
}

/// Melee coin flip: above one half swings, otherwise short lunge.
pub fn melee_choice(roll: f32) -> ActionKind {
    if roll > 0.5 {
        ActionKind::Swing
    } else {
        ActionKind::ShortLunge
    }
}

// ============================================================================
// Shadow clone
// ============================================================================

pub fn clone_should_slash(distance: f32, config: &CloneConfig, cooldowns: &Cooldowns, now: f32) -> bool {
    distance <= config.attack_range && cooldowns.is_ready(ActionKind::Slash, now)
}
