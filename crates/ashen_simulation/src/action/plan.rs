//! Action definitions: what an actor can do, as plain data.
//!
//! Plans are built from the actor's tuning at decision time, so per-actor
//! changes (berserk speed) flow into the next plan automatically.

use bevy::prelude::*;

use crate::config::{BossConfig, CloneConfig, ComboStep, DashConfig, EnemyConfig, LungeConfig, SwingConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum ActionKind {
    Combo,
    Charge,
    Spin,
    Dash,
    Swing,
    LongRush,
    ShortLunge,
    Slash,
}

/// Coarse phase label exposed to animation/UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum ActionPhase {
    Windup,
    Active,
    Recovery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComboPlan {
    pub steps: Vec<ComboStep>,
    /// Max wait for `StepFinished`, measured from swing start
    pub step_timeout: f32,
    /// Residual angle (degrees) above which the rest of the combo is dropped
    pub max_angle: f32,
    /// Re-aim turn limit per swing (degrees)
    pub reface_max_degrees: f32,
    pub recovery: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargePlan {
    pub telegraph: f32,
    pub speed: f32,
    pub duration: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub duration: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPlan {
    pub dash: DashConfig,
    pub obstacle_mask: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingPlan {
    pub swing: SwingConfig,
    pub recovery: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LungePlan {
    pub long: bool,
    pub lunge: LungeConfig,
    pub recovery: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlashPlan {
    pub duration: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionPlan {
    Combo(ComboPlan),
    Charge(ChargePlan),
    Spin(SpinPlan),
    Dash(DashPlan),
    Swing(SwingPlan),
    Lunge(LungePlan),
    Slash(SlashPlan),
}

impl ActionPlan {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionPlan::Combo(_) => ActionKind::Combo,
            ActionPlan::Charge(_) => ActionKind::Charge,
            ActionPlan::Spin(_) => ActionKind::Spin,
            ActionPlan::Dash(_) => ActionKind::Dash,
            ActionPlan::Swing(_) => ActionKind::Swing,
            ActionPlan::Lunge(plan) if plan.long => ActionKind::LongRush,
            ActionPlan::Lunge(_) => ActionKind::ShortLunge,
            ActionPlan::Slash(_) => ActionKind::Slash,
        }
    }

    // ------------------------------------------------------------------------
    // Boss
    // ------------------------------------------------------------------------

    pub fn boss_combo(config: &BossConfig) -> Self {
        ActionPlan::Combo(ComboPlan {
            steps: config.combo.clone(),
            step_timeout: config.combo_step_timeout,
            max_angle: config.combo_max_angle,
            reface_max_degrees: config.combo_reface_max_degrees,
            recovery: config.combo_recovery,
        })
    }

    pub fn boss_charge(config: &BossConfig) -> Self {
        ActionPlan::Charge(ChargePlan {
            telegraph: config.charge_telegraph,
            speed: config.charge_speed,
            duration: config.charge_duration,
        })
    }

    pub fn boss_spin(config: &BossConfig) -> Self {
        ActionPlan::Spin(SpinPlan {
            duration: config.spin_duration,
        })
    }

    pub fn boss_dash(config: &BossConfig) -> Self {
        ActionPlan::Dash(DashPlan {
            dash: config.dash,
            obstacle_mask: config.obstacle_mask,
        })
    }

    /// Boss plan for a picked kind; `None` for kinds the boss does not own.
    pub fn for_boss(kind: ActionKind, config: &BossConfig) -> Option<Self> {
        match kind {
            ActionKind::Combo => Some(Self::boss_combo(config)),
            ActionKind::Charge => Some(Self::boss_charge(config)),
            ActionKind::Spin => Some(Self::boss_spin(config)),
            ActionKind::Dash => Some(Self::boss_dash(config)),
            _ => None,
        }
    }

    // ------------------------------------------------------------------------
    // Enemy / clone
    // ------------------------------------------------------------------------

    pub fn enemy_swing(config: &EnemyConfig) -> Self {
        ActionPlan::Swing(SwingPlan {
            swing: config.swing,
            recovery: config.attack_cooldown,
        })
    }

    pub fn enemy_lunge(config: &EnemyConfig, long: bool) -> Self {
        ActionPlan::Lunge(LungePlan {
            long,
            lunge: if long { config.long_rush } else { config.short_lunge },
            recovery: config.attack_cooldown,
        })
    }

    pub fn clone_slash(config: &CloneConfig) -> Self {
        ActionPlan::Slash(SlashPlan {
            duration: config.slash_duration,
        })
    }
}
