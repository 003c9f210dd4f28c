//! Per-actor tuning.
//!
//! Defaults are the numbers the prototype shipped with. Every struct is also a
//! component: the spawn bundles attach a copy to each actor, so per-instance
//! changes (boss berserk speed-up) never leak into the shared `CombatTuning`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::perception::LAYER_OBSTACLES;

/// One swing of the boss combo.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboStep {
    pub windup: f32,
    pub active: f32,
    pub recovery: f32,
    pub lunge_speed: f32,
    pub lunge_time: f32,
}

impl Default for ComboStep {
    fn default() -> Self {
        Self {
            windup: 0.10,
            active: 0.08,
            recovery: 0.16,
            lunge_speed: 3.5,
            lunge_time: 0.08,
        }
    }
}

/// Windup → burst shape shared by the enemy long rush and short lunge.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct LungeConfig {
    pub windup: f32,
    pub speed: f32,
    pub duration: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct SwingConfig {
    /// Pivot angle reached at the end of the windup (degrees)
    pub windup_angle: f32,
    pub windup: f32,
    /// Pivot angle at the end of the strike (degrees)
    pub strike_angle: f32,
    pub strike: f32,
    pub reset: f32,
}

impl Default for SwingConfig {
    fn default() -> Self {
        Self {
            windup_angle: 45.0,
            windup: 0.2,
            strike_angle: -135.0,
            strike: 0.15,
            reset: 0.2,
        }
    }
}

#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct PlayerConfig {
    pub base_health: i32,
    pub knockback_force: f32,
    pub death_knockback_force: f32,
    pub flash_duration: f32,
    /// Controls stay locked this long after a non-lethal hit
    pub recover_duration: f32,
    pub invulnerability_duration: f32,
    /// Delay between the killing blow and `PlayerDefeated`
    pub death_linger: f32,
    pub body_radius: f32,
    pub move_speed: f32,
    pub weapon_base_damage: i32,
    pub weapon_reach: f32,
    pub weapon_radius: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            base_health: 3,
            knockback_force: 15.0,
            death_knockback_force: 50.0,
            flash_duration: 0.1,
            recover_duration: 0.2,
            invulnerability_duration: 1.0,
            death_linger: 2.0,
            body_radius: 0.4,
            move_speed: 5.0,
            weapon_base_damage: 1,
            weapon_reach: 1.0,
            weapon_radius: 0.6,
        }
    }
}

#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct EnemyConfig {
    pub max_health: i32,
    pub knockback_force: f32,
    pub death_knockback_force: f32,
    pub hit_stun_duration: f32,
    pub flash_duration: f32,
    pub death_linger: f32,

    pub detect_range: f32,
    /// Memory window after losing sight of the player (seconds)
    pub alert_duration: f32,
    pub rush_trigger_distance: f32,
    pub attack_range: f32,
    pub move_speed: f32,
    /// Recovery after each attack; the enemy cannot act meanwhile
    pub attack_cooldown: f32,
    pub obstacle_mask: u32,

    pub long_rush: LungeConfig,
    pub short_lunge: LungeConfig,
    pub swing: SwingConfig,

    pub weapon_damage: i32,
    pub weapon_reach: f32,
    pub weapon_radius: f32,
    pub body_radius: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            max_health: 3,
            knockback_force: 8.0,
            death_knockback_force: 12.0,
            hit_stun_duration: 0.25,
            flash_duration: 0.1,
            death_linger: 0.5,
            detect_range: 10.0,
            alert_duration: 10.0,
            rush_trigger_distance: 6.0,
            attack_range: 2.0,
            move_speed: 3.0,
            attack_cooldown: 2.0,
            obstacle_mask: LAYER_OBSTACLES,
            long_rush: LungeConfig { windup: 0.5, speed: 12.0, duration: 0.6 },
            short_lunge: LungeConfig { windup: 0.3, speed: 6.0, duration: 0.45 },
            swing: SwingConfig::default(),
            weapon_damage: 1,
            weapon_reach: 0.9,
            weapon_radius: 0.6,
            body_radius: 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct BossCooldowns {
    pub combo: f32,
    pub charge: f32,
    pub spin: f32,
    pub dash: f32,
}

impl Default for BossCooldowns {
    fn default() -> Self {
        Self {
            combo: 3.0,
            charge: 5.0,
            spin: 7.0,
            dash: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    pub windup: f32,
    pub speed: f32,
    pub duration: f32,
    pub stop_distance: f32,
    pub deals_damage: bool,
    pub cast_radius: f32,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            windup: 0.15,
            speed: 16.0,
            duration: 0.65,
            stop_distance: 1.5,
            deals_damage: true,
            cast_radius: 0.4,
        }
    }
}

#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct BossConfig {
    pub base_health: i32,
    pub health_per_tier: f32,
    pub knockback_force: f32,
    pub death_knockback_force: f32,
    /// Hits dealing at least this much (after scaling) stun the boss
    pub stun_threshold: i32,
    pub stun_duration: f32,
    pub flash_duration: f32,
    pub death_linger: f32,

    pub move_speed: f32,
    pub charge_speed: f32,

    pub melee_range: f32,
    pub charge_range: f32,
    pub aggro_range: f32,
    pub disengage_range: f32,
    pub dash_trigger_distance: f32,
    pub chase_stop_distance: f32,
    pub chase_buffer: f32,
    pub obstacle_mask: u32,

    pub cooldowns: BossCooldowns,

    pub combo: Vec<ComboStep>,
    pub combo_step_timeout: f32,
    pub combo_max_angle: f32,
    /// Turn limit of the per-swing re-aim; 180 snaps onto the target
    pub combo_reface_max_degrees: f32,
    pub combo_recovery: f32,

    pub charge_telegraph: f32,
    pub charge_duration: f32,
    pub spin_duration: f32,
    pub dash: DashConfig,

    pub shockwave_delay: f32,
    pub shockwave_interval: f32,
    pub clone_count: u32,
    pub clone_spawn_spread: f32,
    pub berserk_multiplier: f32,

    pub weapon_base_damage: i32,
    pub weapon_damage_per_tier: f32,
    pub weapon_reach: f32,
    pub weapon_radius: f32,
    pub body_radius: f32,
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            base_health: 50,
            health_per_tier: 0.3,
            knockback_force: 8.0,
            death_knockback_force: 8.0,
            stun_threshold: 3,
            stun_duration: 0.3,
            flash_duration: 0.08,
            death_linger: 1.2,
            move_speed: 2.5,
            charge_speed: 12.0,
            melee_range: 3.0,
            charge_range: 10.0,
            aggro_range: 12.0,
            disengage_range: 40.0,
            dash_trigger_distance: 10.0,
            chase_stop_distance: 1.8,
            chase_buffer: 0.25,
            obstacle_mask: LAYER_OBSTACLES,
            cooldowns: BossCooldowns::default(),
            combo: vec![
                ComboStep { windup: 0.10, active: 0.08, recovery: 0.16, lunge_speed: 3.5, lunge_time: 0.08 },
                ComboStep { windup: 0.08, active: 0.07, recovery: 0.16, lunge_speed: 4.0, lunge_time: 0.08 },
                ComboStep { windup: 0.12, active: 0.10, recovery: 0.22, lunge_speed: 4.5, lunge_time: 0.10 },
            ],
            combo_step_timeout: 1.1,
            combo_max_angle: 110.0,
            combo_reface_max_degrees: 180.0,
            combo_recovery: 0.8,
            charge_telegraph: 0.8,
            charge_duration: 0.6,
            spin_duration: 0.9,
            dash: DashConfig::default(),
            shockwave_delay: 1.0,
            shockwave_interval: 8.0,
            clone_count: 2,
            clone_spawn_spread: 5.0,
            berserk_multiplier: 1.5,
            weapon_base_damage: 2,
            weapon_damage_per_tier: 0.15,
            weapon_reach: 1.4,
            weapon_radius: 0.9,
            body_radius: 0.8,
        }
    }
}

#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct CloneConfig {
    pub max_health: i32,
    pub move_speed: f32,
    pub attack_range: f32,
    pub attack_cooldown: f32,
    pub slash_duration: f32,
    pub knockback_force: f32,
    pub flash_duration: f32,
    pub death_linger: f32,
    pub weapon_damage: i32,
    pub weapon_reach: f32,
    pub weapon_radius: f32,
    pub body_radius: f32,
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self {
            max_health: 10,
            move_speed: 3.0,
            attack_range: 2.5,
            attack_cooldown: 2.0,
            slash_duration: 0.3,
            knockback_force: 8.0,
            flash_duration: 0.1,
            death_linger: 1.0,
            weapon_damage: 1,
            weapon_reach: 0.9,
            weapon_radius: 0.6,
            body_radius: 0.4,
        }
    }
}

#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct ShockwaveConfig {
    pub damage: i32,
    pub start_radius: f32,
    pub max_radius: f32,
    pub lifetime: f32,
}

impl Default for ShockwaveConfig {
    fn default() -> Self {
        Self {
            damage: 1,
            start_radius: 0.5,
            max_radius: 8.0,
            lifetime: 2.0,
        }
    }
}

/// Shared tuning table used by the spawn helpers.
///
/// Partial JSON is fine: every missing field falls back to its default.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub boss: BossConfig,
    pub clone: CloneConfig,
    pub shockwave: ShockwaveConfig,
}

impl CombatTuning {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
