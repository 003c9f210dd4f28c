//! Spawn bundles for every actor kind.
//!
//! Each bundle carries a private copy of its tuning, so per-instance changes
//! (berserk speed) stay local to that actor.

use bevy::prelude::*;

use crate::action::ActionScheduler;
use crate::ai::{BossBrain, BossPhaseTracker, CloneBrain, EnemyBrain, Shockwave};
use crate::combat::{BossVitals, CloneVitals, EnemyVitals, PlayerVitals};
use crate::components::{Body, Boss, Enemy, Faction, Player, ShadowClone, Tint, Weapon, SHADOW_COLOR};
use crate::config::{BossConfig, CloneConfig, EnemyConfig, PlayerConfig, Progression, ShockwaveConfig};
use crate::perception::{AggroGate, ThreatMemory};
use crate::physics::MovementInput;

pub fn player_bundle(position: Vec2, config: &PlayerConfig, progression: &Progression) -> impl Bundle {
    (
        Name::new("Player"),
        Player,
        Faction::Player,
        PlayerVitals::new(config, progression),
        Body::new(position, config.body_radius),
        Weapon::new(
            progression.player_weapon_damage(config.weapon_base_damage),
            config.weapon_reach,
            config.weapon_radius,
        ),
        MovementInput {
            direction: Vec2::ZERO,
            move_speed: config.move_speed,
        },
        config.clone(),
    )
}

pub fn enemy_bundle(position: Vec2, config: &EnemyConfig) -> impl Bundle {
    (
        Name::new("Enemy"),
        Enemy,
        Faction::Hostile,
        EnemyVitals::new(config),
        Body::new(position, config.body_radius),
        Weapon::new(config.weapon_damage, config.weapon_reach, config.weapon_radius),
        ActionScheduler::new(),
        ThreatMemory::new(config.detect_range, config.alert_duration),
        EnemyBrain::default(),
        config.clone(),
    )
}

pub fn boss_bundle(position: Vec2, config: &BossConfig, progression: &Progression) -> impl Bundle {
    (
        Name::new("Boss"),
        Boss,
        Faction::Hostile,
        BossVitals::new(config, progression),
        Body::new(position, config.body_radius),
        Weapon::new(
            progression.boss_weapon_damage(config.weapon_base_damage, config.weapon_damage_per_tier),
            config.weapon_reach,
            config.weapon_radius,
        ),
        ActionScheduler::new(),
        AggroGate::new(config.aggro_range, config.disengage_range),
        BossBrain::new(config),
        BossPhaseTracker::new(),
        config.clone(),
    )
}

pub fn shadow_clone_bundle(position: Vec2, config: &CloneConfig) -> impl Bundle {
    (
        Name::new("ShadowClone"),
        ShadowClone,
        Faction::Hostile,
        CloneVitals::new(config),
        Body::new(position, config.body_radius),
        Tint::new(SHADOW_COLOR),
        Weapon::new(config.weapon_damage, config.weapon_reach, config.weapon_radius),
        ActionScheduler::new(),
        CloneBrain::new(config),
        config.clone(),
    )
}

pub fn shockwave_bundle(center: Vec2, config: &ShockwaveConfig, source: Option<Entity>) -> impl Bundle {
    (Name::new("Shockwave"), Shockwave::new(center, config, source))
}
