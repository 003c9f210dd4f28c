//! Per-kind vitals: the four `Damageable` implementations.

use bevy::prelude::*;

use super::health::{Damageable, DeathFollowUp, Health, HitProfile};
use super::status::{HitFlash, Invulnerability, Stun};
use crate::components::{ActorKind, Body, Tint};
use crate::config::{BossConfig, CloneConfig, EnemyConfig, PlayerConfig, Progression};

// ============================================================================
// Player
// ============================================================================

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Body, Tint, Stun, HitFlash, Invulnerability)]
pub struct PlayerVitals {
    pub health: Health,
    pub dead: bool,
    pub profile: HitProfile,
    pub recover_duration: f32,
    pub invulnerability_duration: f32,
    pub base_health: i32,
}

impl PlayerVitals {
    pub fn new(config: &PlayerConfig, progression: &Progression) -> Self {
        Self {
            health: Health::new(progression.player_max_health(config.base_health)),
            dead: false,
            profile: HitProfile {
                knockback_force: config.knockback_force,
                death_knockback_force: config.death_knockback_force,
                flash_duration: config.flash_duration,
                death_linger: config.death_linger,
            },
            recover_duration: config.recover_duration,
            invulnerability_duration: config.invulnerability_duration,
            base_health: config.base_health,
        }
    }

    /// Armor purchase: re-derive max from the armor level.
    pub fn recalculate_from_armor(&mut self, progression: &Progression, heal_to_full: bool) {
        let max = progression.player_max_health(self.base_health);
        self.health.set_max(max, heal_to_full);
    }

    pub fn can_drink_potion(&self, potions_available: u32) -> bool {
        !self.dead && potions_available > 0 && self.health.current < self.health.max
    }

    /// Heals ceil(max / 3). Returns true if a potion was consumed; the
    /// inventory layer owns the potion counter.
    pub fn drink_potion(&mut self, potions_available: u32) -> bool {
        if !self.can_drink_potion(potions_available) {
            return false;
        }
        let amount = (self.health.max + 2) / 3;
        self.health.heal(amount);
        true
    }
}

impl Damageable for PlayerVitals {
    const KIND: ActorKind = ActorKind::Player;
    // Recover window is a bare control lock; the red flash stays visible
    const HIT_STUN_TINTED: bool = false;

    fn health(&self) -> &Health {
        &self.health
    }
    fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }
    fn is_dead(&self) -> bool {
        self.dead
    }
    fn mark_dead(&mut self) {
        self.dead = true;
    }
    fn profile(&self) -> &HitProfile {
        &self.profile
    }

    fn incoming_scale(&self, progression: &Progression) -> f32 {
        progression.incoming_player_scale()
    }

    /// Control lock while the knockback plays out
    fn stun_for(&self, _final_damage: i32) -> Option<f32> {
        Some(self.recover_duration)
    }

    fn invulnerability_after_hit(&self) -> Option<f32> {
        Some(self.invulnerability_duration)
    }

    fn death_follow_up(&self) -> DeathFollowUp {
        DeathFollowUp::PlayerDefeated
    }
}

// ============================================================================
// Enemy
// ============================================================================

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Body, Tint, Stun, HitFlash)]
pub struct EnemyVitals {
    pub health: Health,
    pub dead: bool,
    pub profile: HitProfile,
    pub hit_stun: f32,
}

impl EnemyVitals {
    pub fn new(config: &EnemyConfig) -> Self {
        Self {
            health: Health::new(config.max_health),
            dead: false,
            profile: HitProfile {
                knockback_force: config.knockback_force,
                death_knockback_force: config.death_knockback_force,
                flash_duration: config.flash_duration,
                death_linger: config.death_linger,
            },
            hit_stun: config.hit_stun_duration,
        }
    }
}

impl Damageable for EnemyVitals {
    const KIND: ActorKind = ActorKind::Enemy;

    fn health(&self) -> &Health {
        &self.health
    }
    fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }
    fn is_dead(&self) -> bool {
        self.dead
    }
    fn mark_dead(&mut self) {
        self.dead = true;
    }
    fn profile(&self) -> &HitProfile {
        &self.profile
    }

    fn incoming_scale(&self, progression: &Progression) -> f32 {
        progression.incoming_hostile_scale()
    }

    fn stun_for(&self, _final_damage: i32) -> Option<f32> {
        Some(self.hit_stun)
    }

    fn death_follow_up(&self) -> DeathFollowUp {
        DeathFollowUp::DropLoot
    }
}

// ============================================================================
// Boss
// ============================================================================

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Body, Tint, Stun, HitFlash)]
pub struct BossVitals {
    pub health: Health,
    pub dead: bool,
    pub profile: HitProfile,
    /// Only hits of at least this much (after scaling) stun
    pub stun_threshold: i32,
    pub stun_duration: f32,
}

impl BossVitals {
    pub fn new(config: &BossConfig, progression: &Progression) -> Self {
        Self {
            health: Health::new(progression.boss_max_health(config.base_health, config.health_per_tier)),
            dead: false,
            profile: HitProfile {
                knockback_force: config.knockback_force,
                death_knockback_force: config.death_knockback_force,
                flash_duration: config.flash_duration,
                death_linger: config.death_linger,
            },
            stun_threshold: config.stun_threshold,
            stun_duration: config.stun_duration,
        }
    }
}

impl Damageable for BossVitals {
    const KIND: ActorKind = ActorKind::Boss;

    fn health(&self) -> &Health {
        &self.health
    }
    fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }
    fn is_dead(&self) -> bool {
        self.dead
    }
    fn mark_dead(&mut self) {
        self.dead = true;
    }
    fn profile(&self) -> &HitProfile {
        &self.profile
    }

    fn incoming_scale(&self, progression: &Progression) -> f32 {
        progression.incoming_hostile_scale()
    }

    fn stun_for(&self, final_damage: i32) -> Option<f32> {
        (final_damage >= self.stun_threshold).then_some(self.stun_duration)
    }

    fn death_follow_up(&self) -> DeathFollowUp {
        DeathFollowUp::BossDefeated
    }
}

// ============================================================================
// Shadow clone
// ============================================================================

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Body, Tint, Stun, HitFlash)]
pub struct CloneVitals {
    pub health: Health,
    pub dead: bool,
    pub profile: HitProfile,
}

impl CloneVitals {
    pub fn new(config: &CloneConfig) -> Self {
        Self {
            health: Health::new(config.max_health),
            dead: false,
            profile: HitProfile {
                knockback_force: config.knockback_force,
                death_knockback_force: config.knockback_force,
                flash_duration: config.flash_duration,
                death_linger: config.death_linger,
            },
        }
    }
}

impl Damageable for CloneVitals {
    const KIND: ActorKind = ActorKind::ShadowClone;

    fn health(&self) -> &Health {
        &self.health
    }
    fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }
    fn is_dead(&self) -> bool {
        self.dead
    }
    fn mark_dead(&mut self) {
        self.dead = true;
    }
    fn profile(&self) -> &HitProfile {
        &self.profile
    }

    /// Clones take raw damage
    fn incoming_scale(&self, _progression: &Progression) -> f32 {
        1.0
    }

    fn stun_for(&self, _final_damage: i32) -> Option<f32> {
        None
    }

    fn death_follow_up(&self) -> DeathFollowUp {
        DeathFollowUp::Vanish
    }
}
