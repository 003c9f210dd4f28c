//! Hit + stun application
//!
//! Collisions (engine callbacks or the headless overlap pass) arrive as
//! `HitLanded`. One generic system per vitals type turns them into health
//! changes and applies the `HitReport` side effects: knockback, flash,
//! i-frames, stun, death.

use bevy::ecs::component::Mutable;
use bevy::prelude::*;

use super::death::DeathLinger;
use super::events::{CombatCue, CueKind};
use super::health::Damageable;
use super::status::{HitFlash, Invulnerability, Stun};
use crate::action::{ActionScheduler, ActorRig};
use crate::components::{ActorKind, Body, Tint, Weapon, DEATH_COLOR, STUN_COLOR};
use crate::config::Progression;
use crate::logger;

// ============================================================================
// Events
// ============================================================================

/// A hit surface touched a damageable actor.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HitLanded {
    pub attacker: Option<Entity>,
    pub target: Entity,
    pub amount: i32,
    /// Knockback origin (usually the attacker's position)
    pub source: Option<Vec2>,
}

/// Stun from outside the damage path (parry, scripted events).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct StunRequest {
    pub target: Entity,
    pub duration: f32,
}

/// Событие: урон нанесен (UI, sounds, health bars)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DamageDealt {
    pub attacker: Option<Entity>,
    pub target: Entity,
    pub kind: ActorKind,
    pub damage: i32,
    pub remaining_health: i32,
    pub target_died: bool,
}

/// Fired on the killing blow, before the death linger.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ActorDied {
    pub entity: Entity,
    pub kind: ActorKind,
    pub killer: Option<Entity>,
    pub position: Vec2,
}

/// Marker: actor is dead. AI, perception and actions skip it.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Dead;

// ============================================================================
// Control preemption
// ============================================================================

/// Drops whatever the actor was doing (action or bare steering).
pub fn cancel_control(scheduler: Option<&mut ActionScheduler>, rig: &mut ActorRig) {
    match scheduler {
        Some(scheduler) => scheduler.cancel(rig),
        None => rig.reset(),
    }
}

/// The single stun contract for every kind: restart the timer, cancel the
/// action, show the stun tint (untinted for a bare control lock).
pub fn stun_actor(
    stun: &mut Stun,
    scheduler: Option<&mut ActionScheduler>,
    rig: &mut ActorRig,
    duration: f32,
    tinted: bool,
) {
    if duration <= 0.0 {
        return;
    }
    stun.start(duration, tinted);
    cancel_control(scheduler, rig);
    if tinted {
        rig.tint.set(STUN_COLOR);
    }
}

// ============================================================================
// Systems
// ============================================================================

#[allow(clippy::type_complexity)]
pub fn apply_hits<D: Damageable + Component<Mutability = Mutable>>(
    mut hits: EventReader<HitLanded>,
    progression: Res<Progression>,
    mut targets: Query<
        (
            &mut D,
            &mut Body,
            &mut Stun,
            &mut HitFlash,
            &mut Tint,
            Option<&mut Invulnerability>,
            Option<&mut ActionScheduler>,
            Option<&mut Weapon>,
        ),
        Without<Dead>,
    >,
    mut damage_dealt_events: EventWriter<DamageDealt>,
    mut actor_died_events: EventWriter<ActorDied>,
    mut cues: EventWriter<CombatCue>,
    mut commands: Commands,
) {
    for hit in hits.read() {
        let Ok((mut vitals, mut body, mut stun, mut flash, mut tint, mut invulnerability, mut scheduler, mut weapon)) =
            targets.get_mut(hit.target)
        else {
            continue;
        };

        let invulnerable = invulnerability.as_deref().is_some_and(Invulnerability::is_active);
        let position = body.position;
        let Some(report) = vitals.take_damage(hit.amount, hit.source, position, &progression, invulnerable) else {
            continue;
        };

        body.apply_impulse(report.knockback);
        if let (Some(window), Some(invulnerability)) = (report.invulnerability, invulnerability.as_deref_mut()) {
            invulnerability.grant(window);
        }

        let mut rig = ActorRig::new(&mut body, weapon.as_deref_mut(), &mut tint);

        if report.killed {
            cancel_control(scheduler.as_deref_mut(), &mut rig);
            stun.clear();
            rig.tint.set(DEATH_COLOR);

            commands.entity(hit.target).insert((
                Dead,
                DeathLinger::new(vitals.profile().death_linger, vitals.death_follow_up()),
            ));
            actor_died_events.write(ActorDied {
                entity: hit.target,
                kind: D::KIND,
                killer: hit.attacker,
                position,
            });
            cues.write(CombatCue {
                entity: hit.target,
                cue: CueKind::Death,
            });
            logger::log_info(&format!("💀 {:?} {:?} killed by {:?}", D::KIND, hit.target, hit.attacker));
        } else {
            cues.write(CombatCue {
                entity: hit.target,
                cue: CueKind::Hurt,
            });
            if let Some(duration) = report.stun {
                stun_actor(&mut stun, scheduler.as_deref_mut(), &mut rig, duration, D::HIT_STUN_TINTED);
            }
            // Flash wins over the stun tint until it runs out
            flash.start(report.flash, rig.tint);
        }

        logger::log(&format!(
            "🩸 {:?} {:?} took {} (hp {}/{})",
            D::KIND,
            hit.target,
            report.final_damage,
            vitals.health().current,
            vitals.health().max
        ));

        damage_dealt_events.write(DamageDealt {
            attacker: hit.attacker,
            target: hit.target,
            kind: D::KIND,
            damage: report.applied,
            remaining_health: vitals.health().current,
            target_died: report.killed,
        });
    }
}

#[allow(clippy::type_complexity)]
pub fn apply_stun_requests<D: Damageable + Component>(
    mut requests: EventReader<StunRequest>,
    mut targets: Query<
        (
            &D,
            &mut Body,
            &mut Stun,
            &mut Tint,
            Option<&mut ActionScheduler>,
            Option<&mut Weapon>,
        ),
        Without<Dead>,
    >,
) {
    for request in requests.read() {
        let Ok((vitals, mut body, mut stun, mut tint, mut scheduler, mut weapon)) = targets.get_mut(request.target)
        else {
            continue;
        };
        if vitals.is_dead() {
            continue;
        }

        let mut rig = ActorRig::new(&mut body, weapon.as_deref_mut(), &mut tint);
        stun_actor(&mut stun, scheduler.as_deref_mut(), &mut rig, request.duration, true);
        logger::log(&format!("💫 {:?} {:?} stunned for {:.2}s", D::KIND, request.target, request.duration));
    }
}
