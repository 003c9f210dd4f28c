//! Scheduler systems: deliver signals, then advance every running action.

use bevy::prelude::*;

use super::rig::{ActionContext, ActionEvent, ActorRig};
use super::{ActionScheduler, ActionSignalEvent};
use crate::combat::{CombatCue, Dead, SpawnRequest};
use crate::components::{Body, Player, Tint, Weapon};
use crate::logger;
use crate::perception::Spatial;

pub fn deliver_action_signals(
    mut signals: EventReader<ActionSignalEvent>,
    mut actors: Query<(&mut ActionScheduler, &mut Body, Option<&mut Weapon>, &mut Tint), Without<Dead>>,
) {
    for event in signals.read() {
        let Ok((mut scheduler, mut body, mut weapon, mut tint)) = actors.get_mut(event.actor) else {
            continue;
        };
        let mut rig = ActorRig::new(&mut body, weapon.as_deref_mut(), &mut tint);
        scheduler.signal(event.signal, &mut rig);
    }
}

pub fn tick_action_schedulers(
    time: Res<Time>,
    spatial: Res<Spatial>,
    players: Query<&Body, (With<Player>, Without<Dead>)>,
    mut actors: Query<
        (Entity, &mut ActionScheduler, &mut Body, Option<&mut Weapon>, &mut Tint),
        (Without<Player>, Without<Dead>),
    >,
    mut spawns: EventWriter<SpawnRequest>,
    mut cues: EventWriter<CombatCue>,
) {
    let dt = time.delta_secs();
    let target = players.single().ok().map(|body| body.position);

    for (entity, mut scheduler, mut body, mut weapon, mut tint) in actors.iter_mut() {
        if !scheduler.is_performing() {
            continue;
        }

        let mut ctx = ActionContext::new(target, spatial.query());
        let mut rig = ActorRig::new(&mut body, weapon.as_deref_mut(), &mut tint);
        scheduler.tick(dt, &mut rig, &mut ctx);

        publish_action_events(entity, ctx.events, &mut spawns, &mut cues);
    }
}

/// Forwards what an action produced to the engine-facing events.
pub fn publish_action_events(
    entity: Entity,
    events: Vec<ActionEvent>,
    spawns: &mut EventWriter<SpawnRequest>,
    cues: &mut EventWriter<CombatCue>,
) {
    for event in events {
        match event {
            ActionEvent::Spawn {
                kind,
                position,
                lifetime,
            } => {
                spawns.write(SpawnRequest {
                    kind,
                    position,
                    source: Some(entity),
                    lifetime,
                });
            }
            ActionEvent::Cue(cue) => {
                cues.write(CombatCue { entity, cue });
            }
            ActionEvent::Finished(kind) => {
                logger::log(&format!("✅ {:?} finished {:?}", entity, kind));
            }
        }
    }
}
