//! Shadow clone decision: slash when close, otherwise chase.

use bevy::prelude::*;

use crate::action::{publish_action_events, ActionContext, ActionKind, ActionPlan, ActionScheduler, ActorRig};
use crate::ai::components::CloneBrain;
use crate::ai::policy::clone_should_slash;
use crate::combat::{CombatCue, Dead, SpawnRequest, Stun};
use crate::components::{Body, Player, ShadowClone, Tint, Weapon};
use crate::config::CloneConfig;
use crate::perception::Spatial;

#[allow(clippy::type_complexity)]
pub fn clone_decide(
    time: Res<Time>,
    spatial: Res<Spatial>,
    players: Query<&Body, (With<Player>, Without<Dead>)>,
    mut clones: Query<
        (
            Entity,
            &CloneConfig,
            &Stun,
            &mut CloneBrain,
            &mut ActionScheduler,
            &mut Body,
            Option<&mut Weapon>,
            &mut Tint,
        ),
        (With<ShadowClone>, Without<Dead>, Without<Player>),
    >,
    mut spawns: EventWriter<SpawnRequest>,
    mut cues: EventWriter<CombatCue>,
) {
    let now = time.elapsed_secs();
    let Some(target_pos) = players.single().ok().map(|body| body.position) else {
        // No player: clones just stand there
        for (_, _, _, _, scheduler, mut body, _, _) in clones.iter_mut() {
            if !scheduler.is_performing() {
                body.stop();
            }
        }
        return;
    };

    for (entity, config, stun, mut brain, mut scheduler, mut body, mut weapon, mut tint) in clones.iter_mut() {
        if stun.is_active() || scheduler.is_performing() {
            continue;
        }

        let distance = body.position.distance(target_pos);
        if !clone_should_slash(distance, config, &brain.cooldowns, now) {
            body.steer_towards(target_pos, config.move_speed);
            continue;
        }

        brain.cooldowns.mark_used(ActionKind::Slash, now);
        body.face_towards(target_pos);

        let mut ctx = ActionContext::new(Some(target_pos), spatial.query());
        let mut rig = ActorRig::new(&mut body, weapon.as_deref_mut(), &mut tint);
        scheduler.start(ActionPlan::clone_slash(config), &mut rig, &mut ctx);
        publish_action_events(entity, ctx.events, &mut spawns, &mut cues);
    }
}
