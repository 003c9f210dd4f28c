//! Boss decision: weighted attack pick, chase otherwise.

use bevy::prelude::*;
use rand::Rng;

use crate::action::{publish_action_events, ActionContext, ActionPlan, ActionScheduler, ActorRig};
use crate::ai::components::{BossBrain, BossMode};
use crate::ai::policy::{boss_candidates, chase_velocity, pick_weighted};
use crate::combat::{CombatCue, Dead, SpawnRequest, Stun};
use crate::components::{Body, Boss, Player, Tint, Weapon};
use crate::config::BossConfig;
use crate::logger;
use crate::perception::{AggroGate, Spatial};
use crate::DeterministicRng;

/// System: pick and start the next boss attack.
///
/// Skipped while stunned, not targeting, or mid-action. Cooldowns are
/// stamped when an attack starts.
#[allow(clippy::type_complexity)]
pub fn boss_decide(
    time: Res<Time>,
    spatial: Res<Spatial>,
    mut rng: ResMut<DeterministicRng>,
    players: Query<&Body, (With<Player>, Without<Dead>)>,
    mut bosses: Query<
        (
            Entity,
            &BossConfig,
            &AggroGate,
            &Stun,
            &mut BossBrain,
            &mut ActionScheduler,
            &mut Body,
            Option<&mut Weapon>,
            &mut Tint,
        ),
        (With<Boss>, Without<Dead>, Without<Player>),
    >,
    mut spawns: EventWriter<SpawnRequest>,
    mut cues: EventWriter<CombatCue>,
) {
    let now = time.elapsed_secs();
    let target = players.single().ok().map(|body| body.position);

    for (entity, config, gate, stun, mut brain, mut scheduler, mut body, mut weapon, mut tint) in bosses.iter_mut() {
        if stun.is_active() || !gate.is_targeting() || scheduler.is_performing() {
            continue;
        }

        let Some(target_pos) = target else {
            brain.mode = BossMode::Idle;
            body.stop();
            continue;
        };

        let distance = body.position.distance(target_pos);
        let candidates = boss_candidates(distance, config, &brain.cooldowns, now);
        let picked = pick_weighted(&candidates, rng.rng.gen::<f32>());

        if let Some(plan) = picked.and_then(|kind| ActionPlan::for_boss(kind, config)) {
            let kind = plan.kind();
            brain.cooldowns.mark_used(kind, now);
            brain.mode = BossMode::Idle;

            let mut ctx = ActionContext::new(Some(target_pos), spatial.query());
            let mut rig = ActorRig::new(&mut body, weapon.as_deref_mut(), &mut tint);
            let handle = scheduler.start(plan, &mut rig, &mut ctx);
            publish_action_events(entity, ctx.events, &mut spawns, &mut cues);

            logger::log(&format!(
                "⚔️ Boss {:?} → {:?} at {:.1}m ({} candidates, {:?})",
                entity,
                kind,
                distance,
                candidates.len(),
                handle
            ));
            continue;
        }

        // Nothing eligible: chase
        let velocity = chase_velocity(
            body.position,
            target_pos,
            config.move_speed,
            config.chase_stop_distance,
            config.chase_buffer,
        );
        body.face_towards(target_pos);
        body.velocity = velocity;
        brain.mode = if velocity == Vec2::ZERO {
            BossMode::Idle
        } else {
            BossMode::Chase
        };
    }
}
