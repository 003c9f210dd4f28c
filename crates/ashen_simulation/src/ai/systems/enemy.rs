//! Basic enemy decision: range bands over the threat memory.

use bevy::prelude::*;
use rand::Rng;

use crate::action::{publish_action_events, ActionContext, ActionKind, ActionPlan, ActionScheduler, ActorRig};
use crate::ai::components::EnemyBrain;
use crate::ai::policy::{enemy_band, melee_choice, EnemyBand, ARRIVAL_DISTANCE};
use crate::combat::{CombatCue, Dead, SpawnRequest, Stun};
use crate::components::{Body, Enemy, Player, Tint, Weapon};
use crate::config::EnemyConfig;
use crate::logger;
use crate::perception::{Perception, Spatial, ThreatMemory};
use crate::DeterministicRng;

#[allow(clippy::type_complexity)]
pub fn enemy_decide(
    spatial: Res<Spatial>,
    mut rng: ResMut<DeterministicRng>,
    players: Query<&Body, (With<Player>, Without<Dead>)>,
    mut enemies: Query<
        (
            Entity,
            &EnemyConfig,
            &ThreatMemory,
            &Stun,
            &mut EnemyBrain,
            &mut ActionScheduler,
            &mut Body,
            Option<&mut Weapon>,
            &mut Tint,
        ),
        (With<Enemy>, Without<Dead>, Without<Player>),
    >,
    mut spawns: EventWriter<SpawnRequest>,
    mut cues: EventWriter<CombatCue>,
) {
    let target = players.single().ok().map(|body| body.position);

    for (entity, config, memory, stun, mut brain, mut scheduler, mut body, mut weapon, mut tint) in enemies.iter_mut()
    {
        if stun.is_active() || scheduler.is_performing() {
            continue;
        }

        let perception = target.map(|target_pos| Perception {
            can_see: memory.can_see,
            distance: body.position.distance(target_pos),
        });
        let band = enemy_band(perception, memory, config);

        if brain.last_band != Some(band.kind()) {
            logger::log(&format!("🧠 Enemy {:?} → {:?}", entity, band));
            brain.last_band = Some(band.kind());
        }

        let plan = match band {
            EnemyBand::LongRush => Some(ActionPlan::enemy_lunge(config, true)),
            EnemyBand::Melee => Some(match melee_choice(rng.rng.gen::<f32>()) {
                ActionKind::Swing => ActionPlan::enemy_swing(config),
                _ => ActionPlan::enemy_lunge(config, false),
            }),
            EnemyBand::Approach => {
                if let Some(target_pos) = target {
                    body.face_towards(target_pos);
                }
                body.velocity = body.facing * config.move_speed;
                None
            }
            EnemyBand::Investigate(position) => {
                if body.position.distance(position) <= ARRIVAL_DISTANCE {
                    body.stop();
                } else {
                    body.steer_towards(position, config.move_speed);
                }
                None
            }
            EnemyBand::Idle => {
                body.stop();
                None
            }
        };

        let Some(plan) = plan else {
            continue;
        };

        // Attacks open facing the player; lunges re-aim after the windup
        if let Some(target_pos) = target {
            body.face_towards(target_pos);
        }

        let mut ctx = ActionContext::new(target, spatial.query());
        let mut rig = ActorRig::new(&mut body, weapon.as_deref_mut(), &mut tint);
        scheduler.start(plan, &mut rig, &mut ctx);
        publish_action_events(entity, ctx.events, &mut spawns, &mut cues);
    }
}
