//! Boss escalation systems: threshold checks + the phase 2 hazard loop.

use bevy::prelude::*;
use rand::Rng;

use crate::ai::components::{BossPhase, BossPhaseTracker};
use crate::ai::PhaseTransitioned;
use crate::combat::{BossVitals, CombatCue, CueKind, Dead, SpawnKind, SpawnRequest, Stun};
use crate::components::{Body, Boss, Tint, PHASE2_COLOR, PHASE3_COLOR};
use crate::config::{BossConfig, CombatTuning};
use crate::logger;
use crate::spawn::{shadow_clone_bundle, shockwave_bundle};
use crate::DeterministicRng;

/// System: phase thresholds, checked every tick while the boss lives.
#[allow(clippy::type_complexity)]
pub fn check_boss_phases(
    mut commands: Commands,
    tuning: Res<CombatTuning>,
    mut rng: ResMut<DeterministicRng>,
    mut bosses: Query<
        (Entity, &BossVitals, &Body, &mut BossPhaseTracker, &mut BossConfig, &mut Tint),
        (With<Boss>, Without<Dead>),
    >,
    mut phase_events: EventWriter<PhaseTransitioned>,
    mut spawns: EventWriter<SpawnRequest>,
    mut cues: EventWriter<CombatCue>,
) {
    for (entity, vitals, body, mut tracker, mut config, mut tint) in bosses.iter_mut() {
        if vitals.dead {
            continue;
        }

        for phase in tracker.evaluate(vitals.health.percent()) {
            cues.write(CombatCue {
                entity,
                cue: CueKind::Roar,
            });

            match phase {
                BossPhase::Phase2 => {
                    tint.set_base(PHASE2_COLOR);
                    tracker.start_hazard(config.shockwave_delay, config.shockwave_interval);
                }
                BossPhase::Phase3 => {
                    let spread = config.clone_spawn_spread.abs();
                    for _ in 0..config.clone_count {
                        let offset = if spread > 0.0 {
                            Vec2::new(rng.rng.gen_range(-spread..=spread), rng.rng.gen_range(-spread..=spread))
                        } else {
                            Vec2::ZERO
                        };
                        let position = body.position + offset;

                        commands.spawn(shadow_clone_bundle(position, &tuning.clone));
                        spawns.write(SpawnRequest {
                            kind: SpawnKind::ShadowClone,
                            position,
                            source: Some(entity),
                            lifetime: None,
                        });
                    }

                    tint.set_base(PHASE3_COLOR);
                    let berserk = config.berserk_multiplier;
                    config.move_speed *= berserk;
                    config.charge_speed *= berserk;
                }
                BossPhase::Phase1 => {}
            }

            logger::log_info(&format!(
                "🔥 Boss {:?} entered {:?} at {:.0}% HP",
                entity,
                phase,
                vitals.health.percent() * 100.0
            ));
            phase_events.write(PhaseTransitioned { boss: entity, phase });
        }
    }
}

/// System: recurring shockwaves. A due spawn is skipped while stunned.
pub fn tick_phase_hazards(
    time: Res<Time>,
    mut commands: Commands,
    tuning: Res<CombatTuning>,
    mut bosses: Query<(Entity, &Body, &Stun, &mut BossPhaseTracker), (With<Boss>, Without<Dead>)>,
    mut spawns: EventWriter<SpawnRequest>,
    mut cues: EventWriter<CombatCue>,
) {
    let dt = time.delta_secs();

    for (entity, body, stun, mut tracker) in bosses.iter_mut() {
        if tracker.phase < BossPhase::Phase2 {
            continue;
        }
        let Some(hazard) = tracker.hazard.as_mut() else {
            continue;
        };
        if !hazard.tick(dt) || stun.is_active() {
            continue;
        }

        commands.spawn(shockwave_bundle(body.position, &tuning.shockwave, Some(entity)));
        spawns.write(SpawnRequest {
            kind: SpawnKind::Shockwave,
            position: body.position,
            source: Some(entity),
            lifetime: Some(tuning.shockwave.lifetime),
        });
        cues.write(CombatCue {
            entity,
            cue: CueKind::Shockwave,
        });
        logger::log(&format!("🌊 Boss {:?} shockwave", entity));
    }
}
