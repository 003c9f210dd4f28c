//! Perception systems (run once per fixed tick, before decisions).

use bevy::prelude::*;

use super::{AggroChange, AggroGate, BossTargetingChanged, Spatial, ThreatMemory};
use crate::combat::Dead;
use crate::components::{Body, Boss, Enemy, Player};
use crate::config::EnemyConfig;
use crate::logger;

/// Enemy sight + memory update.
pub fn perceive_threats(
    time: Res<Time>,
    spatial: Res<Spatial>,
    players: Query<&Body, (With<Player>, Without<Dead>)>,
    mut enemies: Query<(Entity, &Body, &EnemyConfig, &mut ThreatMemory), (With<Enemy>, Without<Dead>)>,
) {
    let dt = time.delta_secs();
    let target = players.single().ok().map(|body| body.position);

    for (entity, body, config, mut memory) in enemies.iter_mut() {
        let Some(target_pos) = target else {
            memory.forget_tick(dt);
            continue;
        };

        let was_aware = memory.is_aware();
        let perception = memory.evaluate(
            body.position,
            target_pos,
            spatial.query(),
            config.obstacle_mask,
            dt,
        );

        if !was_aware && perception.can_see {
            logger::log(&format!(
                "👁️ {:?} spotted player at {:.1}m (range now {:.1})",
                entity, perception.distance, memory.detection_range
            ));
        } else if was_aware && !memory.is_aware() {
            logger::log(&format!("💤 {:?} lost track of player", entity));
        }
    }
}

/// Boss aggro hysteresis. Losing the target halts the boss in place.
pub fn update_boss_aggro(
    players: Query<&Body, (With<Player>, Without<Dead>, Without<Boss>)>,
    mut bosses: Query<(Entity, &mut Body, &mut AggroGate), (With<Boss>, Without<Dead>, Without<Player>)>,
    mut targeting_events: EventWriter<BossTargetingChanged>,
) {
    let target = players.single().ok().map(|body| body.position);

    for (entity, mut body, mut gate) in bosses.iter_mut() {
        let change = match target {
            Some(target_pos) => gate.update(body.position.distance(target_pos)),
            None => gate.release(),
        };

        let Some(change) = change else {
            continue;
        };

        let targeting = change == AggroChange::Acquired;
        if !targeting {
            body.stop();
        }

        logger::log_info(&format!(
            "🎯 Boss {:?} {}",
            entity,
            if targeting { "acquired target" } else { "disengaged" }
        ));
        targeting_events.write(BossTargetingChanged { boss: entity, targeting });
    }
}
