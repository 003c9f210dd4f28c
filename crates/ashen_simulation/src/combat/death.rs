//! Death lingering: the body stays for a moment (knockback settles, death
//! animation plays), then the kind-specific follow-up fires once.

use bevy::prelude::*;

use super::events::{BossDefeated, PlayerDefeated, SpawnKind, SpawnRequest};
use super::health::DeathFollowUp;
use crate::components::Body;
use crate::logger;

#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct DeathLinger {
    pub remaining: f32,
    pub follow_up: DeathFollowUp,
}

impl DeathLinger {
    pub fn new(delay: f32, follow_up: DeathFollowUp) -> Self {
        Self {
            remaining: delay.max(0.0),
            follow_up,
        }
    }

    /// Returns true once the delay has run out.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
        self.remaining <= 0.0
    }
}

pub fn tick_death_lingers(
    time: Res<Time>,
    mut commands: Commands,
    mut lingering: Query<(Entity, &Body, &mut DeathLinger)>,
    mut spawns: EventWriter<SpawnRequest>,
    mut boss_defeated: EventWriter<BossDefeated>,
    mut player_defeated: EventWriter<PlayerDefeated>,
) {
    let dt = time.delta_secs();

    for (entity, body, mut linger) in lingering.iter_mut() {
        if !linger.tick(dt) {
            continue;
        }

        match linger.follow_up {
            DeathFollowUp::DropLoot => {
                spawns.write(SpawnRequest {
                    kind: SpawnKind::Loot,
                    position: body.position,
                    source: Some(entity),
                    lifetime: None,
                });
            }
            DeathFollowUp::BossDefeated => {
                logger::log_info(&format!("🏆 Boss {:?} defeated", entity));
                boss_defeated.write(BossDefeated { boss: entity });
            }
            DeathFollowUp::PlayerDefeated => {
                logger::log_info(&format!("☠️ Player {:?} defeated", entity));
                player_defeated.write(PlayerDefeated { player: entity });
            }
            DeathFollowUp::Vanish => {}
        }

        if linger.follow_up.despawns() {
            commands.entity(entity).despawn();
        } else {
            commands.entity(entity).remove::<DeathLinger>();
        }
    }
}
