//! Shockwave expansion + player contact.

use bevy::prelude::*;

use crate::ai::components::Shockwave;
use crate::combat::{Dead, HitLanded};
use crate::components::{Body, Player};

pub fn tick_shockwaves(
    time: Res<Time>,
    mut commands: Commands,
    mut shockwaves: Query<(Entity, &mut Shockwave)>,
    players: Query<(Entity, &Body), (With<Player>, Without<Dead>)>,
    mut hits: EventWriter<HitLanded>,
) {
    let dt = time.delta_secs();

    for (entity, mut shockwave) in shockwaves.iter_mut() {
        let expired = shockwave.tick(dt);

        if !shockwave.has_hit {
            if let Some((player, body)) = players.iter().find(|(_, body)| shockwave.reaches(body.position, body.radius)) {
                shockwave.has_hit = true;
                hits.write(HitLanded {
                    attacker: shockwave.source,
                    target: player,
                    amount: shockwave.damage,
                    source: Some(shockwave.center),
                });
            }
        }

        if expired {
            commands.entity(entity).despawn();
        }
    }
}
