//! Weapon overlap detection for headless runs.
//!
//! The engine reports trigger contacts itself; without an engine, enabled
//! weapon circles are tested against bodies of the opposing faction.

use bevy::prelude::*;

use crate::combat::{Dead, HitLanded};
use crate::components::{Body, Faction, Weapon};

/// Weapon tip circle overlaps the target body.
pub fn weapon_overlaps(weapon: &Weapon, attacker: &Body, target: &Body) -> bool {
    weapon.tip(attacker).distance(target.position) <= weapon.radius + target.radius
}

pub fn detect_weapon_hits(
    mut attackers: Query<(Entity, &Body, &Faction, &mut Weapon), Without<Dead>>,
    targets: Query<(Entity, &Body, &Faction), Without<Dead>>,
    mut hits: EventWriter<HitLanded>,
) {
    for (attacker, attacker_body, attacker_faction, mut weapon) in attackers.iter_mut() {
        if !weapon.enabled {
            continue;
        }

        for (target, target_body, target_faction) in targets.iter() {
            if target == attacker || !attacker_faction.is_hostile_to(*target_faction) {
                continue;
            }
            if !weapon_overlaps(&weapon, attacker_body, target_body) || !weapon.register_hit(target) {
                continue;
            }

            hits.write(HitLanded {
                attacker: Some(attacker),
                target,
                amount: weapon.damage,
                source: Some(attacker_body.position),
            });
        }
    }
}
