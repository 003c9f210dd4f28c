//! Tests for headless contacts.

#[cfg(test)]
mod tests {
    use super::super::contacts::{detect_weapon_hits, weapon_overlaps};
    use crate::combat::{Dead, HitLanded};
    use crate::components::{Body, Faction, Weapon};
    use bevy::prelude::*;

    #[test]
    fn test_weapon_tip_follows_facing() {
        let attacker = Body::new(Vec2::ZERO, 0.4);
        let weapon = Weapon::new(1, 1.0, 0.5);

        // Facing +Y by default
        assert!(weapon_overlaps(&weapon, &attacker, &Body::new(Vec2::new(0.0, 1.5), 0.4)));
        assert!(!weapon_overlaps(&weapon, &attacker, &Body::new(Vec2::new(0.0, -1.5), 0.4)));
    }

    fn drain_hits(app: &mut App) -> Vec<HitLanded> {
        app.world_mut().resource_mut::<Events<HitLanded>>().drain().collect()
    }

    #[test]
    fn test_detect_weapon_hits_filters_targets() {
        let mut app = App::new();
        app.add_event::<HitLanded>().add_systems(Update, detect_weapon_hits);

        // Short reach: the tip circle also covers the attacker's own body
        let mut sword = Weapon::new(2, 0.5, 0.5);
        sword.set_enabled(true);
        let player = app
            .world_mut()
            .spawn((Body::new(Vec2::ZERO, 0.4), Faction::Player, sword))
            .id();

        // Facing the player, weapon off
        let mut enemy_body = Body::new(Vec2::new(0.0, 1.0), 0.4);
        enemy_body.facing = Vec2::NEG_Y;
        let enemy = app
            .world_mut()
            .spawn((enemy_body, Faction::Hostile, Weapon::new(1, 0.5, 0.5)))
            .id();

        // Overlapping but friendly or already dead
        app.world_mut()
            .spawn((Body::new(Vec2::new(0.3, 0.6), 0.4), Faction::Player));
        app.world_mut()
            .spawn((Body::new(Vec2::new(-0.3, 0.8), 0.4), Faction::Hostile, Dead));

        app.update();
        let hits = drain_hits(&mut app);
        assert_eq!(hits.len(), 1, "{hits:?}");
        assert_eq!(hits[0].attacker, Some(player));
        assert_eq!(hits[0].target, enemy);
        assert_eq!(hits[0].amount, 2);
        assert_eq!(hits[0].source, Some(Vec2::ZERO));

        // Same activation: no second hit on the same target
        app.update();
        assert!(drain_hits(&mut app).is_empty());
    }
}
