//! Enemy perception in a running App: sighting, line of sight, memory decay.

use bevy::prelude::*;
use ashen_simulation::config::{EnemyConfig, PlayerConfig};
use ashen_simulation::perception::{ThreatMemory, LAYER_OBSTACLES};
use ashen_simulation::spawn::{enemy_bundle, player_bundle};
use ashen_simulation::*;

fn create_app(spatial: Spatial) -> (App, Entity, Entity) {
    let mut app = create_headless_app(3);
    app.insert_resource(spatial);
    let player = app
        .world_mut()
        .spawn(player_bundle(Vec2::new(0.0, 5.0), &PlayerConfig::default(), &Progression::default()))
        .id();
    let enemy = app
        .world_mut()
        .spawn(enemy_bundle(Vec2::ZERO, &EnemyConfig::default()))
        .id();
    app.update();
    (app, player, enemy)
}

fn memory(app: &App, enemy: Entity) -> ThreatMemory {
    app.world().get::<ThreatMemory>(enemy).cloned().expect("memory")
}

#[test]
fn test_memory_decays_back_to_base_range() {
    let (mut app, player, enemy) = create_app(Spatial::default());

    app.update();
    let seen = memory(&app, enemy);
    assert!(seen.can_see);
    assert_eq!(seen.detection_range, 20.0);
    assert_eq!(seen.last_seen_position, Some(Vec2::new(0.0, 5.0)));

    // Player vanishes far away
    app.world_mut().get_mut::<Body>(player).expect("player").position = Vec2::new(0.0, 100.0);
    run_for(&mut app, 5.0);
    let remembering = memory(&app, enemy);
    assert!(!remembering.can_see);
    assert!(remembering.is_aware());
    assert_eq!(remembering.detection_range, 20.0);
    assert!(remembering.alert_timer > 4.0 && remembering.alert_timer < 5.5);

    run_for(&mut app, 5.5);
    let forgotten = memory(&app, enemy);
    assert!(!forgotten.is_aware());
    assert_eq!(forgotten.alert_timer, 0.0);
    assert_eq!(forgotten.detection_range, 10.0);
}

#[test]
fn test_walls_block_sight() {
    let wall = ObstacleMap::new().with_rect(Vec2::new(-3.0, 2.0), Vec2::new(3.0, 3.0), LAYER_OBSTACLES);
    let (mut app, _player, enemy) = create_app(Spatial::new(wall));

    run_for(&mut app, 0.5);
    let blocked = memory(&app, enemy);
    assert!(!blocked.can_see);
    assert!(!blocked.is_aware());
    assert_eq!(app.world().get::<Body>(enemy).map(|b| b.velocity), Some(Vec2::ZERO));
}

#[test]
fn test_enemy_investigates_last_seen_position() {
    let (mut app, player, enemy) = create_app(Spatial::default());
    // 5 units: walk band
    app.update();

    app.world_mut().get_mut::<Body>(player).expect("player").position = Vec2::new(50.0, 0.0);
    app.update();

    let world = app.world();
    let memory = world.get::<ThreatMemory>(enemy).expect("memory");
    assert!(!memory.can_see);
    let body = world.get::<Body>(enemy).expect("enemy");
    assert!(body.velocity.y > 0.0, "heads for the remembered spot, got {:?}", body.velocity);
}
