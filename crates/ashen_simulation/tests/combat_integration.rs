//! Combat integration tests
//!
//! Headless App, один fixed tick на каждый `app.update()`.
//!
//! Проверяем:
//! - смерть врага: velocity 0, оружие выключено, лут ровно один раз, despawn
//! - i-frames игрока
//! - hit flash виден раньше stun tint
//! - stun отменяет текущую атаку

use bevy::prelude::*;
use ashen_simulation::combat::{EnemyVitals, PlayerVitals, Stun};
use ashen_simulation::config::{EnemyConfig, PlayerConfig};
use ashen_simulation::spawn::{enemy_bundle, player_bundle};
use ashen_simulation::*;

#[derive(Resource, Default)]
struct Observed {
    loot: u32,
    died: Vec<Entity>,
    damage: Vec<DamageDealt>,
}

fn observe(
    mut observed: ResMut<Observed>,
    mut spawns: EventReader<SpawnRequest>,
    mut died: EventReader<ActorDied>,
    mut damage: EventReader<DamageDealt>,
) {
    observed.loot += spawns.read().filter(|request| request.kind == SpawnKind::Loot).count() as u32;
    observed.died.extend(died.read().map(|event| event.entity));
    observed.damage.extend(damage.read().copied());
}

/// Helper: App + observer; first update only starts the clock
fn create_combat_app() -> App {
    let mut app = create_headless_app(42);
    app.init_resource::<Observed>().add_systems(Update, observe);
    app.update();
    app
}

fn hit(app: &mut App, target: Entity, amount: i32, source: Vec2) {
    app.world_mut().send_event(HitLanded {
        attacker: None,
        target,
        amount,
        source: Some(source),
    });
    app.update();
}

#[test]
fn test_enemy_dies_after_three_hits_and_drops_loot_once() {
    let mut app = create_combat_app();
    let enemy = app
        .world_mut()
        .spawn(enemy_bundle(Vec2::ZERO, &EnemyConfig::default()))
        .id();

    hit(&mut app, enemy, 1, Vec2::new(-1.0, 0.0));
    hit(&mut app, enemy, 1, Vec2::new(-1.0, 0.0));
    assert!(app.world().get::<Dead>(enemy).is_none());
    assert_eq!(app.world().get::<EnemyVitals>(enemy).map(|v| v.health.current), Some(1));

    hit(&mut app, enemy, 1, Vec2::new(-1.0, 0.0));
    assert!(app.world().get::<Dead>(enemy).is_some());

    let body = app.world().get::<Body>(enemy).expect("body lingers");
    assert_eq!(body.velocity, Vec2::ZERO);
    assert!(body.knockback.x > 0.0, "death knockback pushes away from the source");
    assert!(!app.world().get::<Weapon>(enemy).expect("weapon").enabled);
    assert_eq!(app.world().get::<Tint>(enemy).map(|t| t.current), Some(DEATH_COLOR));

    // Hits on a dead enemy do nothing
    hit(&mut app, enemy, 5, Vec2::ZERO);

    run_for(&mut app, 1.0);

    let observed = app.world().resource::<Observed>();
    assert_eq!(observed.loot, 1);
    assert_eq!(observed.died, vec![enemy]);
    assert_eq!(observed.damage.len(), 3);
    assert!(observed.damage[2].target_died);
    assert!(app.world().get_entity(enemy).is_err(), "enemy despawned after lingering");
}

#[test]
fn test_player_invulnerability_window() {
    let mut app = create_combat_app();
    let player = app
        .world_mut()
        .spawn(player_bundle(Vec2::ZERO, &PlayerConfig::default(), &Progression::default()))
        .id();

    hit(&mut app, player, 1, Vec2::new(0.0, -1.0));
    hit(&mut app, player, 1, Vec2::new(0.0, -1.0));
    assert_eq!(app.world().get::<PlayerVitals>(player).map(|v| v.health.current), Some(2));

    run_for(&mut app, 1.1);
    hit(&mut app, player, 1, Vec2::new(0.0, -1.0));
    assert_eq!(app.world().get::<PlayerVitals>(player).map(|v| v.health.current), Some(1));
}

#[test]
fn test_hit_flash_shows_before_stun_tint() {
    let mut app = create_combat_app();
    let player = app
        .world_mut()
        .spawn(player_bundle(Vec2::ZERO, &PlayerConfig::default(), &Progression::default()))
        .id();
    // Far outside detect range so the enemy stays idle
    let enemy = app
        .world_mut()
        .spawn(enemy_bundle(Vec2::new(50.0, 0.0), &EnemyConfig::default()))
        .id();

    hit(&mut app, player, 1, Vec2::new(0.0, -1.0));
    hit(&mut app, enemy, 1, Vec2::new(49.0, 0.0));

    let world = app.world();
    assert_eq!(world.get::<Tint>(player).map(|t| t.current), Some(HIT_FLASH_COLOR));
    assert_eq!(world.get::<Tint>(enemy).map(|t| t.current), Some(HIT_FLASH_COLOR));
    let lock = world.get::<Stun>(player).copied().expect("stun");
    assert!(lock.is_active() && !lock.tinted, "player gets a bare control lock");
    assert!(world.get::<Stun>(enemy).is_some_and(|stun| stun.shows_tint()));

    // Flash (0.1 s) over: enemy still stunned (0.25 s), player lock untinted
    run_for(&mut app, 0.1);
    let world = app.world();
    assert_eq!(world.get::<Tint>(enemy).map(|t| t.current), Some(STUN_COLOR));
    assert!(world.get::<Tint>(player).is_some_and(|t| t.is_baseline()));

    run_for(&mut app, 0.3);
    assert!(app.world().get::<Tint>(enemy).is_some_and(|t| t.is_baseline()));
    assert!(app.world().get::<Stun>(enemy).is_some_and(|stun| !stun.is_active()));
}

#[test]
fn test_player_death_keeps_entity() {
    let mut app = create_combat_app();
    let player = app
        .world_mut()
        .spawn(player_bundle(Vec2::ZERO, &PlayerConfig::default(), &Progression::default()))
        .id();

    hit(&mut app, player, 10, Vec2::X);
    assert!(app.world().get::<Dead>(player).is_some());

    run_for(&mut app, 2.5);
    assert!(app.world().get_entity(player).is_ok());
    assert_eq!(app.world().resource::<Observed>().loot, 0);
}

#[test]
fn test_stun_request_cancels_attack() {
    let mut app = create_combat_app();
    app.world_mut()
        .spawn(player_bundle(Vec2::new(0.0, 1.5), &PlayerConfig::default(), &Progression::default()));
    let enemy = app
        .world_mut()
        .spawn(enemy_bundle(Vec2::ZERO, &EnemyConfig::default()))
        .id();

    // Sees the player in melee range → swing or short lunge
    app.update();
    assert!(app
        .world()
        .get::<ActionScheduler>(enemy)
        .is_some_and(|scheduler| scheduler.is_performing()));

    app.world_mut().send_event(StunRequest {
        target: enemy,
        duration: 2.0,
    });
    app.update();

    let world = app.world();
    assert!(!world.get::<ActionScheduler>(enemy).expect("scheduler").is_performing());
    assert!(world.get::<Stun>(enemy).expect("stun").is_active());
    assert!(!world.get::<Weapon>(enemy).expect("weapon").enabled);
    assert_eq!(world.get::<Tint>(enemy).map(|t| t.current), Some(STUN_COLOR));
    assert_eq!(world.get::<Body>(enemy).map(|b| b.velocity), Some(Vec2::ZERO));
}
