//! Headless arena: player vs boss + two enemies
//!
//! Запускает Bevy App без рендера; игрок управляется простым скриптом.
//! Usage: ashen_simulation [seed] [tuning.json]

use bevy::prelude::*;

use ashen_simulation::ai::BossPhaseTracker;
use ashen_simulation::combat::{BossVitals, PlayerVitals};
use ashen_simulation::config::CombatTuning;
use ashen_simulation::perception::{ObstacleMap, Spatial, LAYER_OBSTACLES};
use ashen_simulation::physics::MovementInput;
use ashen_simulation::spawn::{boss_bundle, enemy_bundle, player_bundle};
use ashen_simulation::logger::{set_log_level, LogLevel};
use ashen_simulation::{create_headless_app, log_error, log_info, Body, Boss, Player, Progression, Weapon, TICK_HZ};

/// Script: swing every this many ticks, surface on for `SWING_TICKS`
const SWING_PERIOD_TICKS: u32 = 30;
const SWING_TICKS: u32 = 6;
const MAX_SECONDS: u32 = 120;

fn load_tuning(path: Option<String>) -> CombatTuning {
    let Some(path) = path else {
        return CombatTuning::default();
    };

    match std::fs::read_to_string(&path) {
        Ok(json) => CombatTuning::from_json(&json).unwrap_or_else(|err| {
            log_error(&format!("Invalid tuning {}: {}", path, err));
            CombatTuning::default()
        }),
        Err(err) => {
            log_error(&format!("Cannot read {}: {}", path, err));
            CombatTuning::default()
        }
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(42);
    let tuning = load_tuning(args.next());
    let progression = Progression::default();

    println!("Starting Ashen headless arena (seed: {})", seed);

    let mut app = create_headless_app(seed);
    // Per-tick debug lines drown the arena report
    set_log_level(LogLevel::Info);
    app.insert_resource(tuning.clone());
    app.insert_resource(Spatial::new(
        ObstacleMap::new()
            .with_circle(Vec2::new(-4.0, 0.0), 1.0, LAYER_OBSTACLES)
            .with_rect(Vec2::new(3.0, -2.0), Vec2::new(5.0, -1.0), LAYER_OBSTACLES),
    ));

    let world = app.world_mut();
    world.spawn(player_bundle(Vec2::new(0.0, -9.0), &tuning.player, &progression));
    world.spawn(boss_bundle(Vec2::new(0.0, 4.0), &tuning.boss, &progression));
    world.spawn(enemy_bundle(Vec2::new(-6.0, -4.0), &tuning.enemy));
    world.spawn(enemy_bundle(Vec2::new(6.0, -5.0), &tuning.enemy));

    let total_ticks = MAX_SECONDS * TICK_HZ as u32;
    for tick in 0..total_ticks {
        drive_player(app.world_mut(), tick);
        app.update();

        let world = app.world_mut();
        let player_dead = world
            .query_filtered::<&PlayerVitals, With<Player>>()
            .iter(world)
            .all(|vitals| vitals.dead);
        let boss = world
            .query_filtered::<(&BossVitals, &BossPhaseTracker), With<Boss>>()
            .iter(world)
            .next()
            .map(|(vitals, tracker)| (vitals.health, tracker.phase));

        if tick % (5 * TICK_HZ as u32) == 0 {
            let entity_count = world.entities().len();
            println!("Tick {}: {} entities, boss {:?}", tick, entity_count, boss);
        }

        if player_dead {
            log_info(&format!("Player fell at tick {}", tick));
            break;
        }
        if boss.is_none() {
            log_info(&format!("Boss gone at tick {}", tick));
            break;
        }
    }

    println!("Simulation complete!");
}

/// Walk at the boss, swing periodically.
fn drive_player(world: &mut World, tick: u32) {
    let boss_position = world
        .query_filtered::<&Body, With<Boss>>()
        .iter(world)
        .next()
        .map(|body| body.position);

    let mut players = world.query_filtered::<(&Body, &mut MovementInput, &mut Weapon), With<Player>>();
    for (body, mut input, mut weapon) in players.iter_mut(world) {
        let Some(target) = boss_position else {
            input.direction = Vec2::ZERO;
            weapon.set_enabled(false);
            continue;
        };

        let to_boss = target - body.position;
        input.direction = if to_boss.length() > 1.6 { to_boss } else { Vec2::ZERO };
        weapon.set_enabled(tick % SWING_PERIOD_TICKS < SWING_TICKS && to_boss.length() < 3.0);
    }
}
