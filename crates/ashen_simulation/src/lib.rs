//! Ashen Simulation Core
//!
//! ECS-симуляция на Bevy 0.16: combat AI и health/stun loop для 2D
//! action-RPG. Рендер, анимации, звук и UI живут в движке; ядро только
//! читает позиции/контакты и публикует события.
//!
//! Pipeline одного fixed tick:
//! hits → perception → phases → decision → actions → status → physics → cleanup

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod action;
pub mod ai;
pub mod combat;
pub mod components;
pub mod config;
pub mod logger;
pub mod perception;
pub mod physics;
pub mod spawn;

// Re-export базовых типов для удобства
pub use action::{ActionKind, ActionPlan, ActionPlugin, ActionScheduler, ActionSignal, ActionSignalEvent};
pub use ai::{AIPlugin, BossPhase, BossPhaseTracker, PhaseTransitioned};
pub use combat::{
    ActorDied, BossDefeated, CombatCue, CombatPlugin, CueKind, DamageDealt, Dead, HitLanded, PlayerDefeated,
    SpawnKind, SpawnRequest, StunRequest,
};
pub use components::*;
pub use config::{CombatTuning, Progression};
pub use logger::{init_logger, log, log_error, log_info, log_warning, LogLevel, LogPrinter};
pub use perception::{BossTargetingChanged, ObstacleMap, PerceptionPlugin, Spatial};
pub use physics::HeadlessPhysicsPlugin;

/// Simulation tick rate (FixedUpdate)
pub const TICK_HZ: f64 = 60.0;

/// Порядок фаз внутри одного fixed tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Hits and stun requests collected during the previous tick
    Hits,
    Perception,
    Phases,
    Decision,
    Actions,
    /// Status timers, phase hazards
    Status,
    Physics,
    /// Death lingering, despawns
    Cleanup,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Hits,
                SimulationSet::Perception,
                SimulationSet::Phases,
                SimulationSet::Decision,
                SimulationSet::Actions,
                SimulationSet::Status,
                SimulationSet::Physics,
                SimulationSet::Cleanup,
            )
                .chain(), // Последовательное выполнение для детерминизма
        );

        app.insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .init_resource::<Progression>()
            .init_resource::<CombatTuning>();

        // Детерминистичный RNG (seed по умолчанию, если не задан снаружи)
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        // Подсистемы
        app.add_plugins((CombatPlugin, PerceptionPlugin, AIPlugin, ActionPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Каждый `app.update()` продвигает время ровно на один fixed tick
/// (первый update только инициализирует часы).
pub fn create_headless_app(seed: u64) -> App {
    init_logger();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(tick_duration()))
        .add_plugins((SimulationPlugin, HeadlessPhysicsPlugin));

    app
}

pub fn tick_duration() -> Duration {
    Duration::from_secs_f64(1.0 / TICK_HZ)
}

/// Runs enough updates to cover `seconds` of simulated time.
pub fn run_for(app: &mut App, seconds: f32) {
    let ticks = (seconds.max(0.0) as f64 * TICK_HZ).ceil() as u32;
    for _ in 0..ticks {
        app.update();
    }
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
