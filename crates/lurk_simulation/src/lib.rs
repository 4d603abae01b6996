//! Lurk Simulation Core
//!
//! Stealth-симуляция на Bevy 0.16: guard'ы патрулируют, слышат, видят и
//! ловят intruder'а.
//!
//! Слои:
//! - `ai`: engine-agnostic FSM guard'а + collaborator trait'ы + ECS системы
//! - `components` / `physics`: ECS реализации collaborators (NavAgent,
//!   Intruder, GuardAnimator, Rapier raycast)
//! - `level`: RON описание уровня и спавн

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod components;
pub mod error;
pub mod level;
pub mod logger;
pub mod physics;
pub mod shared;

// Re-export базовых типов для удобства
pub use ai::{
    GuardAIPlugin, GuardAgent, GuardConfig, GuardContext, GuardState, GuardStateChanged,
    HearingPolicy, TargetEffect, TargetEffectEvent,
};
pub use components::*;
pub use error::{ConfigError, LevelError};
pub use level::{LevelDescription, LevelEntities};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, log_with_level, set_log_level,
    set_logger, set_logger_if_needed, ConsoleLogger, LogLevel, LogPrinter,
};
pub use physics::LurkPhysicsPlugin;

/// Simulation tick rate (Hz)
pub const TICK_RATE: f64 = 60.0;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(TICK_RATE))
            // Детерминистичный RNG (seed по умолчанию)
            .insert_resource(DeterministicRng::new(42))
            .add_plugins((LurkPhysicsPlugin, GuardAIPlugin));
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
/// Время двигается вручную: каждый `app.update()` = ровно один fixed tick
/// (после первого кадра), поэтому прогоны с одинаковым seed совпадают.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins((MinimalPlugins, TransformPlugin))
        .add_plugins(SimulationPlugin)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / TICK_RATE,
        )));

    app
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

/// Одна точка trace'а guard'а: (имя, состояние, позиция).
#[derive(Debug, Clone, PartialEq)]
pub struct GuardTracePoint {
    pub name: String,
    pub state: GuardState,
    pub position: Vec3,
}

/// Текущие состояния/позиции всех guard'ов, по имени.
pub fn guard_trace(world: &mut World) -> Vec<GuardTracePoint> {
    let mut query = world.query::<(&GuardName, &GuardAgent, &NavAgent)>();
    let mut points: Vec<_> = query
        .iter(world)
        .map(|(name, agent, nav)| GuardTracePoint {
            name: name.0.clone(),
            state: agent.state(),
            position: nav.position,
        })
        .collect();
    points.sort_by(|a, b| a.name.cmp(&b.name));
    points
}
