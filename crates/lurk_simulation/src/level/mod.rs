//! Level description (RON) и спавн уровня в ECS world
//!
//! Уровень = guard'ы (имя, поза, GuardConfig) + intruder + препятствия +
//! hiding spots. Векторы в RON записываются как `[x, y, z]`.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::{GuardAgent, GuardConfig};
use crate::components::{
    GuardAnimator, GuardName, HidingSpot, Intruder, IntruderInput, IntruderWander, NavAgent,
    Obstacle,
};
use crate::error::LevelError;
use crate::physics::{intruder_body, obstacle_body};
use crate::shared::vec3_serde;


/// Встроенный demo уровень.
pub const DEMO_LEVEL: &str = include_str!("../../levels/warehouse.ron");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDescription {
    #[serde(default)]
    pub name: String,
    pub guards: Vec<GuardSpawn>,
    pub intruder: IntruderSpawn,
    #[serde(default)]
    pub obstacles: Vec<ObstacleSpawn>,
    #[serde(default, with = "vec3_serde::list")]
    pub hiding_spots: Vec<Vec3>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardSpawn {
    pub name: String,
    #[serde(with = "vec3_serde")]
    pub position: Vec3,
    #[serde(default = "default_facing", with = "vec3_serde")]
    pub facing: Vec3,
    #[serde(default)]
    pub config: GuardConfig,
}

fn default_facing() -> Vec3 {
    Vec3::NEG_Z
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntruderSpawn {
    #[serde(with = "vec3_serde")]
    pub position: Vec3,
    /// Intruder блуждает сам (demo без игрока)
    #[serde(default)]
    pub wander: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpawn {
    #[serde(with = "vec3_serde")]
    pub center: Vec3,
    /// Полные размеры box'а
    #[serde(with = "vec3_serde")]
    pub size: Vec3,
}

/// Entity заспавненного уровня.
#[derive(Debug, Clone)]
pub struct LevelEntities {
    pub guards: Vec<Entity>,
    pub intruder: Entity,
}

impl LevelDescription {
    /// Парсит RON и проверяет конфиги всех guard'ов.
    pub fn from_ron(source: &str) -> Result<Self, LevelError> {
        let level: Self = ron::from_str(source)?;
        level.validate()?;
        Ok(level)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&source)
    }

    pub fn demo() -> Result<Self, LevelError> {
        Self::from_ron(DEMO_LEVEL)
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        for guard in &self.guards {
            guard.config.validate().map_err(|source| LevelError::Guard {
                name: guard.name.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Спавнит уровень. Guard'ы создаются только если все конфиги валидны.
    pub fn spawn(&self, world: &mut World) -> Result<LevelEntities, LevelError> {
        let agents = self
            .guards
            .iter()
            .map(|guard| {
                GuardAgent::new(guard.config.clone()).map_err(|source| LevelError::Guard {
                    name: guard.name.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for obstacle in &self.obstacles {
            world.spawn((Obstacle, obstacle_body(obstacle.center, obstacle.size)));
        }
        for &position in &self.hiding_spots {
            world.spawn(HidingSpot { position });
        }

        let mut intruder = world.spawn((
            Intruder::new(self.intruder.position),
            IntruderInput::default(),
            intruder_body(self.intruder.position),
        ));
        if self.intruder.wander {
            intruder.insert(IntruderWander::default());
        }
        let intruder = intruder.id();

        let guards = self
            .guards
            .iter()
            .zip(agents)
            .map(|(spawn, agent)| {
                world
                    .spawn((
                        GuardName(spawn.name.clone()),
                        agent,
                        NavAgent::new(spawn.position, spawn.facing),
                        GuardAnimator::default(),
                        Transform::from_translation(spawn.position),
                    ))
                    .id()
            })
            .collect();

        crate::log_info(&format!(
            "Level `{}` spawned: {} guards, {} obstacles, {} hiding spots",
            self.name,
            self.guards.len(),
            self.obstacles.len(),
            self.hiding_spots.len()
        ));

        Ok(LevelEntities { guards, intruder })
    }
}
