//! Navigation компоненты: NavAgent (locomotion guard'а в ECS)
//!
//! Straight-line planner: путь до destination строится мгновенно (никаких
//! pending путей), тело двигается по прямой со скоростью `speed`.
//! Transform синхронизируется из NavAgent системой `advance_nav_agents`.

use bevy::prelude::*;

use crate::ai::collaborators::Locomotion;

/// Locomotion одного guard'а (аналог NavMeshAgent).
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct NavAgent {
    pub position: Vec3,
    /// Горизонтальное направление взгляда (normalized)
    pub facing: Vec3,
    pub destination: Option<Vec3>,
    /// Текущая скорость (m/s), выставляется FSM на входе в состояние
    pub speed: f32,
    /// Дистанция, ближе которой destination считается достигнутым
    pub stopping_distance: f32,
}

impl NavAgent {
    pub fn new(position: Vec3, facing: Vec3) -> Self {
        Self {
            position,
            facing: horizontal(facing).unwrap_or(Vec3::NEG_Z),
            destination: None,
            speed: 0.0,
            stopping_distance: 0.5,
        }
    }

    /// Двигает тело к destination на `speed * delta`, не перелетая цель.
    ///
    /// Поворачивает facing в сторону движения. Возвращает пройденное расстояние.
    pub fn step(&mut self, delta: f32) -> f32 {
        let Some(destination) = self.destination else {
            return 0.0;
        };
        if self.speed <= 0.0 || delta <= 0.0 {
            return 0.0;
        }

        let offset = destination - self.position;
        let remaining = offset.length();
        if remaining < self.stopping_distance * 0.5 {
            return 0.0;
        }

        let travel = (self.speed * delta).min(remaining);
        self.position += offset / remaining * travel;

        if let Some(direction) = horizontal(offset) {
            self.facing = direction;
        }

        travel
    }

    pub fn is_moving(&self) -> bool {
        self.speed > 0.0 && self.remaining_distance() >= self.stopping_distance * 0.5
    }
}

/// Проекция на XZ плоскость (None для вертикального/нулевого вектора).
fn horizontal(vector: Vec3) -> Option<Vec3> {
    Vec3::new(vector.x, 0.0, vector.z).try_normalize()
}

impl Locomotion for NavAgent {
    fn set_destination(&mut self, position: Vec3) {
        self.destination = Some(position);
    }

    fn cancel_movement(&mut self) {
        self.destination = None;
    }

    fn remaining_distance(&self) -> f32 {
        self.destination
            .map_or(0.0, |destination| self.position.distance(destination))
    }

    fn stopping_distance(&self) -> f32 {
        self.stopping_distance
    }

    fn is_path_pending(&self) -> bool {
        false
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.facing
    }
}
