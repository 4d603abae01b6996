//! Guard configuration (per-guard, задаётся при спавне)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Что считается «шумом» для слуха guard'а.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum HearingPolicy {
    /// Слышим только движущийся target вне stealth-позы
    #[default]
    MovementNoise,
    /// Слышим любой target вне stealth-позы, даже стоящий
    AnyPresence,
}

/// Параметры guard'а.
///
/// Дефолты: walk 2 м/с, run 4 м/с, wait 5 с, hearing 5 м, sight 10 м / 120°.
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Циклический маршрут патруля (world coordinates)
    #[serde(with = "crate::shared::vec3_serde::list")]
    pub checkpoints: Vec<Vec3>,
    /// Скорость в Patrol/Alert (м/с)
    pub walk_speed: f32,
    /// Скорость в Chase (м/с)
    pub run_speed: f32,
    /// Сколько стоим в Wait (секунды)
    pub wait_duration: f32,
    /// Радиус слуха (метры)
    pub hearing_range: f32,
    /// Дальность зрения (метры)
    pub sight_range: f32,
    /// Полный угол конуса зрения (градусы)
    pub sight_angle_degrees: f32,
    /// Минимальное время в Chase перед ударом (секунды)
    pub attack_engage_delay: f32,
    /// Длительность удара; по истечении Attack → Wait (секунды)
    pub attack_duration: f32,
    pub hearing_policy: HearingPolicy,
    /// Бросить погоню, если target не виден столько секунд. `None`: никогда.
    pub lose_sight_timeout: Option<f32>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            checkpoints: Vec::new(),
            walk_speed: 2.0,
            run_speed: 4.0,
            wait_duration: 5.0,
            hearing_range: 5.0,
            sight_range: 10.0,
            sight_angle_degrees: 120.0,
            attack_engage_delay: 0.3,
            attack_duration: 1.2,
            hearing_policy: HearingPolicy::MovementNoise,
            lose_sight_timeout: None,
        }
    }
}

impl GuardConfig {
    pub fn with_checkpoints(mut self, checkpoints: impl IntoIterator<Item = Vec3>) -> Self {
        self.checkpoints = checkpoints.into_iter().collect();
        self
    }

    /// Проверяет числовые параметры.
    ///
    /// Пустой список checkpoint'ов ошибкой не считается: guard просто не
    /// патрулирует (см. `GuardAgent`).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parameters = [
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("wait_duration", self.wait_duration),
            ("hearing_range", self.hearing_range),
            ("sight_range", self.sight_range),
            ("attack_engage_delay", self.attack_engage_delay),
            ("attack_duration", self.attack_duration),
        ];
        for (field, value) in parameters {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter { field, value });
            }
        }

        if let Some(timeout) = self.lose_sight_timeout {
            if !timeout.is_finite() || timeout < 0.0 {
                return Err(ConfigError::InvalidParameter {
                    field: "lose_sight_timeout",
                    value: timeout,
                });
            }
        }

        let angle = self.sight_angle_degrees;
        if !angle.is_finite() || angle <= 0.0 || angle > 360.0 {
            return Err(ConfigError::InvalidSightAngle(angle));
        }

        if let Some(index) = self.checkpoints.iter().position(|p| !p.is_finite()) {
            return Err(ConfigError::InvalidCheckpoint { index });
        }

        Ok(())
    }

    /// Половина угла обзора в радианах.
    pub fn half_sight_angle(&self) -> f32 {
        (self.sight_angle_degrees * 0.5).to_radians()
    }
}
