//! Guard FSM состояния.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Поведенческий режим guard'а.
///
/// Idle → Patrol ⇄ Wait, любое «слышу» → Alert, любое «вижу» → Chase,
/// Chase → Attack → Wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub enum GuardState {
    /// Начальное состояние после спавна, покидается на первом тике
    #[default]
    Idle,
    /// Идём к текущему checkpoint'у
    Patrol,
    /// Стоим на месте `wait_duration` секунд
    Wait,
    /// Идём к месту последнего услышанного шума
    Alert,
    /// Бежим за target'ом
    Chase,
    /// Удар (target обездвижен)
    Attack,
}

impl GuardState {
    /// Пара флагов для presentation: (moving, alert).
    pub fn presentation_flags(self) -> (bool, bool) {
        match self {
            GuardState::Idle | GuardState::Wait => (false, false),
            GuardState::Patrol => (true, false),
            GuardState::Alert | GuardState::Chase => (true, true),
            GuardState::Attack => (false, true),
        }
    }

    /// Скорость locomotion для состояния.
    pub fn locomotion_speed(self, walk_speed: f32, run_speed: f32) -> f32 {
        match self {
            GuardState::Patrol | GuardState::Alert => walk_speed,
            GuardState::Chase => run_speed,
            GuardState::Idle | GuardState::Wait | GuardState::Attack => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GuardState::Idle => "Idle",
            GuardState::Patrol => "Patrol",
            GuardState::Wait => "Wait",
            GuardState::Alert => "Alert",
            GuardState::Chase => "Chase",
            GuardState::Attack => "Attack",
        }
    }
}

impl std::fmt::Display for GuardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
