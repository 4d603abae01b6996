//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - navigation: locomotion guard'а (NavAgent)
//! - intruder: состояние цели (Intruder, IntruderInput, HidingSpot)
//! - presentation: animator/audio параметры guard'а (GuardAnimator)
//!
//! Сам FSM guard'а (`GuardAgent`) живёт в `crate::ai`.

use bevy::prelude::*;

pub mod intruder;
pub mod navigation;
pub mod presentation;

// Re-exports для удобного импорта
pub use intruder::*;
pub use navigation::*;
pub use presentation::*;

/// Имя guard'а из level файла (для логов).
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct GuardName(pub String);

/// Статичное препятствие уровня (стена, ящик).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Obstacle;
