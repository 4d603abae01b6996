//! Ошибки конфигурации guard'ов и загрузки уровней.
//!
//! Тик FSM никогда не возвращает ошибку: всё, что может сломаться, ловится
//! при создании агента или при разборе уровня.

use std::path::PathBuf;

use thiserror::Error;

/// Невалидный параметр `GuardConfig`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("`{field}` must be finite and non-negative, got {value}")]
    InvalidParameter { field: &'static str, value: f32 },

    #[error("sight angle must be within (0, 360] degrees, got {0}")]
    InvalidSightAngle(f32),

    #[error("checkpoint #{index} has non-finite coordinates")]
    InvalidCheckpoint { index: usize },
}

/// Ошибка загрузки уровня (RON description → ECS world).
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse level description: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("guard `{name}` has invalid configuration: {source}")]
    Guard {
        name: String,
        #[source]
        source: ConfigError,
    },
}
