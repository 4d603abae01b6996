//! AI systems (ECS обвязка вокруг GuardAgent)

pub mod effects;
pub mod guard;

// Re-export all systems
pub use effects::*;
pub use guard::*;
