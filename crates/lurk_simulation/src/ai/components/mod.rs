//! AI components

pub mod config;
pub mod fsm;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod config_tests;

// Re-export all components
pub use config::*;
pub use fsm::*;
