//! Shared domain: cross-cutting helpers
//!
//! - serde адаптеры для `Vec3` (`[x, y, z]` в RON/JSON)

pub mod vec3_serde;
