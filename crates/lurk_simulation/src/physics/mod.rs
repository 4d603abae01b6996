//! Physics simulation module
//!
//! Kinematic движение guard'ов/intruder'а и raycast'ы через Rapier.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

pub mod movement;
pub mod trace;

// Re-export основных типов
pub use movement::{
    advance_nav_agents, drive_intruders, intruder_body, obstacle_body, wander_intruders,
    BODY_CENTER_HEIGHT,
};
pub use trace::RapierTrace;

/// Rapier в fixed schedule: query pipeline обновляется в том же 60Hz шаге,
/// что и AI, поэтому raycast'ы детерминированы.
pub struct LurkPhysicsPlugin;

impl Plugin for LurkPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule());
    }
}
