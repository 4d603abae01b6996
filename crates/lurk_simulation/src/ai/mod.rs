//! Guard AI module
//!
//! FSM стражи (Idle/Patrol/Wait/Alert/Chase/Attack), сенсоры и
//! collaborator trait'ы. Core (`agent`, `senses`) не зависит от ECS;
//! `systems` связывают его с компонентами и Rapier.

use bevy::prelude::*;

pub mod agent;
pub mod collaborators;
pub mod components;
pub mod events;
pub mod senses;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod senses_tests;

// Re-export основных типов
pub use agent::{GuardAgent, StateTransition, TargetEffect, TickOutcome};
pub use collaborators::{
    GuardContext, HitTag, Locomotion, PerceptionTarget, PerceptionWorld, PresentationSink,
    SceneView, SpatialTrace, TraceHit,
};
pub use components::{GuardConfig, GuardState, HearingPolicy};
pub use events::{
    GuardPresentationEvent, GuardStateChanged, GuardStrikeLanded, PresentationCue,
    TargetEffectEvent,
};

/// Guard AI Plugin
///
/// Регистрирует AI системы в FixedUpdate для детерминизма.
/// Порядок выполнения:
/// 1. wander_intruders: demo intruder выбирает направление
/// 2. drive_intruders: intruder двигается, прячется, переключает stealth
/// 3. guard_ai_tick: FSM всех guard'ов на одном snapshot'е intruder'а
/// 4. apply_target_effects: restrain/kill
/// 5. advance_nav_agents: guard'ы идут к своим destination
pub struct GuardAIPlugin;

impl Plugin for GuardAIPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<GuardStateChanged>()
            .add_event::<GuardPresentationEvent>()
            .add_event::<TargetEffectEvent>()
            .add_event::<GuardStrikeLanded>()
            .add_systems(
                FixedUpdate,
                (
                    crate::physics::wander_intruders,
                    crate::physics::drive_intruders,
                    systems::guard_ai_tick,
                    systems::apply_target_effects,
                    crate::physics::advance_nav_agents,
                )
                    .chain(), // Последовательное выполнение для детерминизма
            );
    }
}
