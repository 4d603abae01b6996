//! Guard FSM tick system.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::ai::agent::GuardAgent;
use crate::ai::collaborators::{GuardContext, PerceptionTarget, SceneView, SpatialTrace};
use crate::ai::events::{
    GuardPresentationEvent, GuardStateChanged, GuardStrikeLanded, TargetEffectEvent,
};
use crate::components::{GuardAnimator, GuardName, Intruder, NavAgent};
use crate::physics::RapierTrace;

/// Система: один simulation step для всех guard'ов
///
/// 1. Strike event'ы от анимации → `GuardAgent::land_strike`
/// 2. Snapshot intruder'а + Rapier raycast → общий `SceneView`
/// 3. `tick` каждого guard'а со своим NavAgent/GuardAnimator
/// 4. Переходы, cue'ы и воздействия на target → события
///
/// Intruder здесь только читается; воздействия применяет
/// `apply_target_effects` следующим шагом.
#[allow(clippy::too_many_arguments)]
pub fn guard_ai_tick(
    mut guards: Query<(
        Entity,
        &mut GuardAgent,
        &mut NavAgent,
        &mut GuardAnimator,
        Option<&GuardName>,
    )>,
    intruders: Query<(Entity, &Intruder)>,
    rapier_context: ReadRapierContext,
    mut strikes: EventReader<GuardStrikeLanded>,
    mut state_events: EventWriter<GuardStateChanged>,
    mut cue_events: EventWriter<GuardPresentationEvent>,
    mut effect_events: EventWriter<TargetEffectEvent>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for strike in strikes.read() {
        if let Ok((_, mut agent, ..)) = guards.get_mut(strike.guard) {
            if !agent.land_strike() {
                crate::log(&format!(
                    "Guard {:?}: strike ignored in {}",
                    strike.guard,
                    agent.state()
                ));
            }
        }
    }

    let target = intruders.single().ok();
    let target_entity = target.map(|(entity, _)| entity);

    let context = rapier_context.single().ok();
    let trace = context
        .as_ref()
        .map(|context| RapierTrace::new(context, target_entity));

    let view = SceneView {
        target: target.map(|(_, intruder)| intruder as &dyn PerceptionTarget),
        trace: trace.as_ref().map(|trace| trace as &dyn SpatialTrace),
    };

    for (entity, mut agent, mut nav, mut animator, name) in guards.iter_mut() {
        let outcome = {
            let mut ctx = GuardContext::new(&mut *nav, &mut *animator, &view);
            agent.tick(delta, &mut ctx)
        };

        if let Some(transition) = outcome.transition {
            let label = name.map_or_else(|| format!("{:?}", entity), |name| name.0.clone());
            crate::log(&format!(
                "Guard {}: {} → {}",
                label, transition.from, transition.to
            ));
            state_events.write(GuardStateChanged {
                guard: entity,
                from: transition.from,
                to: transition.to,
            });
        }

        if let (Some(effect), Some(target)) = (outcome.effect, target_entity) {
            effect_events.write(TargetEffectEvent {
                guard: entity,
                target,
                effect,
            });
        }

        if animator.has_pending() {
            for cue in animator.drain_cues() {
                cue_events.write(GuardPresentationEvent { guard: entity, cue });
            }
        }
    }
}
