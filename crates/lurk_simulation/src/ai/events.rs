//! AI Events: что guard'ы сообщают остальной игре
//!
//! FSM пишет события в `guard_ai_tick`, потребители (presentation, game
//! rules, тесты) читают их через `EventReader`.

use bevy::prelude::*;

use super::agent::TargetEffect;
use super::components::GuardState;

/// Guard сменил состояние (включая рестарт Alert → Alert).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardStateChanged {
    pub guard: Entity,
    pub from: GuardState,
    pub to: GuardState,
}

/// Одна команда presentation слою (Animator/AudioSource в движке).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationCue {
    SetMoving(bool),
    SetAlert(bool),
    TriggerAttack,
    ResetAttackTrigger,
    PlayAttackAudio,
    PlayImpactAudio,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardPresentationEvent {
    pub guard: Entity,
    pub cue: PresentationCue,
}

/// Guard воздействует на intruder'а.
///
/// Применяется `apply_target_effects` после тика всех guard'ов.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetEffectEvent {
    pub guard: Entity,
    pub target: Entity,
    pub effect: TargetEffect,
}

/// Strike event от presentation слоя: hit-кадр анимации удара.
///
/// Хост (движок) шлёт его, когда анимация атаки guard'а дошла до удара.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardStrikeLanded {
    pub guard: Entity,
}
