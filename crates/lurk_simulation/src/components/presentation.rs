//! GuardAnimator: presentation sink guard'а в ECS
//!
//! Хранит текущие animator параметры и копит cue'ы за тик;
//! `guard_ai_tick` выгружает их в `GuardPresentationEvent`.

use bevy::prelude::*;

use crate::ai::collaborators::PresentationSink;
use crate::ai::events::PresentationCue;

#[derive(Component, Debug, Clone, Default)]
pub struct GuardAnimator {
    pub moving: bool,
    pub alert: bool,
    pub attack_triggered: bool,
    pending: Vec<PresentationCue>,
}

impl GuardAnimator {
    /// Забрать накопленные cue'ы (в порядке вызова).
    pub fn drain_cues(&mut self) -> impl Iterator<Item = PresentationCue> + '_ {
        self.pending.drain(..)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl PresentationSink for GuardAnimator {
    fn set_moving(&mut self, moving: bool) {
        self.moving = moving;
        self.pending.push(PresentationCue::SetMoving(moving));
    }

    fn set_alert(&mut self, alert: bool) {
        self.alert = alert;
        self.pending.push(PresentationCue::SetAlert(alert));
    }

    fn trigger_attack(&mut self) {
        self.attack_triggered = true;
        self.pending.push(PresentationCue::TriggerAttack);
    }

    fn reset_attack_trigger(&mut self) {
        self.attack_triggered = false;
        self.pending.push(PresentationCue::ResetAttackTrigger);
    }

    fn play_attack_audio(&mut self) {
        self.pending.push(PresentationCue::PlayAttackAudio);
    }

    fn play_impact_audio(&mut self) {
        self.pending.push(PresentationCue::PlayImpactAudio);
    }
}
