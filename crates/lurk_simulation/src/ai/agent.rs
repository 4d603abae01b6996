//! GuardAgent: конечный автомат одного guard'а
//!
//! Patrol ⇄ Wait по checkpoint'ам, Alert на шум, Chase на взгляд,
//! Attack при контакте.
//!
//! Архитектура:
//! - `tick(delta, ctx)` вызывается внешним game loop'ом раз в simulation step
//! - Collaborators приходят в `GuardContext` (dependency injection, никаких
//!   lookup'ов по типу)
//! - Любое «ожидание»: накопленный `state_timer`, никаких корутин
//! - Переход всегда сбрасывает таймер и сразу пересчитывает скорость,
//!   destination и presentation flags нового состояния

use bevy::prelude::*;

use super::collaborators::GuardContext;
use super::components::{GuardConfig, GuardState};
use super::senses::{destination_reached, hear_target, see_target, timed_out};
use crate::error::ConfigError;

/// Воздействие guard'а на target. Применяется хостом после тика всех
/// guard'ов (world для guard'а read-only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetEffect {
    /// Chase → Attack: target больше не может двигаться
    Restrain,
    /// Удар достиг цели
    Kill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub from: GuardState,
    pub to: GuardState,
}

/// Результат одного тика.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub transition: Option<StateTransition>,
    pub effect: Option<TargetEffect>,
}

/// Что guard воспринял на этом тике.
#[derive(Debug, Clone, Copy, Default)]
struct Perception {
    heard: Option<Vec3>,
    sighted: bool,
}

#[derive(Component, Debug, Clone)]
pub struct GuardAgent {
    config: GuardConfig,
    state: GuardState,
    /// Секунды в текущем состоянии, всегда ≥ 0
    state_timer: f32,
    /// Валиден, пока `config.checkpoints` не пуст
    checkpoint_index: usize,
    last_heard_position: Option<Vec3>,
    /// Секунды с последнего раза, когда target был виден
    time_since_sighted: f32,
    /// Strike event от анимации пришёл в текущем Attack
    strike_landed: bool,
    /// Kill уже выдан в текущем Attack
    strike_resolved: bool,
}

impl GuardAgent {
    pub fn new(config: GuardConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        if config.checkpoints.is_empty() {
            crate::log_warning("GuardAgent: no checkpoints configured, guard will not patrol");
        }

        Ok(Self {
            config,
            state: GuardState::Idle,
            state_timer: 0.0,
            checkpoint_index: 0,
            last_heard_position: None,
            time_since_sighted: 0.0,
            strike_landed: false,
            strike_resolved: false,
        })
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn state_timer(&self) -> f32 {
        self.state_timer
    }

    pub fn checkpoint_index(&self) -> usize {
        self.checkpoint_index
    }

    pub fn current_checkpoint(&self) -> Option<Vec3> {
        self.config.checkpoints.get(self.checkpoint_index).copied()
    }

    pub fn last_heard_position(&self) -> Option<Vec3> {
        self.last_heard_position
    }

    /// Strike event от presentation слоя (hit-кадр анимации удара).
    ///
    /// Принимается только в Attack и только один раз за вход в Attack.
    pub fn land_strike(&mut self) -> bool {
        if self.state != GuardState::Attack || self.strike_landed {
            return false;
        }
        self.strike_landed = true;
        true
    }

    /// Один simulation step.
    pub fn tick(&mut self, delta: f32, ctx: &mut GuardContext<'_>) -> TickOutcome {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.state_timer += delta;

        let perception = self.perceive(ctx);
        if perception.sighted {
            self.time_since_sighted = 0.0;
        } else {
            self.time_since_sighted += delta;
        }
        if let Some(source) = perception.heard {
            self.last_heard_position = Some(source);
        }

        let mut effect = None;
        let next = match self.state {
            GuardState::Idle => Some(if self.config.checkpoints.is_empty() {
                GuardState::Wait
            } else {
                GuardState::Patrol
            }),

            GuardState::Patrol => {
                self.move_to_checkpoint(ctx);
                let reached = destination_reached(ctx.locomotion.as_deref());
                // Checkpoint засчитан, даже если шум/взгляд перебьют Wait
                if reached {
                    self.advance_checkpoint();
                }

                if perception.sighted {
                    Some(GuardState::Chase)
                } else if perception.heard.is_some() {
                    Some(GuardState::Alert)
                } else if reached {
                    Some(GuardState::Wait)
                } else {
                    None
                }
            }

            GuardState::Wait => {
                if perception.sighted {
                    Some(GuardState::Chase)
                } else if perception.heard.is_some() {
                    Some(GuardState::Alert)
                } else if timed_out(self.state_timer, self.config.wait_duration)
                    && !self.config.checkpoints.is_empty()
                {
                    Some(GuardState::Patrol)
                } else {
                    None
                }
            }

            GuardState::Alert => {
                self.move_to_sound(ctx);
                if perception.sighted {
                    Some(GuardState::Chase)
                } else if perception.heard.is_some() {
                    // Новый шум: перезапуск Alert с новым destination
                    Some(GuardState::Alert)
                } else if destination_reached(ctx.locomotion.as_deref()) {
                    Some(GuardState::Wait)
                } else {
                    None
                }
            }

            GuardState::Chase => {
                let target_alive = ctx.target().is_some_and(|target| target.is_alive());
                let gave_up = self
                    .config
                    .lose_sight_timeout
                    .is_some_and(|timeout| self.time_since_sighted >= timeout);

                if !target_alive || gave_up {
                    Some(GuardState::Wait)
                } else {
                    self.move_to_target(ctx);
                    if perception.sighted
                        && destination_reached(ctx.locomotion.as_deref())
                        && timed_out(self.state_timer, self.config.attack_engage_delay)
                    {
                        effect = Some(TargetEffect::Restrain);
                        Some(GuardState::Attack)
                    } else {
                        None
                    }
                }
            }

            GuardState::Attack => {
                let target_alive = ctx.target().is_some_and(|target| target.is_alive());
                let finished = timed_out(self.state_timer, self.config.attack_duration);

                // Без strike event'а (нет анимации) удар засчитывается в конце
                if (self.strike_landed || finished) && !self.strike_resolved {
                    self.strike_resolved = true;
                    if target_alive {
                        effect = Some(TargetEffect::Kill);
                    }
                }

                finished.then_some(GuardState::Wait)
            }
        };

        let transition = next.map(|state| self.change_state(state, ctx));
        TickOutcome { transition, effect }
    }

    fn perceive(&self, ctx: &GuardContext<'_>) -> Perception {
        let Some(locomotion) = ctx.locomotion.as_deref() else {
            return Perception::default();
        };
        let position = locomotion.position();
        let target = ctx.target();

        Perception {
            heard: hear_target(&self.config, position, target),
            sighted: see_target(&self.config, position, locomotion.forward(), target, ctx.trace()),
        }
    }

    fn change_state(&mut self, next: GuardState, ctx: &mut GuardContext<'_>) -> StateTransition {
        let from = self.state;
        self.state = next;
        self.state_timer = 0.0;

        if next == GuardState::Attack {
            self.strike_landed = false;
            self.strike_resolved = false;
        }

        self.apply_locomotion(ctx);
        self.apply_presentation(ctx);

        StateTransition { from, to: next }
    }

    /// Entry action: скорость + destination нового состояния.
    fn apply_locomotion(&self, ctx: &mut GuardContext<'_>) {
        let speed = self
            .state
            .locomotion_speed(self.config.walk_speed, self.config.run_speed);

        match self.state {
            GuardState::Idle | GuardState::Wait | GuardState::Attack => {
                if let Some(locomotion) = ctx.locomotion.as_deref_mut() {
                    locomotion.cancel_movement();
                    locomotion.set_speed(speed);
                }
            }
            GuardState::Patrol => {
                if let Some(locomotion) = ctx.locomotion.as_deref_mut() {
                    locomotion.set_speed(speed);
                }
                self.move_to_checkpoint(ctx);
            }
            GuardState::Alert => {
                if let Some(locomotion) = ctx.locomotion.as_deref_mut() {
                    locomotion.set_speed(speed);
                }
                self.move_to_sound(ctx);
            }
            GuardState::Chase => {
                if let Some(locomotion) = ctx.locomotion.as_deref_mut() {
                    locomotion.set_speed(speed);
                }
                self.move_to_target(ctx);
            }
        }
    }

    /// Entry action: animation flags + attack trigger/audio.
    fn apply_presentation(&self, ctx: &mut GuardContext<'_>) {
        let Some(presentation) = ctx.presentation.as_deref_mut() else {
            return;
        };

        let (moving, alert) = self.state.presentation_flags();
        presentation.reset_attack_trigger();
        presentation.set_moving(moving);
        presentation.set_alert(alert);

        if self.state == GuardState::Attack {
            presentation.trigger_attack();
            // Один раз за вход в Attack
            presentation.play_attack_audio();
            presentation.play_impact_audio();
        }
    }

    fn move_to_checkpoint(&self, ctx: &mut GuardContext<'_>) {
        let Some(checkpoint) = self.current_checkpoint() else {
            return;
        };
        if let Some(locomotion) = ctx.locomotion.as_deref_mut() {
            locomotion.set_destination(checkpoint);
        }
    }

    fn move_to_sound(&self, ctx: &mut GuardContext<'_>) {
        let Some(source) = self.last_heard_position else {
            return;
        };
        if let Some(locomotion) = ctx.locomotion.as_deref_mut() {
            locomotion.set_destination(source);
        }
    }

    /// Перенацеливаемся, пока target воспринимаем; спрятавшийся target
    /// оставляет последний выданный destination.
    fn move_to_target(&self, ctx: &mut GuardContext<'_>) {
        let Some(target) = ctx.target() else {
            return;
        };
        if !target.is_alive() || target.is_hidden() {
            return;
        }
        let position = target.position();
        if let Some(locomotion) = ctx.locomotion.as_deref_mut() {
            locomotion.set_destination(position);
        }
    }

    fn advance_checkpoint(&mut self) {
        let count = self.config.checkpoints.len();
        if count > 0 {
            self.checkpoint_index = (self.checkpoint_index + 1) % count;
        }
    }
}
