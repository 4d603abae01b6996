//! Collaborator interfaces для guard AI
//!
//! AI core ничего не знает про движок: движение, восприятие, raycast и
//! анимация/звук приходят через эти trait'ы. Хост (ECS, тесты, другой движок)
//! собирает `GuardContext` и передаёт его в `GuardAgent::tick`.
//!
//! Любой collaborator может отсутствовать (`None`): сенсоры тогда
//! возвращают `false`, действия становятся no-op.

use bevy::prelude::*;

/// Движение к точке по проходимой поверхности (аналог NavMeshAgent).
pub trait Locomotion {
    fn set_destination(&mut self, position: Vec3);
    fn cancel_movement(&mut self);
    /// Оставшаяся длина пути до destination.
    fn remaining_distance(&self) -> f32;
    /// Порог, ниже которого destination считается достигнутым.
    fn stopping_distance(&self) -> f32;
    fn is_path_pending(&self) -> bool;
    fn set_speed(&mut self, speed: f32);
    /// Текущая позиция тела guard'а.
    fn position(&self) -> Vec3;
    /// Направление взгляда guard'а (не обязательно нормализовано).
    fn forward(&self) -> Vec3;
}

/// Отслеживаемый target (игрок).
pub trait PerceptionTarget {
    fn position(&self) -> Vec3;
    fn forward(&self) -> Vec3;
    fn is_alive(&self) -> bool;
    /// Stealth/crouch поза: шагов не слышно.
    fn is_silent_posture(&self) -> bool;
    fn is_moving(&self) -> bool;
    /// Высота глаз guard'а над его позицией при взгляде на этот target
    /// (ниже, когда target пригнулся).
    fn eye_height_offset(&self) -> f32;
    /// Target спрятался (hiding spot): не виден и не слышен.
    fn is_hidden(&self) -> bool {
        false
    }
}

/// Во что попал луч.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTag {
    /// Отслеживаемый target
    Target,
    /// Стены, ящики, всё остальное
    Scenery,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceHit {
    pub tag: HitTag,
    pub point: Vec3,
}

/// Raycast сервис (physics engine).
pub trait SpatialTrace {
    /// `direction` нормализован. Возвращает ближайшее попадание.
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<TraceHit>;
}

/// Read-only мир с точки зрения guard'а: target + raycast.
pub trait PerceptionWorld {
    fn target(&self) -> Option<&dyn PerceptionTarget>;
    fn trace(&self) -> Option<&dyn SpatialTrace>;
}

/// Анимация/звук guard'а.
pub trait PresentationSink {
    fn set_moving(&mut self, moving: bool);
    fn set_alert(&mut self, alert: bool);
    fn trigger_attack(&mut self);
    fn reset_attack_trigger(&mut self);
    fn play_attack_audio(&mut self);
    fn play_impact_audio(&mut self);
}

/// Collaborators одного guard'а на один тик.
///
/// Locomotion и presentation принадлежат guard'у (mutable), perception
/// world общий для всех guard'ов (shared, read-only).
#[derive(Default)]
pub struct GuardContext<'a> {
    pub locomotion: Option<&'a mut dyn Locomotion>,
    pub presentation: Option<&'a mut dyn PresentationSink>,
    pub world: Option<&'a dyn PerceptionWorld>,
}

impl<'a> GuardContext<'a> {
    pub fn new(
        locomotion: &'a mut dyn Locomotion,
        presentation: &'a mut dyn PresentationSink,
        world: &'a dyn PerceptionWorld,
    ) -> Self {
        Self {
            locomotion: Some(locomotion),
            presentation: Some(presentation),
            world: Some(world),
        }
    }

    pub fn target(&self) -> Option<&'a dyn PerceptionTarget> {
        self.world.and_then(|world| world.target())
    }

    pub fn trace(&self) -> Option<&'a dyn SpatialTrace> {
        self.world.and_then(|world| world.trace())
    }
}

/// Простейший `PerceptionWorld`: пара ссылок.
///
/// ECS собирает его раз в тик из snapshot'а intruder'а и raycast'а.
#[derive(Clone, Copy, Default)]
pub struct SceneView<'a> {
    pub target: Option<&'a dyn PerceptionTarget>,
    pub trace: Option<&'a dyn SpatialTrace>,
}

impl PerceptionWorld for SceneView<'_> {
    fn target(&self) -> Option<&dyn PerceptionTarget> {
        self.target
    }

    fn trace(&self) -> Option<&dyn SpatialTrace> {
        self.trace
    }
}
