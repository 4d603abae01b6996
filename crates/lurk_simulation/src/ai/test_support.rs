//! Fake collaborators для unit-тестов guard AI.

use std::cell::Cell;

use bevy::prelude::*;

use super::collaborators::{
    HitTag, Locomotion, PerceptionTarget, PresentationSink, SpatialTrace, TraceHit,
};

/// Locomotion без физики: позиция двигается только вручную (`arrive`).
pub struct FakeLocomotion {
    pub position: Vec3,
    pub forward: Vec3,
    pub destination: Option<Vec3>,
    pub speed: f32,
    pub stopping_distance: f32,
    pub path_pending: bool,
    pub cancel_count: usize,
}

impl FakeLocomotion {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            forward: Vec3::Z,
            destination: None,
            speed: -1.0, // «ни разу не выставлялась»
            stopping_distance: 0.5,
            path_pending: false,
            cancel_count: 0,
        }
    }

    /// Телепорт в текущий destination.
    pub fn arrive(&mut self) {
        if let Some(destination) = self.destination {
            self.position = destination;
        }
    }
}

impl Locomotion for FakeLocomotion {
    fn set_destination(&mut self, position: Vec3) {
        self.destination = Some(position);
    }

    fn cancel_movement(&mut self) {
        self.destination = None;
        self.cancel_count += 1;
    }

    fn remaining_distance(&self) -> f32 {
        self.destination
            .map(|destination| self.position.distance(destination))
            .unwrap_or(0.0)
    }

    fn stopping_distance(&self) -> f32 {
        self.stopping_distance
    }

    fn is_path_pending(&self) -> bool {
        self.path_pending
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }
}

#[derive(Debug, Clone)]
pub struct FakeTarget {
    pub position: Vec3,
    pub forward: Vec3,
    pub alive: bool,
    pub silent: bool,
    pub moving: bool,
    pub hidden: bool,
    pub eye_height: f32,
}

impl FakeTarget {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            forward: Vec3::NEG_Z,
            alive: true,
            silent: false,
            moving: true,
            hidden: false,
            eye_height: 1.6,
        }
    }
}

impl PerceptionTarget for FakeTarget {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn is_silent_posture(&self) -> bool {
        self.silent
    }

    fn is_moving(&self) -> bool {
        self.moving
    }

    fn eye_height_offset(&self) -> f32 {
        self.eye_height
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Raycast с заранее заданным результатом; считает вызовы и запоминает
/// последний луч.
pub struct FakeTrace {
    pub hit: Option<HitTag>,
    pub calls: Cell<usize>,
    pub last_ray: Cell<Option<(Vec3, Vec3)>>,
}

impl FakeTrace {
    fn with_hit(hit: Option<HitTag>) -> Self {
        Self {
            hit,
            calls: Cell::new(0),
            last_ray: Cell::new(None),
        }
    }

    pub fn clear() -> Self {
        Self::with_hit(Some(HitTag::Target))
    }

    pub fn blocked() -> Self {
        Self::with_hit(Some(HitTag::Scenery))
    }

    pub fn miss() -> Self {
        Self::with_hit(None)
    }
}

impl SpatialTrace for FakeTrace {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<TraceHit> {
        self.calls.set(self.calls.get() + 1);
        self.last_ray.set(Some((origin, direction)));
        self.hit.map(|tag| TraceHit {
            tag,
            point: origin + direction * (max_distance * 0.5),
        })
    }
}

#[derive(Debug, Default)]
pub struct FakePresentation {
    pub moving: bool,
    pub alert: bool,
    pub attack_trigger: bool,
    pub trigger_resets: usize,
    pub attack_audio: usize,
    pub impact_audio: usize,
}

impl PresentationSink for FakePresentation {
    fn set_moving(&mut self, moving: bool) {
        self.moving = moving;
    }

    fn set_alert(&mut self, alert: bool) {
        self.alert = alert;
    }

    fn trigger_attack(&mut self) {
        self.attack_trigger = true;
    }

    fn reset_attack_trigger(&mut self) {
        self.attack_trigger = false;
        self.trigger_resets += 1;
    }

    fn play_attack_audio(&mut self) {
        self.attack_audio += 1;
    }

    fn play_impact_audio(&mut self) {
        self.impact_audio += 1;
    }
}
