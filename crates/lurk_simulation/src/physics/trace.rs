//! SpatialTrace поверх Rapier query pipeline
//!
//! Луч бьёт по всем коллайдерам уровня; попадание в коллайдер intruder'а
//! помечается `HitTag::Target`, всё остальное: `HitTag::Scenery`.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::ai::collaborators::{HitTag, SpatialTrace, TraceHit};

pub struct RapierTrace<'c, 'w> {
    context: &'c RapierContext<'w>,
    /// Entity с коллайдером отслеживаемого target'а
    target: Option<Entity>,
}

impl<'c, 'w> RapierTrace<'c, 'w> {
    pub fn new(context: &'c RapierContext<'w>, target: Option<Entity>) -> Self {
        Self { context, target }
    }
}

impl SpatialTrace for RapierTrace<'_, '_> {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<TraceHit> {
        // Сенсоры (триггеры) свет не загораживают
        let filter = QueryFilter::default().exclude_sensors();
        let (entity, toi) = self
            .context
            .cast_ray(origin, direction, max_distance, true, filter)?;

        let tag = if Some(entity) == self.target {
            HitTag::Target
        } else {
            HitTag::Scenery
        };

        Some(TraceHit {
            tag,
            point: origin + direction * toi,
        })
    }
}
