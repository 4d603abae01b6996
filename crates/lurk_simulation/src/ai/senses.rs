//! Sensory predicates guard'а
//!
//! Все проверки пересчитываются каждый тик и не зависят от текущего
//! состояния FSM. Нет target'а / нет raycast'а / нет позы guard'а → `false`.

use bevy::prelude::*;

use super::collaborators::{HitTag, Locomotion, PerceptionTarget, SpatialTrace};
use super::components::{GuardConfig, HearingPolicy};

/// Запас длины луча за target'ом (луч должен упереться в коллайдер target'а).
pub const SIGHT_TRACE_MARGIN: f32 = 0.5;

/// Слышит ли guard target. Возвращает позицию источника шума.
pub fn hear_target(
    config: &GuardConfig,
    guard_position: Vec3,
    target: Option<&dyn PerceptionTarget>,
) -> Option<Vec3> {
    let target = target?;

    // Мёртвые и спрятавшиеся не шумят
    if !target.is_alive() || target.is_hidden() || target.is_silent_posture() {
        return None;
    }

    if config.hearing_policy == HearingPolicy::MovementNoise && !target.is_moving() {
        return None;
    }

    let source = target.position();
    (guard_position.distance(source) <= config.hearing_range).then_some(source)
}

/// Видит ли guard target.
///
/// Порядок проверок: alive/hidden → дальность → угол конуса → raycast.
/// Дальность проверяется первой и авторитетна: за пределами `sight_range`
/// ни угол, ни луч уже не смотрим.
pub fn see_target(
    config: &GuardConfig,
    guard_position: Vec3,
    guard_forward: Vec3,
    target: Option<&dyn PerceptionTarget>,
    trace: Option<&dyn SpatialTrace>,
) -> bool {
    let Some(target) = target else {
        return false;
    };
    if !target.is_alive() || target.is_hidden() {
        return false;
    }

    let target_position = target.position();
    let to_target = target_position - guard_position;
    let distance = to_target.length();
    // `!(a <= b)` чтобы NaN тоже отсекался
    if !(distance <= config.sight_range) {
        return false;
    }

    if distance > f32::EPSILON {
        let forward = guard_forward.normalize_or_zero();
        if forward == Vec3::ZERO {
            return false;
        }
        if forward.angle_between(to_target) > config.half_sight_angle() {
            return false;
        }
    }

    let Some(trace) = trace else {
        return false;
    };
    line_of_sight(guard_position, target, trace)
}

/// Occlusion trace: луч из глаз guard'а должен первым попасть в target.
///
/// Глаза и точка прицеливания подняты на `eye_height_offset` над позициями
/// guard'а и target'а: пригнувшийся target виден только низким лучом.
/// Промах (луч ни во что не попал): тоже «не видно»: у target'а всегда
/// есть коллайдер, значит он чем-то заслонён или выключен.
pub fn line_of_sight(
    guard_position: Vec3,
    target: &dyn PerceptionTarget,
    trace: &dyn SpatialTrace,
) -> bool {
    let lift = Vec3::Y * target.eye_height_offset();
    let eye = guard_position + lift;
    let to_target = target.position() + lift - eye;
    let Some(direction) = to_target.try_normalize() else {
        // Глаза внутри target'а
        return true;
    };

    match trace.raycast(eye, direction, to_target.length() + SIGHT_TRACE_MARGIN) {
        Some(hit) => hit.tag == HitTag::Target,
        None => false,
    }
}

/// Дошли ли до текущего destination.
pub fn destination_reached(locomotion: Option<&dyn Locomotion>) -> bool {
    locomotion.is_some_and(|locomotion| {
        locomotion.remaining_distance() < locomotion.stopping_distance()
            && !locomotion.is_path_pending()
    })
}

/// `Timeout(d)`: в текущем состоянии провели не меньше `duration` секунд.
pub fn timed_out(state_timer: f32, duration: f32) -> bool {
    state_timer >= duration
}
