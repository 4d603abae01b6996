//! Kinematic движение guard'ов и intruder'а
//!
//! Архитектура:
//! - NavAgent / Intruder: authoritative позиция (логика в FixedUpdate)
//! - Transform только зеркалит её для Rapier коллайдеров
//! - Rapier (KinematicPositionBased) нужен для raycast'ов, не для сил
//!
//! Детерминизм: fixed timestep 60Hz, RNG только через `DeterministicRng`.

use std::f32::consts::TAU;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use crate::components::{HidingSpot, Intruder, IntruderInput, IntruderWander, NavAgent};
use crate::DeterministicRng;

/// Центр капсулы intruder'а над его позицией (ноги на y = 0).
pub const BODY_CENTER_HEIGHT: f32 = 0.9;

/// Система: NavAgent → шаг к destination → Transform.
pub fn advance_nav_agents(
    mut agents: Query<(&mut NavAgent, &mut Transform)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut agent, mut transform) in agents.iter_mut() {
        agent.step(delta);
        transform.translation = agent.position;
        transform.look_to(agent.facing, Vec3::Y);
    }
}

/// Система: IntruderInput → Intruder (stealth, укрытие, движение) → Transform.
///
/// Toggle флаги одноразовые: сбрасываются после обработки, даже если
/// intruder сейчас не может ими воспользоваться (мёртв или обездвижен).
/// Stealth в укрытии не переключается.
pub fn drive_intruders(
    mut intruders: Query<(&mut Intruder, &mut IntruderInput, &mut Transform)>,
    spots: Query<&HidingSpot>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut intruder, mut input, mut transform) in intruders.iter_mut() {
        let toggle_stealth = std::mem::take(&mut input.toggle_stealth);
        let toggle_hidden = std::mem::take(&mut input.toggle_hidden);
        let free = intruder.alive && intruder.can_move;

        if free && toggle_hidden {
            let near_spot = spots.iter().any(|spot| spot.in_reach(intruder.position));
            let hidden = intruder.toggle_hidden(near_spot);
            crate::log(&format!("Intruder hidden: {}", hidden));
        }
        if free && toggle_stealth && !intruder.hidden {
            intruder.toggle_stealth();
        }

        let direction = Vec3::new(input.direction.x, 0.0, input.direction.z).normalize_or_zero();

        if free && !intruder.hidden && direction != Vec3::ZERO {
            let speed = intruder.move_speed();
            intruder.position += direction * speed * delta;
            intruder.facing = direction;
            intruder.moving = true;
        } else {
            intruder.moving = false;
        }

        transform.translation = intruder.position + Vec3::Y * BODY_CENTER_HEIGHT;
    }
}

/// Система: demo intruder блуждает случайно (seeded RNG).
///
/// Иногда стоит на месте, иногда переключает stealth.
pub fn wander_intruders(
    mut wanderers: Query<(&mut IntruderWander, &mut IntruderInput)>,
    mut rng: ResMut<DeterministicRng>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut wander, mut input) in wanderers.iter_mut() {
        wander.retarget_in -= delta;
        if wander.retarget_in > 0.0 {
            continue;
        }

        wander.retarget_in = wander.interval * rng.rng.gen_range(0.5..1.5);

        input.direction = if rng.rng.gen_bool(0.25) {
            Vec3::ZERO
        } else {
            let angle = rng.rng.gen_range(0.0..TAU);
            Vec3::new(angle.cos(), 0.0, angle.sin())
        };
        input.toggle_stealth = rng.rng.gen_bool(0.2);
    }
}

/// Kinematic тело intruder'а: капсула 1.8m (0.5 + 0.5 + 2 × 0.4).
pub fn intruder_body(position: Vec3) -> impl Bundle {
    (
        Transform::from_translation(position + Vec3::Y * BODY_CENTER_HEIGHT),
        RigidBody::KinematicPositionBased,
        Collider::capsule_y(0.5, 0.4),
    )
}

/// Статичный box (стена, ящик). `size`: полные размеры.
pub fn obstacle_body(center: Vec3, size: Vec3) -> impl Bundle {
    let half = size * 0.5;
    (
        Transform::from_translation(center),
        RigidBody::Fixed,
        Collider::cuboid(half.x, half.y, half.z),
    )
}
