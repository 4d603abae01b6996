//! Intruder: игрок/нарушитель, за которым следят guard'ы
//!
//! Заменяет глобальный флаг «игрок спрятался»: всё состояние цели лежит в
//! одном компоненте и читается guard'ами через `PerceptionTarget`.

use bevy::prelude::*;

use crate::ai::collaborators::PerceptionTarget;

/// Высота глаз guard'а при взгляде на стоящего target'а (метры)
pub const STANDING_EYE_HEIGHT: f32 = 1.6;
/// ... и на пригнувшегося (stealth поза)
pub const CROUCHED_EYE_HEIGHT: f32 = 0.9;

/// Радиус, в котором hiding spot доступен
pub const HIDING_SPOT_RADIUS: f32 = 1.5;

#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Intruder {
    pub position: Vec3,
    pub facing: Vec3,
    pub alive: bool,
    /// Stealth/crouch: шагов не слышно, двигается медленнее
    pub stealth: bool,
    /// Внутри hiding spot: не виден и не слышен
    pub hidden: bool,
    /// Сдвинулся на последнем шаге симуляции
    pub moving: bool,
    /// false пока guard держит intruder'а (Attack)
    pub can_move: bool,
}

impl Intruder {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            facing: Vec3::NEG_Z,
            alive: true,
            stealth: false,
            hidden: false,
            moving: false,
            can_move: true,
        }
    }

    pub fn toggle_stealth(&mut self) {
        self.stealth = !self.stealth;
    }

    /// Спрятаться/выйти из укрытия.
    ///
    /// Спрятаться можно только рядом с hiding spot; выйти: всегда.
    /// Возвращает новое значение `hidden`.
    pub fn toggle_hidden(&mut self, near_spot: bool) -> bool {
        if self.hidden {
            self.hidden = false;
        } else if near_spot && self.alive {
            self.hidden = true;
            self.moving = false;
        }
        self.hidden
    }

    pub fn restrain(&mut self) {
        self.can_move = false;
        self.moving = false;
    }

    pub fn kill(&mut self) {
        self.alive = false;
        self.hidden = false;
        self.restrain();
    }

    pub fn move_speed(&self) -> f32 {
        if self.stealth {
            2.0
        } else {
            5.0
        }
    }
}

impl PerceptionTarget for Intruder {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.facing
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn is_silent_posture(&self) -> bool {
        self.stealth
    }

    fn is_moving(&self) -> bool {
        self.moving
    }

    fn eye_height_offset(&self) -> f32 {
        if self.stealth {
            CROUCHED_EYE_HEIGHT
        } else {
            STANDING_EYE_HEIGHT
        }
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Управление intruder'ом (игрок, тест или demo wander).
///
/// `direction` в XZ плоскости, длина игнорируется.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct IntruderInput {
    pub direction: Vec3,
    pub toggle_stealth: bool,
    pub toggle_hidden: bool,
}

/// Место, где intruder может спрятаться (шкаф, ящик).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct HidingSpot {
    pub position: Vec3,
}

impl HidingSpot {
    pub fn in_reach(&self, position: Vec3) -> bool {
        self.position.distance(position) <= HIDING_SPOT_RADIUS
    }
}

/// Demo intruder блуждает сам (RNG), без игрока.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct IntruderWander {
    /// Секунд до смены направления
    pub retarget_in: f32,
    /// Базовый период смены направления (секунды)
    pub interval: f32,
}

impl Default for IntruderWander {
    fn default() -> Self {
        Self {
            retarget_in: 0.0,
            interval: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_requires_spot_but_leaving_does_not() {
        let mut intruder = Intruder::new(Vec3::ZERO);

        assert!(!intruder.toggle_hidden(false));
        assert!(intruder.toggle_hidden(true));
        assert!(intruder.is_hidden());
        assert!(!intruder.toggle_hidden(false));
    }

    #[test]
    fn test_stealth_lowers_eye_height_and_silences() {
        let mut intruder = Intruder::new(Vec3::ZERO);
        assert_eq!(intruder.eye_height_offset(), STANDING_EYE_HEIGHT);
        assert!(!intruder.is_silent_posture());

        intruder.toggle_stealth();
        assert_eq!(intruder.eye_height_offset(), CROUCHED_EYE_HEIGHT);
        assert!(intruder.is_silent_posture());
        assert_eq!(intruder.move_speed(), 2.0);
    }

    #[test]
    fn test_kill_restrains_and_unhides() {
        let mut intruder = Intruder::new(Vec3::ZERO);
        intruder.restrain();
        assert!(!intruder.can_move);
        assert!(intruder.is_alive());

        let mut hidden = Intruder::new(Vec3::ZERO);
        assert!(hidden.toggle_hidden(true));
        hidden.kill();
        assert!(!hidden.is_alive());
        assert!(!hidden.can_move, "мёртвый не двигается");
        assert!(!hidden.is_hidden());
        assert!(!hidden.toggle_hidden(true), "мёртвый не прячется");
    }

    #[test]
    fn test_hiding_spot_reach() {
        let spot = HidingSpot { position: Vec3::ZERO };
        assert!(spot.in_reach(Vec3::new(1.5, 0.0, 0.0)));
        assert!(!spot.in_reach(Vec3::new(1.6, 0.0, 0.0)));
    }
}
