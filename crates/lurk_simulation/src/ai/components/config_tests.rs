//! Tests for guard configuration.

#[cfg(test)]
mod tests {
    use bevy::prelude::Vec3;

    use super::super::config::{GuardConfig, HearingPolicy};
    use super::super::fsm::GuardState;
    use crate::error::ConfigError;

    #[test]
    fn test_guard_config_default() {
        let config = GuardConfig::default();
        assert_eq!(config.walk_speed, 2.0);
        assert_eq!(config.run_speed, 4.0);
        assert_eq!(config.wait_duration, 5.0);
        assert_eq!(config.hearing_range, 5.0);
        assert_eq!(config.attack_engage_delay, 0.3);
        assert_eq!(config.hearing_policy, HearingPolicy::MovementNoise);
        assert!(config.lose_sight_timeout.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_speed_rejected() {
        let config = GuardConfig {
            run_speed: -1.0,
            ..GuardConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidParameter { field: "run_speed", value: -1.0 })
        );
    }

    #[test]
    fn test_nan_wait_rejected() {
        let config = GuardConfig {
            wait_duration: f32::NAN,
            ..GuardConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter { field: "wait_duration", .. })
        ));
    }

    #[test]
    fn test_sight_angle_bounds() {
        for angle in [0.0, -10.0, 361.0] {
            let config = GuardConfig {
                sight_angle_degrees: angle,
                ..GuardConfig::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::InvalidSightAngle(angle)));
        }

        let full_circle = GuardConfig {
            sight_angle_degrees: 360.0,
            ..GuardConfig::default()
        };
        assert!(full_circle.validate().is_ok());
    }

    #[test]
    fn test_non_finite_checkpoint_rejected() {
        let config = GuardConfig::default()
            .with_checkpoints([Vec3::ZERO, Vec3::new(f32::INFINITY, 0.0, 0.0)]);
        assert_eq!(config.validate(), Err(ConfigError::InvalidCheckpoint { index: 1 }));
    }

    #[test]
    fn test_config_from_ron() {
        let config: GuardConfig = ron::from_str(
            "(checkpoints: [[0.0, 0.0, 0.0], [4.0, 0.0, 0.0]], \
             run_speed: 5.5, hearing_policy: AnyPresence)",
        )
        .unwrap();

        assert_eq!(config.checkpoints, vec![Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)]);
        assert_eq!(config.run_speed, 5.5);
        assert_eq!(config.walk_speed, 2.0); // не указан → default
        assert_eq!(config.hearing_policy, HearingPolicy::AnyPresence);
    }

    #[test]
    fn test_state_locomotion_table() {
        let (walk, run) = (2.0, 4.0);
        assert_eq!(GuardState::Patrol.locomotion_speed(walk, run), walk);
        assert_eq!(GuardState::Alert.locomotion_speed(walk, run), walk);
        assert_eq!(GuardState::Chase.locomotion_speed(walk, run), run);
        assert_eq!(GuardState::Wait.locomotion_speed(walk, run), 0.0);
        assert_eq!(GuardState::Attack.locomotion_speed(walk, run), 0.0);
        assert_eq!(GuardState::Idle.locomotion_speed(walk, run), 0.0);
    }

    #[test]
    fn test_state_presentation_flags() {
        assert_eq!(GuardState::Patrol.presentation_flags(), (true, false));
        assert_eq!(GuardState::Chase.presentation_flags(), (true, true));
        assert_eq!(GuardState::Attack.presentation_flags(), (false, true));
        assert_eq!(GuardState::Wait.presentation_flags(), (false, false));
    }
}
