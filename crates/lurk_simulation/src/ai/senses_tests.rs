//! Tests for guard sensory predicates.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::ai::collaborators::PerceptionTarget;
    use crate::ai::components::{GuardConfig, HearingPolicy};
    use crate::ai::senses::{destination_reached, hear_target, see_target, timed_out};
    use crate::ai::test_support::{FakeLocomotion, FakeTarget, FakeTrace};
    use crate::components::{Intruder, CROUCHED_EYE_HEIGHT, STANDING_EYE_HEIGHT};

    fn sight_config() -> GuardConfig {
        GuardConfig {
            sight_range: 5.0,
            sight_angle_degrees: 120.0,
            ..GuardConfig::default()
        }
    }

    fn sees(config: &GuardConfig, target: &FakeTarget, trace: &FakeTrace) -> bool {
        see_target(
            config,
            Vec3::ZERO,
            Vec3::Z,
            Some(target as &dyn PerceptionTarget),
            Some(trace),
        )
    }

    #[test]
    fn test_sight_cone_scenario() {
        let config = sight_config();
        let trace = FakeTrace::clear();

        // Guard в origin смотрит в +Z, target на дистанции 3 → видим
        let near = FakeTarget::at(Vec3::new(0.0, 0.0, 3.0));
        assert!(sees(&config, &near, &trace));

        // Та же геометрия, дистанция 6 > sight_range 5 → не видим
        let far = FakeTarget::at(Vec3::new(0.0, 0.0, 6.0));
        assert!(!sees(&config, &far, &trace));
    }

    #[test]
    fn test_sight_range_gate_checked_before_trace() {
        let config = sight_config();
        let trace = FakeTrace::clear();
        let far = FakeTarget::at(Vec3::new(0.0, 0.0, 5.5));

        assert!(!sees(&config, &far, &trace));
        assert_eq!(trace.calls.get(), 0, "range gate must short-circuit the trace");
    }

    #[test]
    fn test_sight_rejects_occluded_target() {
        let config = sight_config();
        let target = FakeTarget::at(Vec3::new(0.0, 0.0, 3.0));

        assert!(!sees(&config, &target, &FakeTrace::blocked()));
        assert!(!sees(&config, &target, &FakeTrace::miss()));
    }

    #[test]
    fn test_sight_angle_limits() {
        let config = sight_config();
        let trace = FakeTrace::clear();

        // 50° от оси взгляда: внутри половины конуса (60°)
        let inside = Vec3::new(50f32.to_radians().sin(), 0.0, 50f32.to_radians().cos()) * 3.0;
        assert!(sees(&config, &FakeTarget::at(inside), &trace));

        // 70°: уже вне конуса
        let outside = Vec3::new(70f32.to_radians().sin(), 0.0, 70f32.to_radians().cos()) * 3.0;
        assert!(!sees(&config, &FakeTarget::at(outside), &trace));

        // За спиной
        assert!(!sees(&config, &FakeTarget::at(Vec3::new(0.0, 0.0, -2.0)), &trace));
    }

    #[test]
    fn test_sight_requires_alive_visible_target() {
        let config = sight_config();
        let trace = FakeTrace::clear();

        let mut dead = FakeTarget::at(Vec3::new(0.0, 0.0, 2.0));
        dead.alive = false;
        assert!(!sees(&config, &dead, &trace));

        let mut hidden = FakeTarget::at(Vec3::new(0.0, 0.0, 2.0));
        hidden.hidden = true;
        assert!(!sees(&config, &hidden, &trace));
    }

    #[test]
    fn test_sight_fails_closed_without_collaborators() {
        let config = sight_config();
        let target = FakeTarget::at(Vec3::new(0.0, 0.0, 2.0));

        assert!(!see_target(&config, Vec3::ZERO, Vec3::Z, None, Some(&FakeTrace::clear())));
        assert!(!see_target(
            &config,
            Vec3::ZERO,
            Vec3::Z,
            Some(&target as &dyn PerceptionTarget),
            None
        ));
    }

    #[test]
    fn test_silent_still_target_never_heard() {
        let mut target = FakeTarget::at(Vec3::new(0.0, 0.0, 0.5));
        target.moving = false;
        target.silent = true;

        for policy in [HearingPolicy::MovementNoise, HearingPolicy::AnyPresence] {
            let config = GuardConfig {
                hearing_policy: policy,
                hearing_range: 100.0,
                ..GuardConfig::default()
            };
            let heard = hear_target(&config, Vec3::ZERO, Some(&target as &dyn PerceptionTarget));
            assert!(heard.is_none());
        }
    }

    #[test]
    fn test_hearing_captures_source_position() {
        let config = GuardConfig::default(); // hearing_range 5
        let position = Vec3::new(3.0, 0.0, 4.0); // ровно 5 м
        let target = FakeTarget::at(position);

        assert_eq!(
            hear_target(&config, Vec3::ZERO, Some(&target as &dyn PerceptionTarget)),
            Some(position)
        );

        let far = FakeTarget::at(Vec3::new(3.0, 0.0, 4.1));
        let far = Some(&far as &dyn PerceptionTarget);
        assert!(hear_target(&config, Vec3::ZERO, far).is_none());
    }

    #[test]
    fn test_hearing_policy_on_still_target() {
        let mut still = FakeTarget::at(Vec3::new(1.0, 0.0, 0.0));
        still.moving = false;

        let still = Some(&still as &dyn PerceptionTarget);
        let movement = GuardConfig::default();
        assert!(hear_target(&movement, Vec3::ZERO, still).is_none());

        let presence = GuardConfig {
            hearing_policy: HearingPolicy::AnyPresence,
            ..GuardConfig::default()
        };
        assert!(hear_target(&presence, Vec3::ZERO, still).is_some());
    }

    #[test]
    fn test_sight_ray_height_follows_target_posture() {
        let config = sight_config();
        let trace = FakeTrace::clear();
        let mut intruder = Intruder::new(Vec3::new(0.0, 0.0, 3.0));

        let sees_intruder = |intruder: &Intruder| {
            see_target(
                &config,
                Vec3::ZERO,
                Vec3::Z,
                Some(intruder as &dyn PerceptionTarget),
                Some(&trace),
            )
        };

        assert!(sees_intruder(&intruder));
        let (origin, direction) = trace.last_ray.get().unwrap();
        assert_eq!(origin.y, STANDING_EYE_HEIGHT);
        assert_eq!(direction, Vec3::Z, "луч горизонтальный на высоте глаз");

        intruder.toggle_stealth();
        assert!(sees_intruder(&intruder));
        let (origin, direction) = trace.last_ray.get().unwrap();
        assert_eq!(origin.y, CROUCHED_EYE_HEIGHT);
        assert_eq!(direction, Vec3::Z);
    }

    #[test]
    fn test_destination_reached() {
        let mut locomotion = FakeLocomotion::at(Vec3::ZERO);
        locomotion.destination = Some(Vec3::new(0.0, 0.0, 0.3));
        assert!(destination_reached(Some(&locomotion)));

        locomotion.path_pending = true;
        assert!(!destination_reached(Some(&locomotion)));

        locomotion.path_pending = false;
        locomotion.destination = Some(Vec3::new(0.0, 0.0, 3.0));
        assert!(!destination_reached(Some(&locomotion)));

        assert!(!destination_reached(None));
    }

    #[test]
    fn test_timeout_boundary() {
        assert!(!timed_out(4.99, 5.0));
        assert!(timed_out(5.0, 5.0));
        assert!(timed_out(5.01, 5.0));
    }
}
