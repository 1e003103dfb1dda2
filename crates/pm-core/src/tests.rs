//! Unit tests for pm-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, TargetId};

    #[test]
    fn conversion_roundtrip() {
        let id = AgentId::from(42u64);
        assert_eq!(id, AgentId(42));
        assert_eq!(u64::from(id), 42);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(TargetId(100) > TargetId(99));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(TargetId(3).to_string(), "TargetId(3)");
    }
}

#[cfg(test)]
mod point {
    use crate::{Point, proximity};

    #[test]
    fn distance_345() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_sq(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn bbox_is_inclusive() {
        let c = Point::new(0.0, 0.0);
        assert!(Point::new(10.0, -10.0).within_bbox(c, 10.0));
        assert!(!Point::new(10.5, 0.0).within_bbox(c, 10.0));
    }

    #[test]
    fn finiteness() {
        assert!(Point::new(-1e300, 1e300).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn boundary_is_exclusive() {
        let a = Point::new(0.0, 0.0);
        assert_eq!(proximity(a, Point::new(50.0, 0.0), 50.0), None);
        assert_eq!(proximity(a, Point::new(30.0, 0.0), 50.0), Some(30.0));
        assert_eq!(proximity(a, Point::new(30.0, 40.0), 50.0), None);
    }

    #[test]
    fn coincident_points_match() {
        let a = Point::new(-7.5, 2.25);
        assert_eq!(proximity(a, a, 0.001), Some(0.0));
    }
}

#[cfg(test)]
mod entity {
    use crate::{Agent, PmError, Priority, Target, validate_agents, validate_targets};

    #[test]
    fn priority_parse_and_display() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" LOW ".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!(Priority::Normal.to_string(), "normal");
        assert!(matches!(
            "urgent".parse::<Priority>(),
            Err(PmError::InputValidation { .. })
        ));
    }

    #[test]
    fn finite_batches_validate() {
        let agents = vec![Agent::new(0, -1.0, 2.0), Agent::new(1, 0.0, 0.0)];
        let targets = vec![Target::new(0, 5.0, -5.0, Priority::High)];
        assert!(validate_agents(&agents).is_ok());
        assert!(validate_targets(&targets).is_ok());
        assert!(validate_agents(&[]).is_ok());
    }

    #[test]
    fn non_finite_agent_rejected_with_field_name() {
        let agents = vec![Agent::new(0, 1.0, 1.0), Agent::new(9, 1.0, f64::NAN)];
        let err = validate_agents(&agents).unwrap_err();
        match err {
            PmError::InputValidation { what, .. } => assert_eq!(what, "AgentId(9).y"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_target_rejected() {
        let targets = vec![Target::new(4, f64::NEG_INFINITY, 0.0, Priority::Low)];
        assert!(matches!(
            validate_targets(&targets),
            Err(PmError::InputValidation { .. })
        ));
    }
}

#[cfg(test)]
mod config {
    use crate::{MatchConfig, PmError};

    #[test]
    fn cell_size_defaults_to_max_distance() {
        let cfg = MatchConfig::new(50.0);
        assert_eq!(cfg.effective_cell_size(), 50.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn larger_cell_size_is_allowed() {
        assert!(MatchConfig::new(50.0).with_cell_size(80.0).validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_max_distance() {
        for d in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(MatchConfig::new(d).validate(), Err(PmError::Config(_))),
                "max_distance {d} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_cell_smaller_than_threshold() {
        let cfg = MatchConfig::new(50.0).with_cell_size(49.0);
        assert!(matches!(cfg.validate(), Err(PmError::Config(_))));
    }

    #[test]
    fn rejects_zero_threads() {
        let cfg = MatchConfig::new(1.0).with_threads(0);
        assert!(matches!(cfg.validate(), Err(PmError::Config(_))));
    }
}

#[cfg(test)]
mod scenario {
    use crate::{FixtureRng, Point, Priority, ScenarioSpec, generate_scenario};

    #[test]
    fn same_seed_same_scenario() {
        let spec = ScenarioSpec::uniform(50, 80, 1_000);
        let a = generate_scenario(&spec, &mut FixtureRng::new(42));
        let b = generate_scenario(&spec, &mut FixtureRng::new(42));
        assert_eq!(a.agents, b.agents);
        assert_eq!(a.targets, b.targets);
    }

    #[test]
    fn sizes_ids_and_bounds() {
        let spec = ScenarioSpec::uniform(20, 30, 100);
        let s = generate_scenario(&spec, &mut FixtureRng::new(7));
        assert_eq!(s.agents.len(), 20);
        assert_eq!(s.targets.len(), 30);
        for (i, a) in s.agents.iter().enumerate() {
            assert_eq!(a.id.0, i as u64);
            assert!((0.0..=100.0).contains(&a.pos.x));
            assert_eq!(a.pos.y, a.pos.y.trunc(), "coordinates are integral");
        }
        assert!(s.targets.iter().all(|t| t.priority == Priority::High));
    }

    #[test]
    fn clustered_targets_coincide() {
        let spec = ScenarioSpec::uniform(5, 40, 1_000).clustered(Point::new(-3.0, 8.0));
        let s = generate_scenario(&spec, &mut FixtureRng::new(1));
        assert!(s.targets.iter().all(|t| t.pos == Point::new(-3.0, 8.0)));
    }
}
