use approx::assert_abs_diff_eq;
use motion_profile::{MotionProfile, ProfileError, Segment, SegmentParams, Shape};

fn build(params: SegmentParams) -> Segment {
    Segment::new(params).unwrap()
}

/// One valid parameter set per shape, with non-trivial boundary values where the shape uses them.
fn one_of_each() -> Vec<Segment> {
    vec![
        build(SegmentParams::new(Shape::Constant, 1.0, 4.0, 20.0).with_initial_velocity(2.0)),
        build(SegmentParams::new(Shape::Triangular, 0.0, 6.0, 30.0)),
        build(
            SegmentParams::new(Shape::Trapezoidal, -2.0, 8.0, 50.0)
                .with_initial_velocity(1.0)
                .with_final_velocity(3.0)
                .with_cruise_fraction(0.4),
        ),
        build(
            SegmentParams::new(Shape::Trapezoidal, 0.0, 10.0, 60.0)
                .with_initial_velocity(2.0)
                .with_final_velocity(1.0),
        ),
        build(
            SegmentParams::new(Shape::Trapezoidal, 1.0, 10.0, 30.0)
                .with_initial_velocity(5.0)
                .with_final_velocity(0.0),
        ),
        build(SegmentParams::new(Shape::SCurve, 0.5, 2.5, 7.0)),
        build(
            SegmentParams::new(Shape::Polynomial, 0.0, 3.0, 9.0)
                .with_initial_velocity(1.0)
                .with_final_velocity(2.0),
        ),
        build(
            SegmentParams::new(Shape::Polynomial, 0.0, 3.0, 9.0)
                .with_initial_velocity(1.0)
                .with_accelerations(0.5, -0.25),
        ),
        build(
            SegmentParams::new(Shape::JerkLimited, 2.0, 5.0, 12.0)
                .with_initial_velocity(0.5)
                .with_final_velocity(1.5)
                .with_accelerations(-0.5, 1.0)
                .with_jerks(2.0, -1.0),
        ),
    ]
}

#[test]
fn test_every_shape_starts_at_zero_and_covers_distance() {
    for seg in one_of_each() {
        let (t0, t1) = seg.domain();
        assert_abs_diff_eq!(seg.position(t0), 0.0, epsilon = 1e-9);
        assert!(
            (seg.position(t1) - seg.distance()).abs() < 1e-8,
            "{} segment ends at {}, expected {}",
            seg.shape(),
            seg.position(t1),
            seg.distance()
        );
    }
}

#[test]
fn test_every_shape_clamps_outside_window() {
    for seg in one_of_each() {
        let (t0, t1) = seg.domain();
        for eps in [1e-6, 0.5, 1e6] {
            assert_eq!(seg.position(t0 - eps), seg.position(t0));
            assert_eq!(seg.position(t1 + eps), seg.position(t1));
            assert_eq!(seg.velocity(t1 + eps), seg.velocity(t1));
            assert_eq!(seg.jerk(t0 - eps), seg.jerk(t0));
        }
    }
}

#[test]
fn test_evaluation_is_idempotent() {
    for seg in one_of_each() {
        let (t0, t1) = seg.domain();
        let t = t0 + 0.37 * (t1 - t0);
        let first = (
            seg.position(t),
            seg.velocity(t),
            seg.acceleration(t),
            seg.jerk(t),
        );
        for _ in 0..10 {
            let again = (
                seg.position(t),
                seg.velocity(t),
                seg.acceleration(t),
                seg.jerk(t),
            );
            assert_eq!(first.0.to_bits(), again.0.to_bits());
            assert_eq!(first.1.to_bits(), again.1.to_bits());
            assert_eq!(first.2.to_bits(), again.2.to_bits());
            assert_eq!(first.3.to_bits(), again.3.to_bits());
        }
    }
}

#[test]
fn test_extrema_cover_endpoint_values() {
    for seg in one_of_each() {
        let (t0, t1) = seg.domain();
        let max_acc = seg.max_acceleration();
        let max_jerk = seg.max_jerk();
        assert!(max_acc >= seg.acceleration(t0).abs().max(seg.acceleration(t1).abs()));
        assert!(max_jerk >= seg.jerk(t0).abs().max(seg.jerk(t1).abs()));
    }
}

#[test]
fn test_cubic_max_jerk_is_six_c3() {
    let seg = build(
        SegmentParams::new(Shape::Polynomial, 0.0, 3.0, 9.0)
            .with_initial_velocity(1.0)
            .with_final_velocity(2.0),
    );
    let c3 = seg.coefficients().unwrap()[3];
    assert!(c3 != 0.0);
    assert_abs_diff_eq!(seg.max_jerk(), 6.0 * c3.abs(), epsilon = 1e-12);
}

#[test]
fn test_quintic_max_acceleration_tracks_dense_scan() {
    let seg = build(
        SegmentParams::new(Shape::Polynomial, 0.0, 4.0, 10.0)
            .with_initial_velocity(0.5)
            .with_accelerations(1.0, -2.0),
    );
    let max_acc = seg.max_acceleration();
    assert!(max_acc >= 2.0 - 1e-9);

    // The 100-point grid is a subset of this one, so the scan cannot exceed it.
    let dense = seg
        .sample(10_000)
        .iter()
        .map(|s| s.acceleration.abs())
        .fold(0.0, f64::max);
    assert!(max_acc <= dense + 1e-9);
    assert!(max_acc >= 0.99 * dense);
}

#[test]
fn test_jerk_limited_extrema_reach_boundary_values() {
    let seg = build(
        SegmentParams::new(Shape::JerkLimited, 2.0, 5.0, 12.0)
            .with_initial_velocity(0.5)
            .with_final_velocity(1.5)
            .with_accelerations(-0.5, 1.0)
            .with_jerks(2.0, -1.0),
    );
    assert!(seg.max_acceleration() >= 1.0 - 1e-7);
    assert!(seg.max_jerk() >= 2.0 - 1e-9);
}

#[test]
fn test_constant_acceleration_from_rest() {
    let seg = build(SegmentParams::new(Shape::Constant, 0.0, 10.0, 100.0));
    for t in [0.0, 2.5, 5.0, 10.0] {
        assert_abs_diff_eq!(seg.acceleration(t), 2.0, epsilon = 1e-12);
        assert_eq!(seg.jerk(t), 0.0);
    }
    assert_abs_diff_eq!(seg.velocity(10.0), 20.0, epsilon = 1e-12);
    assert_abs_diff_eq!(seg.final_velocity(), 20.0, epsilon = 1e-12);
    assert_abs_diff_eq!(seg.max_acceleration(), 2.0, epsilon = 1e-12);
    assert_eq!(seg.max_jerk(), 0.0);
}

#[test]
fn test_triangular_peak_and_sign_flip() {
    let seg = build(SegmentParams::new(Shape::Triangular, 0.0, 10.0, 100.0));
    assert_abs_diff_eq!(seg.velocity(5.0), 20.0, epsilon = 1e-12);
    assert_abs_diff_eq!(seg.velocity(10.0), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(seg.velocity(0.0), 0.0, epsilon = 1e-12);
    assert!(seg.acceleration(5.0 - 1e-9) > 0.0);
    assert!(seg.acceleration(5.0 + 1e-9) < 0.0);
    assert_abs_diff_eq!(seg.max_acceleration(), 4.0, epsilon = 1e-12);
}

#[test]
fn test_trapezoid_cruise_window() {
    let seg = build(
        SegmentParams::new(Shape::Trapezoidal, 0.0, 9.0, 50.0)
            .with_initial_velocity(1.0)
            .with_final_velocity(2.0)
            .with_cruise_fraction(1.0 / 3.0),
    );
    let phases = seg.trapezoid_phases().unwrap();
    assert!(!phases.degenerate);
    assert_abs_diff_eq!(phases.accel_time, 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(phases.cruise_time, 3.0, epsilon = 1e-12);

    let v_max = phases.cruise_velocity;
    let start = phases.accel_time;
    let end = phases.accel_time + phases.cruise_time;
    for i in 0..=20 {
        let t = start + (end - start) * i as f64 / 20.0;
        assert_abs_diff_eq!(seg.velocity(t), v_max, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(seg.velocity(0.0), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(seg.velocity(9.0), 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(seg.position(9.0), 50.0, epsilon = 1e-9);
}

#[test]
fn test_trapezoid_fallback_is_reported() {
    let seg = build(
        SegmentParams::new(Shape::Trapezoidal, 0.0, 4.0, 2.0)
            .with_initial_velocity(5.0)
            .with_final_velocity(5.0),
    );
    let phases = seg.trapezoid_phases().unwrap();
    assert!(phases.degenerate);
    assert_eq!(phases.cruise_time, 0.0);
    assert_abs_diff_eq!(phases.cruise_velocity, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(seg.position(4.0), 2.0, epsilon = 1e-12);
}

#[test]
fn test_trapezoid_decelerates_from_fast_entry() {
    let seg = build(
        SegmentParams::new(Shape::Trapezoidal, 0.0, 9.0, 30.0)
            .with_initial_velocity(5.0)
            .with_final_velocity(0.0),
    );
    let phases = seg.trapezoid_phases().unwrap();
    assert!(!phases.degenerate);
    assert!(phases.cruise_velocity < 5.0);
    assert_abs_diff_eq!(phases.cruise_velocity, 23.0 / 6.0, epsilon = 1e-9);
    assert_abs_diff_eq!(phases.cruise_time, 5.625, epsilon = 1e-9);
    assert_eq!(seg.velocity(0.0), 5.0);
    assert!(seg.acceleration(0.0) < 0.0);
    assert_abs_diff_eq!(seg.velocity(9.0), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(seg.position(9.0), 30.0, epsilon = 1e-9);

    let times: Vec<f64> = (0..=90).map(|i| i as f64 * 0.1).collect();
    for pair in seg.sample_at(&times).windows(2) {
        assert!(pair[1].velocity <= pair[0].velocity + 1e-12);
    }
}

#[test]
fn test_scurve_derivatives() {
    let (d, t) = (100.0, 10.0);
    let seg = build(SegmentParams::new(Shape::SCurve, 0.0, t, d));
    assert_abs_diff_eq!(seg.acceleration(0.0), 6.0 * d / (t * t), epsilon = 1e-12);
    for time in [0.0, 1.0, 4.2, 9.9, 10.0] {
        assert_abs_diff_eq!(seg.jerk(time), -12.0 * d / (t * t * t), epsilon = 1e-12);
    }
    assert_abs_diff_eq!(seg.velocity(5.0), 1.5 * d / t, epsilon = 1e-12);
    assert_abs_diff_eq!(seg.max_jerk(), 12.0 * d / (t * t * t), epsilon = 1e-12);
}

#[test]
fn test_scurve_ignores_boundary_velocities() {
    let seg = build(
        SegmentParams::new(Shape::SCurve, 0.0, 2.0, 4.0)
            .with_initial_velocity(3.0)
            .with_final_velocity(1.0),
    );
    assert_eq!(seg.velocity(0.0), 0.0);
    assert_eq!(seg.velocity(2.0), 0.0);
}

#[test]
fn test_cubic_polynomial_matches_boundaries() {
    let seg = build(
        SegmentParams::new(Shape::Polynomial, 1.0, 5.0, 20.0)
            .with_initial_velocity(2.0)
            .with_final_velocity(6.0),
    );
    assert_eq!(seg.coefficients().unwrap().len(), 4);
    assert_abs_diff_eq!(seg.velocity(1.0), 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(seg.velocity(5.0), 6.0, epsilon = 1e-9);
    // A cubic has constant jerk 6·c3.
    let c3 = seg.coefficients().unwrap()[3];
    assert_abs_diff_eq!(seg.jerk(2.0), 6.0 * c3, epsilon = 1e-12);
    assert_abs_diff_eq!(seg.jerk(4.0), 6.0 * c3, epsilon = 1e-12);
}

#[test]
fn test_quintic_polynomial_matches_boundaries() {
    let seg = build(
        SegmentParams::new(Shape::Polynomial, 0.0, 4.0, 10.0)
            .with_initial_velocity(0.5)
            .with_accelerations(1.0, -2.0),
    );
    assert_eq!(seg.coefficients().unwrap().len(), 6);
    assert_abs_diff_eq!(seg.velocity(0.0), 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(seg.velocity(4.0), 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(seg.acceleration(0.0), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(seg.acceleration(4.0), -2.0, epsilon = 1e-9);
}

#[test]
fn test_only_one_boundary_acceleration_keeps_cubic() {
    let mut params = SegmentParams::new(Shape::Polynomial, 0.0, 2.0, 3.0);
    params.a0 = Some(1.0);
    let seg = build(params);
    assert_eq!(seg.coefficients().unwrap().len(), 4);
}

#[test]
fn test_jerk_limited_matches_all_boundaries() {
    let seg = build(
        SegmentParams::new(Shape::JerkLimited, 1.0, 4.0, 15.0)
            .with_initial_velocity(1.0)
            .with_final_velocity(3.0)
            .with_accelerations(-1.0, 0.5)
            .with_jerks(-2.0, 4.0),
    );
    assert_eq!(seg.coefficients().unwrap().len(), 8);
    assert_abs_diff_eq!(seg.position(4.0), 15.0, epsilon = 1e-8);
    assert_abs_diff_eq!(seg.velocity(1.0), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(seg.velocity(4.0), 3.0, epsilon = 1e-8);
    assert_abs_diff_eq!(seg.acceleration(1.0), -1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(seg.acceleration(4.0), 0.5, epsilon = 1e-7);
    assert_abs_diff_eq!(seg.jerk(1.0), -2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(seg.jerk(4.0), 4.0, epsilon = 1e-6);
}

#[test]
fn test_construction_failures() {
    let err = Segment::new(SegmentParams::new(Shape::Triangular, 3.0, 3.0, 1.0)).unwrap_err();
    assert_eq!(err, ProfileError::InvalidTimeWindow { t0: 3.0, t1: 3.0 });

    let err = Segment::new(SegmentParams::new(Shape::SCurve, 0.0, 1.0, -1.0)).unwrap_err();
    assert!(matches!(err, ProfileError::Negative { field: "distance", .. }));

    let err = Segment::new(
        SegmentParams::new(Shape::Constant, 0.0, 1.0, 1.0).with_initial_velocity(-2.0),
    )
    .unwrap_err();
    assert!(matches!(err, ProfileError::Negative { field: "v0", .. }));

    for fraction in [0.0, 1.0] {
        let err = Segment::new(
            SegmentParams::new(Shape::Trapezoidal, 0.0, 1.0, 1.0).with_cruise_fraction(fraction),
        )
        .unwrap_err();
        assert_eq!(err, ProfileError::CruiseFraction(fraction));
    }

    let complete = SegmentParams::new(Shape::JerkLimited, 0.0, 1.0, 1.0)
        .with_accelerations(0.0, 0.0)
        .with_jerks(0.0, 0.0);
    for field in ["a0", "af", "j0", "jf"] {
        let mut params = complete.clone();
        match field {
            "a0" => params.a0 = None,
            "af" => params.af = None,
            "j0" => params.j0 = None,
            _ => params.jf = None,
        }
        assert_eq!(
            Segment::new(params).unwrap_err(),
            ProfileError::MissingBoundary(field)
        );
    }
}

#[test]
fn test_parallel_sampling_matches_serial() {
    for seg in one_of_each() {
        assert_eq!(seg.sample(257), seg.sample_par(257));
    }
}

#[test]
fn test_segments_evaluate_across_threads() {
    let seg = std::sync::Arc::new(build(
        SegmentParams::new(Shape::JerkLimited, 0.0, 2.0, 4.0)
            .with_accelerations(0.0, 0.0)
            .with_jerks(0.0, 0.0),
    ));
    let expected = seg.position(1.3);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let seg = seg.clone();
            std::thread::spawn(move || seg.position(1.3))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().to_bits(), expected.to_bits());
    }
}
