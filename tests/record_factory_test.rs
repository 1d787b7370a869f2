// ABOUTME: Integration tests for the workout record factory
// ABOUTME: Covers code recognition, positional payload binding, arity checks, and batch independence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Summary contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_summary::{ActivityKind, AppError, WorkoutCompute, WorkoutRecord};

#[test]
fn recognizes_all_three_codes() {
    let run = WorkoutRecord::from_reading("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    assert_eq!(run.kind(), ActivityKind::Running);

    let walk = WorkoutRecord::from_reading("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert_eq!(walk.kind(), ActivityKind::Walking);

    let swim = WorkoutRecord::from_reading("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert_eq!(swim.kind(), ActivityKind::Swimming);
}

#[test]
fn codes_are_case_insensitive() {
    let record = WorkoutRecord::from_reading("swm", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert_eq!(record.kind(), ActivityKind::Swimming);
}

#[test]
fn binds_payload_positionally() {
    let record = WorkoutRecord::from_reading("WLK", &[9000.0, 1.5, 75.0, 180.0]).unwrap();

    let WorkoutRecord::Walking(walk) = record else {
        panic!("expected a walking record");
    };
    assert_eq!(walk.effort.action_count, 9000);
    assert!((walk.effort.duration_hours - 1.5).abs() < f64::EPSILON);
    assert!((walk.effort.weight_kg - 75.0).abs() < f64::EPSILON);
    assert!((walk.height_cm - 180.0).abs() < f64::EPSILON);

    let record = WorkoutRecord::from_reading("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let WorkoutRecord::Swimming(swim) = record else {
        panic!("expected a swimming record");
    };
    assert!((swim.pool_length_m - 25.0).abs() < f64::EPSILON);
    assert!((swim.pool_laps - 40.0).abs() < f64::EPSILON);
}

#[test]
fn unknown_code_is_an_explicit_failure() {
    let result = WorkoutRecord::from_reading("BIKE", &[100.0, 1.0, 75.0]);

    let err = result.unwrap_err();
    assert_eq!(
        err,
        AppError::UnknownActivityCode {
            code: "BIKE".to_owned()
        }
    );
    assert!(
        err.to_string().contains("RUN, WLK, SWM"),
        "error should list the valid codes: {err}"
    );
}

#[test]
fn payload_arity_is_enforced_per_kind() {
    let short = WorkoutRecord::from_reading("RUN", &[15000.0, 1.0]);
    assert_eq!(
        short.unwrap_err(),
        AppError::PayloadArity {
            kind: ActivityKind::Running,
            expected: 3,
            actual: 2
        }
    );

    let long = WorkoutRecord::from_reading("WLK", &[9000.0, 1.0, 75.0, 180.0, 5.0]);
    assert_eq!(
        long.unwrap_err(),
        AppError::PayloadArity {
            kind: ActivityKind::Walking,
            expected: 4,
            actual: 5
        }
    );

    let empty = WorkoutRecord::from_reading("SWM", &[]);
    assert_eq!(
        empty.unwrap_err(),
        AppError::PayloadArity {
            kind: ActivityKind::Swimming,
            expected: 5,
            actual: 0
        }
    );
}

#[test]
fn non_integral_action_count_is_rejected() {
    let fractional = WorkoutRecord::from_reading("RUN", &[150.5, 1.0, 75.0]);
    assert!(matches!(
        fractional.unwrap_err(),
        AppError::InvalidPayload { .. }
    ));

    let negative = WorkoutRecord::from_reading("RUN", &[-100.0, 1.0, 75.0]);
    assert!(matches!(
        negative.unwrap_err(),
        AppError::InvalidPayload { .. }
    ));
}

#[test]
fn negative_measurements_are_accepted_at_construction() {
    // Field-level range validation is deferred to query time.
    let record = WorkoutRecord::from_reading("RUN", &[15000.0, -1.0, 75.0]).unwrap();
    assert!(record.mean_speed_kmh().is_err());
}

#[test]
fn one_bad_reading_does_not_corrupt_a_batch() {
    let readings: [(&str, &[f64]); 4] = [
        ("RUN", &[15000.0, 1.0, 75.0]),
        ("XXX", &[1.0, 2.0, 3.0]),
        ("SWM", &[720.0, 1.0]),
        ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ];

    let summaries: Vec<_> = readings
        .iter()
        .filter_map(|(code, payload)| {
            WorkoutRecord::from_reading(code, payload)
                .and_then(|r| r.summarize())
                .ok()
        })
        .collect();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].activity, "Running");
    assert_eq!(summaries[1].activity, "Walking");
}
