// ABOUTME: Integration tests for summary report rendering and serialization
// ABOUTME: Covers the fixed 3-decimal message template and the JSON field layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Summary contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_summary::{WorkoutCompute, WorkoutRecord, WorkoutSummary};

#[test]
fn template_renders_three_decimal_fields() {
    let summary = WorkoutSummary {
        activity: "Running".to_owned(),
        duration_hours: 0.75,
        distance_km: 1.2,
        mean_speed_kmh: 1.6,
        calories_kcal: 123.4567,
    };

    assert_eq!(
        summary.to_string(),
        "Running; Duration: 0.750 h; Distance: 1.200 km; Avg speed: 1.600 km/h; Calories spent: 123.457."
    );
}

#[test]
fn swimming_reading_renders_end_to_end() {
    let record = WorkoutRecord::from_reading("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let summary = record.summarize().unwrap();

    assert_eq!(
        summary.to_string(),
        "Swimming; Duration: 1.000 h; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories spent: 336.000."
    );
}

#[test]
fn running_reading_renders_end_to_end() {
    let record = WorkoutRecord::from_reading("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    let summary = record.summarize().unwrap();

    assert_eq!(
        summary.to_string(),
        "Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories spent: 797.805."
    );
}

#[test]
fn summary_serializes_with_stable_field_names() {
    let record = WorkoutRecord::from_reading("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let summary = record.summarize().unwrap();

    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["activity"], "Swimming");
    assert!((value["duration_hours"].as_f64().unwrap() - 1.0).abs() < f64::EPSILON);
    assert!((value["mean_speed_kmh"].as_f64().unwrap() - 1.0).abs() < f64::EPSILON);
    assert!((value["calories_kcal"].as_f64().unwrap() - 336.0).abs() < f64::EPSILON);
    assert!(value["distance_km"].is_number());
}
