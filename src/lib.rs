// ABOUTME: Workout summary statistics library for running, walking, and swimming readings
// ABOUTME: Maps sensor codes and numeric payloads to records and computes distance, speed, calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Summary contributors

//! Workout summary statistics from raw sensor readings.
//!
//! A reading is an activity code (`RUN`, `WLK`, `SWM`) plus an ordered
//! numeric payload. [`WorkoutRecord::from_reading`] binds the payload into
//! the matching activity variant, and the [`WorkoutCompute`] contract
//! produces distance, mean speed, calories, and a rendered
//! [`WorkoutSummary`]:
//!
//! ```
//! use workout_summary::{WorkoutCompute, WorkoutRecord};
//!
//! # fn example() -> workout_summary::AppResult<()> {
//! let record = WorkoutRecord::from_reading("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])?;
//! let summary = record.summarize()?;
//! assert!((summary.mean_speed_kmh - 1.0).abs() < f64::EPSILON);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

/// Per-activity computation formulas and the shared contract
pub mod calculations;
/// Unit conversions, stride lengths, and calorie coefficients
pub mod constants;
/// Error taxonomy for construction and computation failures
pub mod errors;
/// Activity kinds, record variants, and the summary value object
pub mod models;
/// Factory from raw readings to tagged records
pub mod record;

pub use calculations::WorkoutCompute;
pub use errors::{AppError, AppResult};
pub use models::{ActivityKind, Effort, Running, Swimming, Walking, WorkoutSummary};
pub use record::WorkoutRecord;
