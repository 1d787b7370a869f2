// ABOUTME: Workout record factory mapping sensor codes and payloads to activity variants
// ABOUTME: Provides the WorkoutRecord enum and positional payload binding with arity checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Summary contributors

use tracing::{debug, warn};

use crate::calculations::WorkoutCompute;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityKind, Effort, Running, Swimming, Walking, WorkoutSummary};

/// One parsed workout reading, tagged by activity kind
///
/// Produced by [`WorkoutRecord::from_reading`]; delegates the whole
/// [`WorkoutCompute`] contract to the inner variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutRecord {
    /// Running session
    Running(Running),
    /// Sports-walking session
    Walking(Walking),
    /// Pool-swimming session
    Swimming(Swimming),
}

impl WorkoutRecord {
    /// Build a record from an activity code and an ordered numeric payload.
    ///
    /// Payload values bind positionally:
    ///
    /// | code  | payload order                                              |
    /// |-------|------------------------------------------------------------|
    /// | `RUN` | action_count, duration_hours, weight_kg                    |
    /// | `WLK` | action_count, duration_hours, weight_kg, height_cm         |
    /// | `SWM` | action_count, duration_hours, weight_kg, pool_length_m, pool_laps |
    ///
    /// No range validation happens here; non-positive divisors surface when
    /// the corresponding query runs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownActivityCode`] for an unrecognized code,
    /// [`AppError::PayloadArity`] when the payload length does not match the
    /// table above, and [`AppError::InvalidPayload`] when the first slot
    /// cannot represent a motion-unit count.
    pub fn from_reading(code: &str, payload: &[f64]) -> AppResult<Self> {
        let kind = code.parse::<ActivityKind>().map_err(|err| {
            warn!("rejected reading with activity code '{code}'");
            err
        })?;

        let expected = kind.payload_arity();
        if payload.len() != expected {
            warn!(
                "rejected {kind} reading: expected {expected} payload values, got {}",
                payload.len()
            );
            return Err(AppError::PayloadArity {
                kind,
                expected,
                actual: payload.len(),
            });
        }

        let action_count = bind_action_count(payload[0])?;
        let effort = Effort::new(action_count, payload[1], payload[2]);

        let record = match kind {
            ActivityKind::Running => Self::Running(Running { effort }),
            ActivityKind::Walking => Self::Walking(Walking {
                effort,
                height_cm: payload[3],
            }),
            ActivityKind::Swimming => Self::Swimming(Swimming {
                effort,
                pool_length_m: payload[3],
                pool_laps: payload[4],
            }),
        };
        debug!("parsed {kind} reading with {action_count} motion units");
        Ok(record)
    }

    /// Activity kind of this record
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        match self {
            Self::Running(_) => ActivityKind::Running,
            Self::Walking(_) => ActivityKind::Walking,
            Self::Swimming(_) => ActivityKind::Swimming,
        }
    }
}

impl WorkoutCompute for WorkoutRecord {
    fn effort(&self) -> &Effort {
        match self {
            Self::Running(r) => r.effort(),
            Self::Walking(w) => w.effort(),
            Self::Swimming(s) => s.effort(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Running(r) => r.label(),
            Self::Walking(w) => w.label(),
            Self::Swimming(s) => s.label(),
        }
    }

    fn step_length_m(&self) -> f64 {
        match self {
            Self::Running(r) => r.step_length_m(),
            Self::Walking(w) => w.step_length_m(),
            Self::Swimming(s) => s.step_length_m(),
        }
    }

    fn distance_km(&self) -> f64 {
        match self {
            Self::Running(r) => r.distance_km(),
            Self::Walking(w) => w.distance_km(),
            Self::Swimming(s) => s.distance_km(),
        }
    }

    fn mean_speed_kmh(&self) -> AppResult<f64> {
        match self {
            Self::Running(r) => r.mean_speed_kmh(),
            Self::Walking(w) => w.mean_speed_kmh(),
            Self::Swimming(s) => s.mean_speed_kmh(),
        }
    }

    fn spent_calories(&self) -> AppResult<f64> {
        match self {
            Self::Running(r) => r.spent_calories(),
            Self::Walking(w) => w.spent_calories(),
            Self::Swimming(s) => s.spent_calories(),
        }
    }

    fn summarize(&self) -> AppResult<WorkoutSummary> {
        match self {
            Self::Running(r) => r.summarize(),
            Self::Walking(w) => w.summarize(),
            Self::Swimming(s) => s.summarize(),
        }
    }
}

/// Bind the first payload slot to a motion-unit count.
///
/// Sensor payloads arrive as floats; a count must be a whole non-negative
/// number that fits in `u32`.
fn bind_action_count(value: f64) -> AppResult<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(AppError::invalid_payload(format!(
            "action count must be a whole non-negative number, got {value}"
        )));
    }
    if value > f64::from(u32::MAX) {
        return Err(AppError::invalid_payload(format!(
            "action count {value} exceeds the supported range"
        )));
    }
    // Safe: finiteness, sign, integrality, and range checked above
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = value as u32;
    Ok(count)
}
