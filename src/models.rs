// ABOUTME: Activity kind enumeration and workout record value objects
// ABOUTME: Defines the shared effort base, the three activity variants, and the summary report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Summary contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Enumeration of the supported activity types
///
/// Each kind maps to a fixed three-letter sensor code and a fixed payload
/// arity; see [`ActivityKind::code`] and [`ActivityKind::payload_arity`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Running activity
    Running,
    /// Sports walking activity
    Walking,
    /// Pool swimming activity
    Swimming,
}

impl ActivityKind {
    /// Three-letter sensor code for this kind
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Walking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Human-readable display label used in rendered reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "Walking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of values a reading payload must carry for this kind
    #[must_use]
    pub const fn payload_arity(self) -> usize {
        match self {
            Self::Running => 3,
            Self::Walking => 4,
            Self::Swimming => 5,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::Walking),
            "SWM" => Ok(Self::Swimming),
            other => Err(AppError::UnknownActivityCode {
                code: other.to_owned(),
            }),
        }
    }
}

/// Shared raw inputs common to every activity
///
/// Embedded by value in each concrete variant. Values are bound positionally
/// from the sensor payload and are not range-checked at construction;
/// non-positive divisors surface as errors at query time instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Effort {
    /// Number of discrete motion units (steps or strokes)
    pub action_count: u32,
    /// Elapsed time in hours
    pub duration_hours: f64,
    /// Body weight in kg
    pub weight_kg: f64,
}

impl Effort {
    /// Create a new effort base
    #[must_use]
    pub const fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

/// A running session; carries no fields beyond the shared effort
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Running {
    /// Shared raw inputs
    pub effort: Effort,
}

/// A sports-walking session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Walking {
    /// Shared raw inputs
    pub effort: Effort,
    /// Athlete height in cm, consumed only by the calorie formula
    pub height_cm: f64,
}

/// A pool-swimming session
///
/// Mean speed is derived from pool geometry rather than stroke count, so
/// `action_count` does not participate in the speed or calorie formulas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Swimming {
    /// Shared raw inputs
    pub effort: Effort,
    /// Pool length in meters
    pub pool_length_m: f64,
    /// Number of laps swum
    pub pool_laps: f64,
}

/// Computed, immutable summary of one workout session
///
/// Produced fresh on every [`summarize`](crate::calculations::WorkoutCompute::summarize)
/// call; never cached or mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSummary {
    /// Display label of the activity variant
    pub activity: String,
    /// Elapsed time in hours
    pub duration_hours: f64,
    /// Distance covered in km
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Energy spent in kcal
    pub calories_kcal: f64,
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories spent: {:.3}.",
            self.activity,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}
