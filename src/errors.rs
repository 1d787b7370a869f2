// ABOUTME: Error types for workout record construction and summary computation
// ABOUTME: Provides the AppError enum and AppResult alias used across the crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Summary contributors

use thiserror::Error;

use crate::models::ActivityKind;

/// Result alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Errors produced while constructing workout records or computing summaries.
///
/// Every error is terminal for the single reading being processed; a batch
/// caller drops the failed reading and continues with the rest.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Activity code is not in the recognized set
    #[error("unknown activity code '{code}'. Valid options: RUN, WLK, SWM")]
    UnknownActivityCode {
        /// The unrecognized code as supplied by the caller
        code: String,
    },

    /// Payload length does not match the selected activity's field count
    #[error("{kind} readings carry {expected} values, got {actual}")]
    PayloadArity {
        /// Activity the payload was meant for
        kind: ActivityKind,
        /// Number of values the activity requires
        expected: usize,
        /// Number of values actually supplied
        actual: usize,
    },

    /// A payload value cannot be bound to its field
    #[error("invalid payload: {reason}")]
    InvalidPayload {
        /// Why the value was rejected
        reason: String,
    },

    /// Calorie computation invoked on a contract with no concrete formula
    #[error("spent_calories is not implemented for {label}")]
    UnsupportedOperation {
        /// Display name of the offending variant
        label: String,
    },

    /// Duration cannot serve as a divisor for mean speed
    #[error("duration of {duration_hours} h cannot produce a mean speed")]
    InvalidDuration {
        /// The rejected duration value
        duration_hours: f64,
    },

    /// Height cannot serve as a divisor in the walking calorie formula
    #[error("height of {height_cm} cm cannot be used for calorie computation")]
    InvalidHeight {
        /// The rejected height value
        height_cm: f64,
    },
}

impl AppError {
    /// Create an [`AppError::InvalidPayload`] with the given reason
    pub fn invalid_payload(reason: impl Into<String>) -> Self {
        Self::InvalidPayload {
            reason: reason.into(),
        }
    }
}
