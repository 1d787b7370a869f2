// ABOUTME: Shared computation contract for workout records and the per-activity formulas
// ABOUTME: Implements distance, mean speed, and calorie calculations for running, walking, swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Summary contributors

use crate::constants::{running, stride, swimming, units, walking};
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityKind, Effort, Running, Swimming, Walking, WorkoutSummary};

/// Shared distance/speed/calorie contract for one workout session.
///
/// `distance_km`, `mean_speed_kmh`, and `summarize` are provided; every
/// concrete variant supplies `spent_calories` (the default fails with
/// [`AppError::UnsupportedOperation`] naming the variant) and Swimming
/// additionally overrides `mean_speed_kmh` with a pool-geometry formula.
pub trait WorkoutCompute {
    /// Shared raw inputs for this session
    fn effort(&self) -> &Effort;

    /// Display name of the variant, used in reports and diagnostics
    fn label(&self) -> &'static str;

    /// Distance covered by one motion unit, in meters
    fn step_length_m(&self) -> f64 {
        stride::STEP_LENGTH_M
    }

    /// Distance covered during the session, in km
    fn distance_km(&self) -> f64 {
        f64::from(self.effort().action_count) * self.step_length_m() / units::M_IN_KM
    }

    /// Duration validated for use as a divisor
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidDuration`] for non-positive or non-finite
    /// durations, so a zero reading surfaces as a failure instead of an
    /// infinite speed.
    fn checked_duration_hours(&self) -> AppResult<f64> {
        let duration_hours = self.effort().duration_hours;
        if !duration_hours.is_finite() || duration_hours <= 0.0 {
            return Err(AppError::InvalidDuration { duration_hours });
        }
        Ok(duration_hours)
    }

    /// Mean speed over the session, in km/h
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidDuration`] if the duration cannot serve as
    /// a divisor.
    fn mean_speed_kmh(&self) -> AppResult<f64> {
        Ok(self.distance_km() / self.checked_duration_hours()?)
    }

    /// Energy spent during the session, in kcal
    ///
    /// # Errors
    ///
    /// The default implementation always returns
    /// [`AppError::UnsupportedOperation`] carrying [`Self::label`]; concrete
    /// variants override it with their formula and propagate the divisor
    /// errors of the terms they consume.
    fn spent_calories(&self) -> AppResult<f64> {
        Err(AppError::UnsupportedOperation {
            label: self.label().to_owned(),
        })
    }

    /// Assemble the summary report for this session
    ///
    /// Queries distance, mean speed, and calories in that order; allocates a
    /// fresh value object on every call.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the individual queries.
    fn summarize(&self) -> AppResult<WorkoutSummary> {
        let distance_km = self.distance_km();
        let mean_speed_kmh = self.mean_speed_kmh()?;
        let calories_kcal = self.spent_calories()?;
        Ok(WorkoutSummary {
            activity: self.label().to_owned(),
            duration_hours: self.effort().duration_hours,
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        })
    }
}

impl WorkoutCompute for Running {
    fn effort(&self) -> &Effort {
        &self.effort
    }

    fn label(&self) -> &'static str {
        ActivityKind::Running.label()
    }

    /// `((18 * speed) + 1.79) * weight / 1000 * duration_min`
    fn spent_calories(&self) -> AppResult<f64> {
        let speed = self.mean_speed_kmh()?;
        Ok(
            running::SPEED_MULTIPLIER.mul_add(speed, running::SPEED_SHIFT) * self.effort.weight_kg
                / units::M_IN_KM
                * self.effort.duration_hours
                * units::MIN_IN_H,
        )
    }
}

impl WorkoutCompute for Walking {
    fn effort(&self) -> &Effort {
        &self.effort
    }

    fn label(&self) -> &'static str {
        ActivityKind::Walking.label()
    }

    /// `(0.035*weight + (speed_ms^2 / height_m) * 0.029 * weight) * duration_min`
    fn spent_calories(&self) -> AppResult<f64> {
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(AppError::InvalidHeight {
                height_cm: self.height_cm,
            });
        }
        let speed_ms = self.mean_speed_kmh()? * units::KMH_TO_MS;
        let height_m = self.height_cm / units::CM_IN_M;
        Ok(walking::WEIGHT_MULTIPLIER.mul_add(
            self.effort.weight_kg,
            speed_ms.powi(2) / height_m
                * walking::SPEED_HEIGHT_MULTIPLIER
                * self.effort.weight_kg,
        ) * (self.effort.duration_hours * units::MIN_IN_H))
    }
}

impl WorkoutCompute for Swimming {
    fn effort(&self) -> &Effort {
        &self.effort
    }

    fn label(&self) -> &'static str {
        ActivityKind::Swimming.label()
    }

    // Unused by the overridden speed formula; kept for interface symmetry.
    fn step_length_m(&self) -> f64 {
        stride::STROKE_LENGTH_M
    }

    /// `pool_length_m * pool_laps / 1000 / duration`, independent of stroke count
    fn mean_speed_kmh(&self) -> AppResult<f64> {
        let duration_hours = self.checked_duration_hours()?;
        Ok(self.pool_length_m * self.pool_laps / units::M_IN_KM / duration_hours)
    }

    /// `(speed + 1.1) * 2 * weight * duration`
    fn spent_calories(&self) -> AppResult<f64> {
        let speed = self.mean_speed_kmh()?;
        Ok((speed + swimming::SPEED_SHIFT)
            * swimming::WEIGHT_MULTIPLIER
            * self.effort.weight_kg
            * self.effort.duration_hours)
    }
}
