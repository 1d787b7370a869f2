// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, stride lengths, and calorie formula coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Summary contributors

//! Constants grouped by domain rather than kept in a single flat list.
//!
//! The calorie coefficients are the published ones for each activity's
//! metabolic formula; they are not configurable.

/// Unit conversion constants
pub mod units {
    /// Meters per kilometer
    pub const M_IN_KM: f64 = 1000.0;
    /// Minutes per hour
    pub const MIN_IN_H: f64 = 60.0;
    /// Centimeters per meter
    pub const CM_IN_M: f64 = 100.0;
    /// km/h to m/s conversion factor
    pub const KMH_TO_MS: f64 = 0.278;
}

/// Distance covered by one discrete motion unit
pub mod stride {
    /// One step, in meters (running and walking)
    pub const STEP_LENGTH_M: f64 = 0.65;
    /// One swim stroke, in meters
    pub const STROKE_LENGTH_M: f64 = 1.38;
}

/// Running calorie formula coefficients
pub mod running {
    /// Multiplier applied to mean speed (km/h)
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    /// Additive shift applied after the speed term
    pub const SPEED_SHIFT: f64 = 1.79;
}

/// Walking calorie formula coefficients
pub mod walking {
    /// Multiplier applied to body weight (kg)
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Multiplier applied to the squared-speed-over-height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie formula coefficients
pub mod swimming {
    /// Additive shift applied to mean speed (km/h)
    pub const SPEED_SHIFT: f64 = 1.1;
    /// Multiplier applied to body weight (kg)
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}
