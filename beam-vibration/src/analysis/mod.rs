//! Analysis components and their options
//!
//! Each component is a pure function of its inputs:
//! - [`characteristic`] - roots of the frequency equation per boundary condition
//! - [`mode_shape`] - normalized eigenfunctions sampled along the span
//! - [`static_deflection`] - closed-form deflection under a point load
//! - [`damped`] - free decay of the fundamental mode

pub mod characteristic;
pub mod damped;
pub mod mode_shape;
pub mod static_deflection;

use serde::{Deserialize, Serialize};

use crate::error::{VibrationError, VibrationResult};
use crate::math::RootFinder;

/// Upper bound on mode shape samples per mode
pub const MAX_SHAPE_SAMPLES: usize = 1_000_000;

/// Options for a beam vibration analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Newton/bisection settings for the characteristic equation
    pub root_finder: RootFinder,
    /// Half width of the bracket around each tabulated root guess
    pub bracket_half_width: f64,
    /// Spacing of mode shape samples in m
    pub mode_shape_step: f64,
    /// Reference point load for the static deflection in N
    pub static_load: f64,
    /// Number of static deflection samples
    pub static_samples: usize,
    /// Number of time samples in the damped response
    pub response_samples: usize,
    /// Envelope keeps every n-th time sample
    pub envelope_stride: usize,
    /// Initial displacement of the damped response in m
    pub response_amplitude: f64,
    /// Shortest simulated duration in s
    pub min_duration: f64,
    /// Longest simulated duration in s
    pub max_duration: f64,
    /// Simulate at least this many undamped periods
    pub duration_periods: f64,
    /// Simulate at least this many decay time constants
    pub duration_time_constants: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            root_finder: RootFinder::default(),
            bracket_half_width: 0.5,
            mode_shape_step: 0.01,
            static_load: 1000.0,
            static_samples: 301,
            response_samples: 1001,
            envelope_stride: 10,
            response_amplitude: 1.0,
            min_duration: 5.0,
            max_duration: 60.0,
            duration_periods: 15.0,
            duration_time_constants: 3.0,
        }
    }
}

impl AnalysisOptions {
    /// Set root tolerance on |f(bL)|
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.root_finder.tolerance = tol;
        self
    }

    /// Set maximum root-finder iterations
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.root_finder.max_iterations = max_iter;
        self
    }

    /// Set mode shape sample spacing
    pub fn with_mode_shape_step(mut self, step: f64) -> Self {
        self.mode_shape_step = step;
        self
    }

    /// Set the static reference load
    pub fn with_static_load(mut self, load: f64) -> Self {
        self.static_load = load;
        self
    }

    /// Set the initial amplitude of the damped response
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.response_amplitude = amplitude;
        self
    }

    /// Check that every option describes a usable grid or search.
    ///
    /// Steps and widths must be positive and finite, sampled curves need at
    /// least two points and the envelope stride must be non-zero.
    pub fn validate(&self) -> VibrationResult<()> {
        let finder = &self.root_finder;
        for (field, value) in [
            ("root_finder.tolerance", finder.tolerance),
            ("root_finder.derivative_step", finder.derivative_step),
            ("bracket_half_width", self.bracket_half_width),
            ("mode_shape_step", self.mode_shape_step),
            ("min_duration", self.min_duration),
            ("max_duration", self.max_duration),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(VibrationError::InvalidInput(format!(
                    "{field} must be positive, got {value}"
                )));
            }
        }

        for (field, value) in [
            ("root_finder.min_slope", finder.min_slope),
            ("duration_periods", self.duration_periods),
            ("duration_time_constants", self.duration_time_constants),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(VibrationError::InvalidInput(format!(
                    "{field} must be non-negative, got {value}"
                )));
            }
        }

        for (field, value) in [
            ("static_load", self.static_load),
            ("response_amplitude", self.response_amplitude),
        ] {
            if !value.is_finite() {
                return Err(VibrationError::InvalidInput(format!(
                    "{field} must be finite, got {value}"
                )));
            }
        }

        for (field, value) in [
            ("static_samples", self.static_samples),
            ("response_samples", self.response_samples),
        ] {
            if value < 2 {
                return Err(VibrationError::InvalidInput(format!(
                    "{field} must be at least 2, got {value}"
                )));
            }
        }

        if self.envelope_stride == 0 {
            return Err(VibrationError::InvalidInput(
                "envelope_stride must be at least 1".to_string(),
            ));
        }

        if self.max_duration < self.min_duration {
            return Err(VibrationError::InvalidInput(format!(
                "max_duration {} is below min_duration {}",
                self.max_duration, self.min_duration
            )));
        }

        Ok(())
    }

    /// Check that sampling a span of `length` m stays within
    /// [`MAX_SHAPE_SAMPLES`] per mode shape
    pub fn check_span(&self, length: f64) -> VibrationResult<()> {
        let samples = length / self.mode_shape_step;
        if samples > MAX_SHAPE_SAMPLES as f64 {
            return Err(VibrationError::InvalidInput(format!(
                "mode_shape_step {} gives {samples:.0} samples over {length} m, limit is {}",
                self.mode_shape_step, MAX_SHAPE_SAMPLES
            )));
        }
        Ok(())
    }

    /// Time span over which to simulate free decay.
    ///
    /// Long enough for the configured number of periods and decay time
    /// constants, clamped to `[min_duration, max_duration]`.
    pub fn response_duration(&self, natural_frequency: f64, zeta: f64) -> f64 {
        let omega_n = 2.0 * std::f64::consts::PI * natural_frequency;
        let period = 1.0 / natural_frequency;
        let time_constant = 1.0 / (zeta * omega_n);

        (self.duration_periods * period)
            .max(self.duration_time_constants * time_constant)
            .max(self.min_duration)
            .min(self.max_duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_duration_floor() {
        // Stiff, well damped: both criteria are well under 5 s
        let opts = AnalysisOptions::default();
        assert_eq!(opts.response_duration(62.0, 0.05), 5.0);
    }

    #[test]
    fn test_duration_periods_and_decay() {
        let opts = AnalysisOptions::default();

        // 15 periods of a 1 Hz mode
        assert_relative_eq!(opts.response_duration(1.0, 0.9), 15.0, epsilon = 1e-12);

        // 3 time constants at 2 Hz, zeta = 0.01
        let expected = 3.0 / (0.01 * 2.0 * PI * 2.0);
        assert_relative_eq!(opts.response_duration(2.0, 0.01), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_duration_ceiling() {
        let opts = AnalysisOptions::default();
        assert_eq!(opts.response_duration(0.1, 0.001), 60.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let opts: AnalysisOptions = serde_json::from_str(r#"{"static_load": 500.0}"#).unwrap();
        assert_eq!(opts.static_load, 500.0);
        assert_eq!(opts.static_samples, 301);
        assert_eq!(opts.root_finder, RootFinder::default());
    }

    #[test]
    fn test_defaults_are_valid() {
        let opts = AnalysisOptions::default();
        assert!(opts.validate().is_ok());
        assert!(opts.check_span(2.0).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_step() {
        for step in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let opts = AnalysisOptions::default().with_mode_shape_step(step);
            assert!(
                matches!(opts.validate(), Err(VibrationError::InvalidInput(_))),
                "step {step}"
            );
        }
    }

    #[test]
    fn test_validate_rejects_short_grids() {
        let opts = AnalysisOptions {
            static_samples: 1,
            ..AnalysisOptions::default()
        };
        assert!(matches!(opts.validate(), Err(VibrationError::InvalidInput(_))));

        let opts = AnalysisOptions {
            response_samples: 0,
            ..AnalysisOptions::default()
        };
        assert!(matches!(opts.validate(), Err(VibrationError::InvalidInput(_))));

        let opts = AnalysisOptions {
            envelope_stride: 0,
            ..AnalysisOptions::default()
        };
        assert!(matches!(opts.validate(), Err(VibrationError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_durations() {
        let opts = AnalysisOptions {
            min_duration: 10.0,
            max_duration: 5.0,
            ..AnalysisOptions::default()
        };
        assert!(matches!(opts.validate(), Err(VibrationError::InvalidInput(_))));
    }

    #[test]
    fn test_check_span_limits_samples() {
        let opts = AnalysisOptions::default().with_mode_shape_step(1e-9);
        assert!(opts.validate().is_ok());
        assert!(matches!(opts.check_span(2.0), Err(VibrationError::InvalidInput(_))));
        assert!(opts.check_span(1e-4).is_ok());
    }
}
