//! Analysis entry points
//!
//! [`analyze`] derives the section and mass scalars, solves the
//! characteristic equation and assembles every result that is defined for
//! the given inputs. It holds no state between calls.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::analysis::characteristic::{self, MAX_MODES};
use crate::analysis::{damped, mode_shape, static_deflection, AnalysisOptions};
use crate::elements::{BeamProperties, BeamType};
use crate::error::VibrationResult;
use crate::results::{BeamResults, ModeRoot};

/// Natural frequency in Hz of root `bl`: bL²·√(EI/(ρA·L⁴)) / 2π
pub fn natural_frequency(bl: f64, ei: f64, mass_per_length: f64, length: f64) -> f64 {
    bl * bl * (ei / (mass_per_length * length.powi(4))).sqrt() / (2.0 * PI)
}

/// Analyze a beam with the default options.
///
/// Inputs are expected to be positive and finite; use [`try_analyze`] to
/// have them checked first.
pub fn analyze(
    beam_type: BeamType,
    properties: &BeamProperties,
    num_modes: usize,
) -> BeamResults {
    analyze_with(beam_type, properties, num_modes, &AnalysisOptions::default())
}

/// Validate the properties, then analyze with the default options
pub fn try_analyze(
    beam_type: BeamType,
    properties: &BeamProperties,
    num_modes: usize,
) -> VibrationResult<BeamResults> {
    properties.validate()?;
    Ok(analyze(beam_type, properties, num_modes))
}

/// Analyze a beam with explicit options
pub fn analyze_with(
    beam_type: BeamType,
    properties: &BeamProperties,
    num_modes: usize,
    options: &AnalysisOptions,
) -> BeamResults {
    let ei = properties.flexural_rigidity();
    let mass_per_length = properties.mass_per_length();
    let length = properties.length;
    log::debug!(
        "analyzing {beam_type} beam: L = {length} m, EI = {ei:e}, rhoA = {mass_per_length}"
    );

    let roots: Vec<ModeRoot> = characteristic::solve(beam_type, num_modes, options);
    if roots.len() < num_modes.min(MAX_MODES) {
        log::debug!("{} of {} requested modes converged", roots.len(), num_modes);
    }

    let natural_frequencies: Vec<f64> = roots
        .iter()
        .map(|root| natural_frequency(root.bl, ei, mass_per_length, length))
        .collect();

    let mode_shapes = roots
        .iter()
        .map(|root| mode_shape::mode_shape(beam_type, root, length, options.mode_shape_step))
        .collect();

    let static_deflection = static_deflection::deflect(
        beam_type,
        properties,
        options.static_load,
        options.static_samples,
    );

    let (damping_coefficient, damped_response) =
        match (properties.damping_ratio, natural_frequencies.first()) {
            (Some(zeta), Some(&f1)) => {
                let omega_1 = 2.0 * PI * f1;
                let coefficient = 2.0 * zeta * omega_1 * mass_per_length;
                let response = if zeta > 0.0 && zeta < 1.0 {
                    damped::simulate(
                        f1,
                        zeta,
                        options.response_duration(f1, zeta),
                        options.response_amplitude,
                        options.response_samples,
                        options.envelope_stride,
                    )
                } else {
                    None
                };
                (Some(coefficient), response)
            }
            _ => (None, None),
        };

    BeamResults {
        natural_frequencies,
        roots,
        mode_shapes,
        flexural_rigidity: ei,
        mass_per_length,
        static_deflection,
        damping_coefficient,
        damped_response,
    }
}

fn default_num_modes() -> usize {
    MAX_MODES
}

/// A self-contained analysis request, as received from JSON callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Boundary conditions
    pub beam_type: BeamType,
    /// Geometry, material and damping
    pub properties: BeamProperties,
    /// Number of modes to compute
    #[serde(default = "default_num_modes")]
    pub num_modes: usize,
    /// Analysis options (defaults when omitted)
    #[serde(default)]
    pub options: AnalysisOptions,
}

impl AnalysisRequest {
    /// Create a request with default options
    pub fn new(beam_type: BeamType, properties: BeamProperties, num_modes: usize) -> Self {
        Self {
            beam_type,
            properties,
            num_modes,
            options: AnalysisOptions::default(),
        }
    }

    /// Parse a request from JSON
    pub fn from_json(json: &str) -> VibrationResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the properties and options, then run the analysis
    pub fn run(&self) -> VibrationResult<BeamResults> {
        self.properties.validate()?;
        self.options.validate()?;
        self.options.check_span(self.properties.length)?;
        Ok(analyze_with(
            self.beam_type,
            &self.properties,
            self.num_modes,
            &self.options,
        ))
    }
}
