//! Result types for beam vibration analysis

use serde::{Deserialize, Serialize};

/// A converged root of the characteristic equation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeRoot {
    /// 1-based mode number
    pub mode: usize,
    /// Dimensionless root bL
    pub bl: f64,
}

/// Normalized mode shape sampled along the span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeShape {
    /// 1-based mode number
    pub mode: usize,
    /// Root the shape was computed from
    pub bl: f64,
    /// Sample positions in m
    pub positions: Vec<f64>,
    /// Displacements scaled to a peak magnitude of 1
    pub displacements: Vec<f64>,
}

impl ModeShape {
    /// Number of interior sign changes (nodes) in the sampled shape
    pub fn node_count(&self) -> usize {
        self.displacements
            .iter()
            .filter(|w| w.abs() > 1e-9)
            .collect::<Vec<_>>()
            .windows(2)
            .filter(|p| p[0].signum() != p[1].signum())
            .count()
    }
}

/// Deflected shape under the reference point load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticDeflection {
    /// Sample positions in m
    pub positions: Vec<f64>,
    /// Deflection at each position in m (positive in the load direction)
    pub deflections: Vec<f64>,
    /// Deflection of largest magnitude in m
    pub max_deflection: f64,
    /// Position of the largest deflection in m
    pub max_position: f64,
}

/// Decay envelope at one time sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopePoint {
    /// Time in s
    pub time: f64,
    /// A·e^(−ζω_n t)
    pub upper: f64,
    /// −A·e^(−ζω_n t)
    pub lower: f64,
}

/// Free decay of the fundamental mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DampedResponse {
    /// Sample times in s
    pub times: Vec<f64>,
    /// Displacement at each time in m
    pub displacements: Vec<f64>,
    /// Envelope on a coarser time grid
    pub envelope: Vec<EnvelopePoint>,
    /// Damping ratio ζ
    pub damping_ratio: f64,
    /// Undamped natural frequency in Hz
    pub natural_frequency: f64,
    /// Damped natural frequency in Hz
    pub damped_frequency: f64,
}

/// Complete output of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResults {
    /// Natural frequencies in Hz, one per converged root
    pub natural_frequencies: Vec<f64>,
    /// Converged roots in mode order
    pub roots: Vec<ModeRoot>,
    /// Mode shapes, one per converged root
    pub mode_shapes: Vec<ModeShape>,
    /// Flexural rigidity EI in N·m²
    pub flexural_rigidity: f64,
    /// Mass per unit length ρA in kg/m
    pub mass_per_length: f64,
    /// Static deflection under the reference load
    pub static_deflection: Option<StaticDeflection>,
    /// Viscous damping coefficient 2ζω₁·ρA
    pub damping_coefficient: Option<f64>,
    /// Free decay of the first mode
    pub damped_response: Option<DampedResponse>,
}

impl BeamResults {
    /// Fundamental (lowest) natural frequency in Hz
    pub fn fundamental_frequency(&self) -> Option<f64> {
        self.natural_frequencies.first().copied()
    }

    /// Headline numbers of the analysis
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            num_modes: self.natural_frequencies.len(),
            fundamental_frequency: self.fundamental_frequency(),
            max_static_deflection: self.static_deflection.as_ref().map(|s| s.max_deflection),
            max_deflection_position: self.static_deflection.as_ref().map(|s| s.max_position),
            damped_frequency: self.damped_response.as_ref().map(|r| r.damped_frequency),
        }
    }
}

/// Summary of analysis results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Number of converged modes
    pub num_modes: usize,
    /// First natural frequency in Hz
    pub fundamental_frequency: Option<f64>,
    /// Peak static deflection in m
    pub max_static_deflection: Option<f64>,
    /// Position of the peak static deflection in m
    pub max_deflection_position: Option<f64>,
    /// Damped frequency of the first mode in Hz
    pub damped_frequency: Option<f64>,
}
