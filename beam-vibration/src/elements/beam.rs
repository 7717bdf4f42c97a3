//! Beam boundary conditions and physical properties

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Material, Section};
use crate::error::{VibrationError, VibrationResult};

/// Boundary-condition family of a single-span beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BeamType {
    /// Fixed at x = 0, free at x = L
    Cantilever,
    /// Pinned at both ends
    SimplySupported,
    /// Clamped at both ends
    FixedFixed,
    /// Clamped at x = 0, pinned at x = L
    FixedPinned,
}

impl BeamType {
    /// Every supported boundary condition
    pub const ALL: [BeamType; 4] = [
        BeamType::Cantilever,
        BeamType::SimplySupported,
        BeamType::FixedFixed,
        BeamType::FixedPinned,
    ];

    /// Kebab-case name, as used in JSON
    pub fn name(&self) -> &'static str {
        match self {
            BeamType::Cantilever => "cantilever",
            BeamType::SimplySupported => "simply-supported",
            BeamType::FixedFixed => "fixed-fixed",
            BeamType::FixedPinned => "fixed-pinned",
        }
    }
}

impl Default for BeamType {
    fn default() -> Self {
        Self::Cantilever
    }
}

impl fmt::Display for BeamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BeamType {
    type Err = VibrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        BeamType::ALL
            .into_iter()
            .find(|t| t.name() == normalized)
            .ok_or_else(|| VibrationError::UnknownBeamType(s.to_string()))
    }
}

/// Geometry and material of a uniform rectangular beam (SI units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamProperties {
    /// Span in m
    pub length: f64,
    /// Section width in m
    pub width: f64,
    /// Section depth in m
    pub depth: f64,
    /// Young's modulus in Pa
    pub youngs_modulus: f64,
    /// Density in kg/m³
    pub density: f64,
    /// Damping ratio ζ, expected in (0, 1)
    #[serde(default)]
    pub damping_ratio: Option<f64>,
}

impl BeamProperties {
    /// Create undamped beam properties
    pub fn new(length: f64, width: f64, depth: f64, youngs_modulus: f64, density: f64) -> Self {
        Self {
            length,
            width,
            depth,
            youngs_modulus,
            density,
            damping_ratio: None,
        }
    }

    /// Build properties from a section and a material
    pub fn from_parts(length: f64, section: Section, material: Material) -> Self {
        Self::new(length, section.width, section.depth, material.e, material.rho)
    }

    /// Set the damping ratio
    pub fn with_damping(mut self, zeta: f64) -> Self {
        self.damping_ratio = Some(zeta);
        self
    }

    /// Cross-section of the beam
    pub fn section(&self) -> Section {
        Section::rectangular(self.width, self.depth)
    }

    /// Material of the beam
    pub fn material(&self) -> Material {
        Material::new(self.youngs_modulus, self.density)
    }

    /// Flexural rigidity EI in N·m²
    pub fn flexural_rigidity(&self) -> f64 {
        self.youngs_modulus * self.section().second_moment()
    }

    /// Mass per unit length ρA in kg/m
    pub fn mass_per_length(&self) -> f64 {
        self.density * self.section().area()
    }

    /// Check that geometry and material are positive and finite.
    ///
    /// A damping ratio, when present, must be finite and non-negative. Values
    /// of 1 or more are accepted here; the damped response is then simply
    /// omitted from the results.
    pub fn validate(&self) -> VibrationResult<()> {
        for (field, value) in [
            ("length", self.length),
            ("width", self.width),
            ("depth", self.depth),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(VibrationError::InvalidGeometry(format!(
                    "{field} must be positive, got {value}"
                )));
            }
        }

        for (field, value) in [
            ("youngs_modulus", self.youngs_modulus),
            ("density", self.density),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(VibrationError::InvalidMaterial(format!(
                    "{field} must be positive, got {value}"
                )));
            }
        }

        if let Some(zeta) = self.damping_ratio {
            if !(zeta.is_finite() && zeta >= 0.0) {
                return Err(VibrationError::InvalidInput(format!(
                    "damping_ratio must be non-negative, got {zeta}"
                )));
            }
        }

        Ok(())
    }
}
