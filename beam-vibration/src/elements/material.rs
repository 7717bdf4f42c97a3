//! Material properties

use serde::{Deserialize, Serialize};

/// Material properties for a vibrating beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity (Young's modulus) in Pa
    pub e: f64,
    /// Density in kg/m³
    pub rho: f64,
}

impl Material {
    /// Create a new material with given properties
    pub fn new(e: f64, rho: f64) -> Self {
        Self { e, rho }
    }

    /// Create a structural steel material
    pub fn steel() -> Self {
        Self {
            e: 2.05e11,   // 205 GPa
            rho: 7830.0,  // kg/m³
        }
    }

    /// Create an aluminum material (6061-T6)
    pub fn aluminum() -> Self {
        Self {
            e: 68.9e9,    // 68.9 GPa
            rho: 2700.0,  // kg/m³
        }
    }

    /// Speed of longitudinal waves, sqrt(E / rho), in m/s
    pub fn wave_speed(&self) -> f64 {
        (self.e / self.rho).sqrt()
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::steel()
    }
}
