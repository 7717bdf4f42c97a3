//! Beam Vibration - Euler-Bernoulli vibration analysis of uniform beams
//!
//! This library computes, for a single-span rectangular beam:
//! - Natural frequencies from the characteristic equation of the supports
//! - Normalized analytic mode shapes
//! - Static deflection under a reference point load
//! - Free decay of the fundamental mode for a given damping ratio
//!
//! Supported boundary conditions are cantilever, simply-supported,
//! fixed-fixed and fixed-pinned.
//!
//! ## Example
//! ```rust
//! use beam_vibration::prelude::*;
//!
//! // 2 m steel cantilever, 100 x 300 mm section, 2% damping
//! let beam = BeamProperties::new(2.0, 0.1, 0.3, 2.05e11, 7830.0).with_damping(0.02);
//!
//! let results = analyze(BeamType::Cantilever, &beam, 3);
//!
//! assert_eq!(results.natural_frequencies.len(), 3);
//! assert!(results.static_deflection.is_some());
//! assert!(results.damped_response.is_some());
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::characteristic::{characteristic_function, MAX_MODES};
    pub use crate::analysis::AnalysisOptions;
    pub use crate::elements::{BeamProperties, BeamType, Material, Section};
    pub use crate::error::{VibrationError, VibrationResult};
    pub use crate::model::{analyze, analyze_with, try_analyze, AnalysisRequest};
    pub use crate::results::{
        AnalysisSummary, BeamResults, DampedResponse, EnvelopePoint, ModeRoot, ModeShape,
        StaticDeflection,
    };
}

#[cfg(feature = "wasm")]
pub mod wasm;
