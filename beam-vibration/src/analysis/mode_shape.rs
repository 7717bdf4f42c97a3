//! Analytic mode shapes
//!
//! With b = bL / L the eigenfunction of every supported boundary condition is
//! a combination of sin(bx), cos(bx), sinh(bx) and cosh(bx). Samples are
//! scaled so that the largest magnitude is exactly 1.

use crate::elements::BeamType;
use crate::math::stepped_positions;
use crate::results::{ModeRoot, ModeShape};

/// Below this the shape coefficient loses precision
const SMALL_DENOMINATOR: f64 = 1e-9;

/// Coefficient `a` mixing the trigonometric and hyperbolic terms
fn shape_coefficient(beam_type: BeamType, bl: f64) -> f64 {
    let (numerator, denominator) = match beam_type {
        BeamType::Cantilever => (bl.sin() + bl.sinh(), bl.cos() + bl.cosh()),
        BeamType::FixedFixed => (bl.cosh() - bl.cos(), bl.sinh() - bl.sin()),
        BeamType::FixedPinned => return bl.tanh(),
        BeamType::SimplySupported => return 0.0,
    };

    if denominator.abs() < SMALL_DENOMINATOR {
        log::warn!(
            "{beam_type} shape coefficient at bL = {bl} divides by {denominator:e}; \
             mode shape may be inaccurate"
        );
    }
    numerator / denominator
}

/// Unnormalized eigenfunction at `bx` for a precomputed coefficient
fn eigenfunction(beam_type: BeamType, a: f64, bx: f64) -> f64 {
    let (c, s, ch, sh) = (bx.cos(), bx.sin(), bx.cosh(), bx.sinh());
    match beam_type {
        BeamType::Cantilever => (s - sh) - a * (c - ch),
        BeamType::SimplySupported => s,
        BeamType::FixedFixed => (c - ch) - a * (s - sh),
        BeamType::FixedPinned => s - a * sh,
    }
}

/// Scale samples so the largest magnitude is 1; all-zero input is left alone.
pub fn normalize(w: &mut [f64]) {
    let peak = w.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if peak > 0.0 {
        w.iter_mut().for_each(|v| *v /= peak);
    }
}

/// Sample the normalized mode shape for root `bl` every `step` along `length`.
///
/// Returns `(positions, displacements)`.
pub fn shape(beam_type: BeamType, bl: f64, length: f64, step: f64) -> (Vec<f64>, Vec<f64>) {
    let b = bl / length;
    let a = shape_coefficient(beam_type, bl);

    let positions = stepped_positions(length, step);
    let mut displacements: Vec<f64> = positions
        .iter()
        .map(|&x| eigenfunction(beam_type, a, b * x))
        .collect();
    normalize(&mut displacements);

    (positions, displacements)
}

/// Build the [`ModeShape`] record for a converged root
pub fn mode_shape(beam_type: BeamType, root: &ModeRoot, length: f64, step: f64) -> ModeShape {
    let (positions, displacements) = shape(beam_type, root.bl, length, step);
    ModeShape {
        mode: root.mode,
        bl: root.bl,
        positions,
        displacements,
    }
}
