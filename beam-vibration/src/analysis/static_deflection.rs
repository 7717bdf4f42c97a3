//! Static deflection under a single reference point load
//!
//! The load sits at the free end of a cantilever and at midspan for the other
//! supports. Midspan cases are symmetric, so positions past midspan are
//! evaluated at `L - x`.
//!
//! The fixed-fixed and fixed-pinned curves reuse the simply-supported
//! midspan polynomial with a stiffer leading coefficient. This is an
//! approximation: it matches the fixed-fixed midspan deflection PL³/192EI but
//! not the curve's shape near the clamps.

use crate::elements::{BeamProperties, BeamType};
use crate::math::linspace;
use crate::results::StaticDeflection;

/// Deflection at `x` for load `p` (positive in the load direction)
pub fn deflection_at(beam_type: BeamType, p: f64, ei: f64, length: f64, x: f64) -> f64 {
    let l = length;
    let midspan = |denominator: f64| {
        let x = if x <= l / 2.0 { x } else { l - x };
        p / (denominator * ei) * (3.0 * l * l * x - 4.0 * x.powi(3))
    };

    match beam_type {
        BeamType::Cantilever => p / (6.0 * ei) * (3.0 * l * x * x - x.powi(3)),
        BeamType::SimplySupported => midspan(48.0),
        BeamType::FixedFixed => midspan(192.0),
        BeamType::FixedPinned => midspan(96.0),
    }
}

/// Sample the deflection curve under `load` at `samples` points over `[0, L]`.
///
/// Returns `None` when the flexural rigidity or the length is not positive.
pub fn deflect(
    beam_type: BeamType,
    properties: &BeamProperties,
    load: f64,
    samples: usize,
) -> Option<StaticDeflection> {
    let ei = properties.flexural_rigidity();
    let length = properties.length;
    if !(ei > 0.0 && length > 0.0) {
        log::debug!("skipping static deflection: EI = {ei}, L = {length}");
        return None;
    }

    let positions = linspace(0.0, length, samples);
    let deflections: Vec<f64> = positions
        .iter()
        .map(|&x| deflection_at(beam_type, load, ei, length, x))
        .collect();

    let mut max_deflection = 0.0_f64;
    let mut max_position = 0.0;
    for (&x, &y) in positions.iter().zip(&deflections) {
        if y.abs() > max_deflection.abs() {
            max_deflection = y;
            max_position = x;
        }
    }

    Some(StaticDeflection {
        positions,
        deflections,
        max_deflection,
        max_position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn beam() -> BeamProperties {
        BeamProperties::new(3.0, 0.1, 0.2, 2.0e11, 7850.0)
    }

    #[test]
    fn test_cantilever_tip_deflection() {
        let props = beam();
        let ei = props.flexural_rigidity();
        let result = deflect(BeamType::Cantilever, &props, 1000.0, 301).unwrap();

        // PL³/3EI at the free end
        let expected = 1000.0 * 27.0 / (3.0 * ei);
        assert_eq!(result.max_position, 3.0);
        assert_relative_eq!(result.max_deflection, expected, max_relative = 1e-12);
        assert_eq!(result.deflections[0], 0.0);
    }

    #[test]
    fn test_midspan_peaks() {
        let props = beam();
        let ei = props.flexural_rigidity();
        for (beam_type, denominator) in [
            (BeamType::SimplySupported, 48.0),
            (BeamType::FixedFixed, 192.0),
            (BeamType::FixedPinned, 96.0),
        ] {
            let result = deflect(beam_type, &props, 1000.0, 301).unwrap();
            assert_eq!(result.max_position, 1.5);
            assert_relative_eq!(
                result.max_deflection,
                1000.0 * 27.0 / (denominator * ei),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_midspan_cases_are_symmetric() {
        for beam_type in [BeamType::SimplySupported, BeamType::FixedFixed] {
            let result = deflect(beam_type, &beam(), 1000.0, 301).unwrap();
            let y = &result.deflections;
            let n = y.len();
            for i in 0..n {
                assert_relative_eq!(y[i], y[n - 1 - i], epsilon = 1e-15, max_relative = 1e-9);
            }
            assert!(y[n - 1].abs() < 1e-15);
        }
    }

    #[test]
    fn test_invalid_inputs_give_none() {
        let mut props = beam();
        props.length = 0.0;
        assert!(deflect(BeamType::Cantilever, &props, 1000.0, 301).is_none());

        let mut props = beam();
        props.youngs_modulus = 0.0;
        assert!(deflect(BeamType::SimplySupported, &props, 1000.0, 301).is_none());
    }

    #[test]
    fn test_sample_count() {
        let result = deflect(BeamType::FixedPinned, &beam(), 1000.0, 301).unwrap();
        assert_eq!(result.positions.len(), 301);
        assert_eq!(result.deflections.len(), 301);
        assert_eq!(*result.positions.last().unwrap(), 3.0);
    }
}
