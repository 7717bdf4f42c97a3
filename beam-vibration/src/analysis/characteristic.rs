//! Characteristic (frequency) equations of Euler-Bernoulli beams
//!
//! The natural frequencies of a uniform beam follow from the roots `bL` of a
//! transcendental equation that depends only on the boundary conditions.
//! Each root is searched for in a unit-wide bracket centred on its well-known
//! tabulated value.

use std::f64::consts::PI;

use crate::analysis::AnalysisOptions;
use crate::elements::BeamType;
use crate::error::{VibrationError, VibrationResult};
use crate::results::ModeRoot;

/// Number of modes with a tabulated starting guess
pub const MAX_MODES: usize = 5;

/// Evaluate the characteristic function f(bL) for a boundary condition
pub fn characteristic_function(beam_type: BeamType, bl: f64) -> f64 {
    match beam_type {
        BeamType::Cantilever => bl.cos() * bl.cosh() + 1.0,
        BeamType::SimplySupported => bl.sin(),
        BeamType::FixedFixed => bl.cos() * bl.cosh() - 1.0,
        BeamType::FixedPinned => bl.tan() - bl.tanh(),
    }
}

/// Tabulated approximations of the first roots, in mode order
pub fn root_guesses(beam_type: BeamType) -> [f64; MAX_MODES] {
    match beam_type {
        BeamType::Cantilever => [1.875, 4.694, 7.855, 10.996, 14.137],
        BeamType::SimplySupported => [PI, 2.0 * PI, 3.0 * PI, 4.0 * PI, 5.0 * PI],
        BeamType::FixedFixed => [4.730, 7.853, 10.996, 14.137, 17.279],
        BeamType::FixedPinned => [3.927, 7.069, 10.210, 13.352, 16.493],
    }
}

/// Refine the root of a single mode (1-based) from its tabulated guess
pub fn find_root(
    beam_type: BeamType,
    mode: usize,
    options: &AnalysisOptions,
) -> VibrationResult<ModeRoot> {
    let guess = mode
        .checked_sub(1)
        .and_then(|i| root_guesses(beam_type).get(i).copied())
        .ok_or_else(|| {
            VibrationError::InvalidInput(format!(
                "mode {mode} is outside 1..={MAX_MODES} for a {beam_type} beam"
            ))
        })?;

    let half = options.bracket_half_width;
    let search = options.root_finder.find(
        |bl| characteristic_function(beam_type, bl),
        guess - half,
        guess + half,
    );

    log::trace!(
        "{beam_type} mode {mode}: bL = {} after {} iterations (|f| = {:e})",
        search.x,
        search.iterations,
        search.residual
    );

    if search.converged {
        Ok(ModeRoot { mode, bl: search.x })
    } else {
        Err(VibrationError::ConvergenceFailed {
            mode,
            residual: search.residual,
        })
    }
}

/// Solve for up to `min(num_modes, MAX_MODES)` roots in increasing mode order.
///
/// Modes whose search does not converge are left out of the list.
pub fn solve(beam_type: BeamType, num_modes: usize, options: &AnalysisOptions) -> Vec<ModeRoot> {
    (1..=num_modes.min(MAX_MODES))
        .filter_map(|mode| match find_root(beam_type, mode, options) {
            Ok(root) => Some(root),
            Err(e) => {
                log::warn!("dropping {beam_type} mode {mode}: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solve_default(beam_type: BeamType, num_modes: usize) -> Vec<ModeRoot> {
        solve(beam_type, num_modes, &AnalysisOptions::default())
    }

    #[test]
    fn test_simply_supported_roots_are_multiples_of_pi() {
        let roots = solve_default(BeamType::SimplySupported, 5);
        assert_eq!(roots.len(), 5);
        for (i, root) in roots.iter().enumerate() {
            assert_eq!(root.mode, i + 1);
            assert!((root.bl - (i + 1) as f64 * PI).abs() < 1e-6);
        }
    }

    #[test]
    fn test_all_roots_satisfy_equation() {
        for beam_type in BeamType::ALL {
            let roots = solve_default(beam_type, MAX_MODES);
            assert_eq!(roots.len(), MAX_MODES, "{beam_type} lost a mode");
            for root in &roots {
                assert!(characteristic_function(beam_type, root.bl).abs() < 1e-6);
            }
            assert!(roots.windows(2).all(|w| w[0].bl < w[1].bl));
        }
    }

    #[test]
    fn test_known_roots() {
        let cantilever = solve_default(BeamType::Cantilever, 2);
        assert_relative_eq!(cantilever[0].bl, 1.875104, epsilon = 1e-5);
        assert_relative_eq!(cantilever[1].bl, 4.694091, epsilon = 1e-5);

        let fixed_fixed = solve_default(BeamType::FixedFixed, 1);
        assert_relative_eq!(fixed_fixed[0].bl, 4.730041, epsilon = 1e-5);

        let fixed_pinned = solve_default(BeamType::FixedPinned, 1);
        assert_relative_eq!(fixed_pinned[0].bl, 3.926602, epsilon = 1e-5);
    }

    #[test]
    fn test_mode_count_is_capped() {
        assert_eq!(solve_default(BeamType::Cantilever, 12).len(), MAX_MODES);
        assert_eq!(solve_default(BeamType::Cantilever, 3).len(), 3);
        assert!(solve_default(BeamType::Cantilever, 0).is_empty());
    }

    #[test]
    fn test_unconverged_mode_is_dropped() {
        // Without iterations only roots already within tolerance at the
        // bracket midpoint survive, which holds for the exact multiples of pi
        let opts = AnalysisOptions::default().with_max_iter(0);
        assert!(solve(BeamType::Cantilever, 5, &opts).is_empty());
        assert_eq!(solve(BeamType::SimplySupported, 5, &opts).len(), 5);
    }

    #[test]
    fn test_find_root_rejects_untabulated_mode() {
        let opts = AnalysisOptions::default();
        assert!(matches!(
            find_root(BeamType::Cantilever, 0, &opts),
            Err(VibrationError::InvalidInput(_))
        ));
        assert!(matches!(
            find_root(BeamType::Cantilever, 6, &opts),
            Err(VibrationError::InvalidInput(_))
        ));
    }
}
