//! Hybrid Newton-Raphson / bisection root finder for scalar functions

use serde::{Deserialize, Serialize};

/// Central finite-difference derivative of `f` at `x`
pub fn central_difference<F>(f: &F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Settings for the bracketed Newton iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootFinder {
    /// Accept a point once |f(x)| falls below this
    pub tolerance: f64,
    /// Iteration budget
    pub max_iterations: usize,
    /// Step for the central-difference derivative
    pub derivative_step: f64,
    /// Stop iterating when |f'(x)| falls below this
    pub min_slope: f64,
}

impl Default for RootFinder {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 100,
            derivative_step: 1e-8,
            min_slope: 1e-10,
        }
    }
}

/// Outcome of a single bracketed root search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootSearch {
    /// Final iterate
    pub x: f64,
    /// |f(x)| at the final iterate
    pub residual: f64,
    /// Iterations spent
    pub iterations: usize,
    /// Whether the residual met the tolerance
    pub converged: bool,
}

impl RootFinder {
    /// Search for a root of `f` inside `[lo, hi]`, starting from the midpoint.
    ///
    /// Newton steps are taken while they stay inside the bracket. A step that
    /// would leave it is replaced by a bisection of the bracket, after which
    /// the iteration restarts from the new midpoint. A vanishing derivative
    /// ends the iteration early; the final point is still checked against the
    /// tolerance.
    pub fn find<F>(&self, f: F, lo: f64, hi: f64) -> RootSearch
    where
        F: Fn(f64) -> f64,
    {
        let (mut lo, mut hi) = (lo, hi);
        let mut x = 0.5 * (lo + hi);
        let mut iterations = 0;

        while iterations < self.max_iterations {
            let fx = f(x);
            if fx.abs() < self.tolerance {
                return RootSearch {
                    x,
                    residual: fx.abs(),
                    iterations,
                    converged: true,
                };
            }
            iterations += 1;

            let slope = central_difference(&f, x, self.derivative_step);
            if slope.abs() < self.min_slope {
                log::trace!("flat derivative at x = {x}, f'(x) = {slope:e}");
                break;
            }

            let next = x - fx / slope;
            if next < lo || next > hi {
                let mid = 0.5 * (lo + hi);
                if f(lo) * f(mid) < 0.0 {
                    hi = mid;
                } else {
                    lo = mid;
                }
                x = 0.5 * (lo + hi);
                log::trace!("newton step left bracket, bisected to [{lo}, {hi}]");
            } else {
                x = next;
            }
        }

        let residual = f(x).abs();
        RootSearch {
            x,
            residual,
            iterations,
            converged: residual < self.tolerance,
        }
    }
}
