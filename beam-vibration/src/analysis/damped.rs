//! Free decay of a viscously damped single mode

use std::f64::consts::PI;

use crate::math::linspace;
use crate::results::{DampedResponse, EnvelopePoint};

/// Simulate x(t) = A·e^(−ζω_n t)·cos(ω_d t) over `[0, duration]`.
///
/// `samples` time points are produced; the envelope keeps every
/// `envelope_stride`-th of them. Returns `None` unless 0 < ζ < 1.
pub fn simulate(
    natural_frequency: f64,
    zeta: f64,
    duration: f64,
    amplitude: f64,
    samples: usize,
    envelope_stride: usize,
) -> Option<DampedResponse> {
    if !(zeta > 0.0 && zeta < 1.0) {
        log::debug!("no damped response for zeta = {zeta}");
        return None;
    }

    let omega_n = 2.0 * PI * natural_frequency;
    let omega_d = omega_n * (1.0 - zeta * zeta).sqrt();
    let decay = |t: f64| amplitude * (-zeta * omega_n * t).exp();

    let times = linspace(0.0, duration, samples);
    let displacements = times
        .iter()
        .map(|&t| decay(t) * (omega_d * t).cos())
        .collect();
    let envelope = times
        .iter()
        .step_by(envelope_stride.max(1))
        .map(|&t| {
            let upper = decay(t);
            EnvelopePoint {
                time: t,
                upper,
                lower: -upper,
            }
        })
        .collect();

    Some(DampedResponse {
        times,
        displacements,
        envelope,
        damping_ratio: zeta,
        natural_frequency,
        damped_frequency: omega_d / (2.0 * PI),
    })
}
