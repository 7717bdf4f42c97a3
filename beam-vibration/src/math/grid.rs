//! Sample grids along the beam and in time

/// `n` evenly spaced samples over `[start, end]`, both ends included exactly.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let t = i as f64 / last;
                    start + t * (end - start)
                })
                .collect()
        }
    }
}

/// Positions `0, step, 2·step, ...` accumulated while they do not exceed `length`.
///
/// Accumulation drifts, so the final sample can stop one step short of
/// `length` when `length` is a multiple of `step`.
pub fn stepped_positions(length: f64, step: f64) -> Vec<f64> {
    let mut positions = Vec::new();
    if step.is_nan() || step <= 0.0 || !length.is_finite() || length < 0.0 {
        return positions;
    }

    let mut x = 0.0;
    while x <= length {
        positions.push(x);
        x += step;
    }
    positions
}
