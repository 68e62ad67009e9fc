/// Floating point type used throughout the solver
pub type Real = f64;

/// Evenly spaced values from `start` to `end` inclusive.
///
/// The last entry is pinned to `end` so float drift never moves the endpoint.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let delta = (end - start) / (n - 1) as Real;
            let mut points: Vec<Real> = (0..n).map(|i| start + i as Real * delta).collect();
            points[n - 1] = end;
            points
        }
    }
}
