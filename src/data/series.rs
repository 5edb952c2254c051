//! Series Generator Module
//! Produces the evenly spaced value sequences the reference chart plots.

/// Number of points in each generated reference series.
pub const SERIES_POINTS: usize = 20;

/// Start of the closed interval both reference series span.
pub const SERIES_START: f64 = 0.0;

/// End of the closed interval both reference series span.
pub const SERIES_STOP: f64 = 1.0;

/// Generate `count` evenly spaced values from `start` to `stop` inclusive.
///
/// Spacing is `(stop - start) / (count - 1)`. The final element is written
/// as `stop` outright so the endpoint is exact (NumPy compatible); a count
/// of zero yields an empty vector and a count of one yields just `start`.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // Accumulated rounding must not move the endpoint.
            values[count - 1] = stop;
            values
        }
    }
}
