//! Elevation normalization.

/// Pre-normalization elevation extremes of a grid, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationRange {
    /// Lowest elevation in meters.
    pub min: f64,
    /// Highest elevation in meters.
    pub max: f64,
}

/// Rescale elevations linearly to [0, 1].
///
/// Returns the normalized values together with the original range.
/// A uniform input (max == min) maps every value to 0.5 rather than
/// dividing by zero. Returns `None` for an empty input.
pub fn normalize(values: &[f64]) -> Option<(Vec<f64>, ElevationRange)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));

    let range = ElevationRange { min, max };
    if max == min {
        return Some((vec![0.5; values.len()], range));
    }

    let normalized = values.iter().map(|v| (v - min) / (max - min)).collect();
    Some((normalized, range))
}
