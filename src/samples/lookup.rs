use super::Sample;

pub const DEFAULT_LOOKUP_TOLERANCE: f64 = 5.0;

/// Acceleration of the first sample within `tolerance` degrees of `angle`, or 0.
/// First match wins, so this is approximate nearest-neighbor, not interpolation.
pub fn nearest_acceleration(samples: &[Sample], angle: f64, tolerance: f64) -> f64 {
    samples
        .iter()
        .find(|sample| is_selected(sample, angle, tolerance))
        .map(|sample| sample.acceleration)
        .unwrap_or(0.0)
}

pub fn is_selected(sample: &Sample, angle: f64, tolerance: f64) -> bool {
    (sample.angle - angle).abs() <= tolerance
}
