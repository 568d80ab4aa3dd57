pub const FULL_TURN: f64 = 360.0;

/// Floored modulo into [0, 360). Negative values wrap to the top of the range.
pub fn normalize_angle(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    let wrapped = value.rem_euclid(FULL_TURN);

    // rem_euclid rounds tiny negatives up to exactly FULL_TURN, and keeps -0.0
    if wrapped >= FULL_TURN || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}
