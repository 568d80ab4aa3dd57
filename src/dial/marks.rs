use super::{normalize_angle, AngleDial};

/// Degrees between two wheel marks.
pub const MARK_SPACING: f64 = 10.0;
const MAJOR_MARK_SPACING: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleMark {
    /// Label shown on the wheel, in [0, 360).
    pub angle: f64,
    /// Signed distance from the current angle; positive marks sit below the center line.
    pub offset: f64,
    pub is_major: bool,
}

impl AngleDial {
    /// `count` marks on the 10° grid around the current angle, wrapping seamlessly past 0/360.
    pub fn marks(&self, count: usize) -> Vec<AngleMark> {
        let half = (count / 2) as f64;
        let first_index = (self.angle / MARK_SPACING).floor() - half;

        (0..count)
            .map(|i| {
                let raw = (first_index + i as f64) * MARK_SPACING;
                let angle = normalize_angle(raw);
                AngleMark {
                    angle,
                    offset: raw - self.angle,
                    is_major: angle % MAJOR_MARK_SPACING == 0.0,
                }
            })
            .collect()
    }
}
