/// Linear map from a value domain onto a coordinate range.
/// A reversed range (start > end) flips the axis, e.g. larger angles drawn higher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn project(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return r0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Projects and rounds to a whole cell, or None when it falls outside the range.
    pub fn project_cell(&self, value: f64) -> Option<u16> {
        let (r0, r1) = self.range;
        let (low, high) = if r0 <= r1 { (r0, r1) } else { (r1, r0) };
        let cell = self.project(value).round();
        if cell < low || cell > high || cell < 0.0 || cell > f64::from(u16::MAX) {
            return None;
        }
        Some(cell as u16)
    }
}
