// src/samples/mod.rs
mod builtin;
mod lookup;
mod parse;

pub use builtin::builtin_samples;
pub use lookup::{is_selected, nearest_acceleration, DEFAULT_LOOKUP_TOLERANCE};
pub use parse::parse_samples;

use serde::{Deserialize, Serialize};

/// One plotted data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub angle: f64,
    pub acceleration: f64,
}

impl Sample {
    pub const fn new(angle: f64, acceleration: f64) -> Self {
        Self { angle, acceleration }
    }

    /// Chart coordinates: acceleration on x, angle on y.
    pub fn as_point(&self) -> (f64, f64) {
        (self.acceleration, self.angle)
    }
}
