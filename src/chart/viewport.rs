use serde::{Deserialize, Serialize};

use super::fit_domain;
use crate::samples::Sample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportMode {
    /// Angle axis centered on the dial, acceleration axis fixed.
    Follow,
    /// Both axes fitted to the data.
    Fit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub acceleration: [f64; 2],
    pub angle: [f64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub mode: ViewportMode,
    pub follow_window: f64,
    pub acceleration_domain: [f64; 2],
}

impl Viewport {
    pub fn bounds(&self, samples: &[Sample], angle: f64) -> ChartBounds {
        match self.mode {
            ViewportMode::Follow => ChartBounds {
                acceleration: self.acceleration_domain,
                angle: [angle - self.follow_window, angle + self.follow_window],
            },
            ViewportMode::Fit => ChartBounds {
                acceleration: fit_domain(samples.iter().map(|s| s.acceleration)),
                angle: fit_domain(samples.iter().map(|s| s.angle)),
            },
        }
    }

    pub fn toggle(&mut self) {
        self.mode = match self.mode {
            ViewportMode::Follow => ViewportMode::Fit,
            ViewportMode::Fit => ViewportMode::Follow,
        };
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            mode: ViewportMode::Follow,
            follow_window: 50.0,
            acceleration_domain: [-12.0, 12.0],
        }
    }
}
