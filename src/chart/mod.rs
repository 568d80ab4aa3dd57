// src/chart/mod.rs
//! Plot-space arithmetic shared by the chart panel and the dial wheel.

mod axis;
mod scale;
mod viewport;

pub use axis::{fit_domain, format_number, ticks, DEFAULT_TICK_COUNT};
pub use scale::LinearScale;
pub use viewport::{ChartBounds, Viewport, ViewportMode};
