pub mod app;
pub mod chart;
pub mod config;
pub mod dial;
pub mod error;
pub mod event;
pub mod samples;
pub mod source;
pub mod ui;
pub mod util;

pub use app::{App, LoadState};
pub use config::AppConfig;
