// src/config.rs
// YAML configuration with defaults for every field

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::chart::{Viewport, ViewportMode};
use crate::dial::{AngleDial, DEFAULT_DRAG_SENSITIVITY, DEFAULT_STEP_SIZE};
use crate::error::ConfigError;
use crate::samples::DEFAULT_LOOKUP_TOLERANCE;

pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dial: DialConfig,
    pub lookup_tolerance: f64,
    pub source: SourceConfig,
    pub chart: ChartConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialConfig {
    pub initial_angle: f64,
    pub step_size: f64,
    pub drag_sensitivity: f64,
    pub title: String,
    pub value_label: String,
    pub value_unit: String,
    pub show_instructions: bool,
}

/// Where samples come from. Tagged by `kind` in YAML.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    #[default]
    Builtin,
    Remote {
        url: String,
        #[serde(default)]
        timeout_secs: Option<u64>,
    },
    File {
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub viewport: ViewportMode,
    pub follow_window: f64,
    pub acceleration_domain: [f64; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub dir: PathBuf,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dial: DialConfig::default(),
            lookup_tolerance: DEFAULT_LOOKUP_TOLERANCE,
            source: SourceConfig::default(),
            chart: ChartConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            initial_angle: 0.0,
            step_size: DEFAULT_STEP_SIZE,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            title: "Angle Selector".to_string(),
            value_label: "Acceleration".to_string(),
            value_unit: "m/s²".to_string(),
            show_instructions: true,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self {
            viewport: viewport.mode,
            follow_window: viewport.follow_window,
            acceleration_domain: viewport.acceleration_domain,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./logs"),
            debug: false,
        }
    }
}

impl AppConfig {
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = if text.trim().is_empty() {
            AppConfig::default()
        } else {
            serde_yaml::from_str(text)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// An explicit path must exist. Without one, `./config.yml` is used when present.
    /// Also returns the file the config came from, None meaning built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !default_path.exists() {
                    return Ok((Self::default(), None));
                }
                default_path
            }
        };
        let config = Self::load(&path)?;
        Ok((config, Some(path)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dial = &self.dial;
        if !dial.initial_angle.is_finite() {
            return Err(ConfigError::invalid("dial.initial_angle", "must be a finite number"));
        }
        if !(dial.step_size.is_finite() && dial.step_size > 0.0) {
            return Err(ConfigError::invalid("dial.step_size", "must be a positive number"));
        }
        if !dial.drag_sensitivity.is_finite() {
            return Err(ConfigError::invalid("dial.drag_sensitivity", "must be a finite number"));
        }
        if !(self.lookup_tolerance.is_finite() && self.lookup_tolerance >= 0.0) {
            return Err(ConfigError::invalid("lookup_tolerance", "must be zero or positive"));
        }

        let chart = &self.chart;
        if !(chart.follow_window.is_finite() && chart.follow_window > 0.0) {
            return Err(ConfigError::invalid("chart.follow_window", "must be a positive number"));
        }
        let [low, high] = chart.acceleration_domain;
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(ConfigError::invalid(
                "chart.acceleration_domain",
                format!("[{}, {}] is not an increasing range", low, high),
            ));
        }

        match &self.source {
            SourceConfig::Remote { url, .. } if url.trim().is_empty() => {
                Err(ConfigError::invalid("source.url", "must not be empty"))
            }
            SourceConfig::File { path } if path.as_os_str().is_empty() => {
                Err(ConfigError::invalid("source.path", "must not be empty"))
            }
            _ => Ok(()),
        }
    }

    pub fn build_dial(&self) -> AngleDial {
        AngleDial::new(self.dial.initial_angle, self.dial.step_size, self.dial.drag_sensitivity)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            mode: self.chart.viewport,
            follow_window: self.chart.follow_window,
            acceleration_domain: self.chart.acceleration_domain,
        }
    }
}
