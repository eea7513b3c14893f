use crate::assets::AssetLoader;
use crate::color::Rgb;
use crate::error::ConfigError;
use crate::gradient::GradientStop;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Color configuration loaded from config.yaml
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ColorConfig {
    /// Named breakpoint groups, flattened in order
    #[serde(default = "default_intervals")]
    pub intervals: Vec<IntervalGroup>,

    /// Gradient stops in any order
    #[serde(default = "default_gradient")]
    pub gradient: Vec<StopConfig>,
}

/// A named run of breakpoints, e.g. "minutes"
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IntervalGroup {
    pub name: String,
    pub seconds: Vec<f64>,
}

/// A gradient stop as written in the config file
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StopConfig {
    pub color: ColorValue,
    pub position: f64,
}

/// Stop color: either an RGB triple or a hex string
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorValue {
    Rgb([f64; 3]),
    Hex(String),
}

impl ColorValue {
    pub fn to_rgb(&self) -> Result<Rgb, ConfigError> {
        match self {
            ColorValue::Rgb(triple) => Ok(Rgb::from(*triple)),
            ColorValue::Hex(s) => Ok(s.parse::<Rgb>()?),
        }
    }
}

fn group(name: &str, seconds: &[f64]) -> IntervalGroup {
    IntervalGroup {
        name: name.to_string(),
        seconds: seconds.to_vec(),
    }
}

fn stop(color: ColorValue, position: f64) -> StopConfig {
    StopConfig { color, position }
}

fn default_intervals() -> Vec<IntervalGroup> {
    vec![
        group("seconds", &[0.0, 5.0, 15.0, 30.0]),
        group("minutes", &[60.0, 300.0, 900.0, 1800.0]),
        group("hours", &[3600.0, 10800.0, 21600.0, 43200.0]),
        group("days", &[86400.0, 259200.0, 604800.0]),
        group("months", &[2592000.0, 7776000.0, 15552000.0]),
        group("years", &[31536000.0]),
    ]
}

fn default_gradient() -> Vec<StopConfig> {
    vec![
        stop(ColorValue::Rgb([0.0, 255.0, 0.0]), 0.0),
        stop(ColorValue::Rgb([255.0, 255.0, 0.0]), 0.35),
        stop(ColorValue::Hex("#ff8000".to_string()), 0.6),
        stop(ColorValue::Rgb([255.0, 0.0, 0.0]), 0.8),
        stop(ColorValue::Rgb([128.0, 0.0, 0.0]), 1.0),
    ]
}

impl ColorConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        breakpoints = config.breakpoints().len(),
                        stops = config.gradient.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse YAML (or JSON) configuration text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a configuration file, failing on any error
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// All interval groups flattened into one breakpoint list
    pub fn breakpoints(&self) -> Vec<f64> {
        self.intervals
            .iter()
            .flat_map(|g| g.seconds.iter().copied())
            .collect()
    }

    /// Gradient stops with hex colors resolved
    pub fn gradient_stops(&self) -> Result<Vec<GradientStop>, ConfigError> {
        self.gradient
            .iter()
            .map(|s| Ok(GradientStop::new(s.color.to_rgb()?, s.position)))
            .collect()
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            intervals: default_intervals(),
            gradient: default_gradient(),
        }
    }
}
