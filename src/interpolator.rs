//! Duration to color mapping
//!
//! Two chained linear interpolations: a duration is first mapped onto the
//! breakpoints' normalized positions, and that position is then mapped onto
//! the gradient.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::breakpoints::Breakpoints;
use crate::color::Rgb;
use crate::error::ConfigError;
use crate::gradient::{Gradient, GradientStop};
use crate::models::ColorConfig;

/// Immutable duration-to-color mapper.
///
/// ```
/// use timestamp_color::{GradientStop, Interpolator};
///
/// let interpolator = Interpolator::new(
///     vec![0.0, 60.0, 3600.0],
///     vec![
///         GradientStop::new([0.0, 255.0, 0.0], 0.0),
///         GradientStop::new([255.0, 0.0, 0.0], 1.0),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(interpolator.color(0.0), "#00ff00");
/// assert_eq!(interpolator.color(60.0), "#7f7f00");
/// assert_eq!(interpolator.color(3600.0), "#ff0000");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolator {
    breakpoints: Breakpoints,
    gradient: Gradient,
}

/// One evaluated duration, for reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorSample {
    pub seconds: f64,
    pub position: f64,
    pub rgb: Rgb,
    pub color: String,
}

impl Interpolator {
    pub fn new(breakpoints: Vec<f64>, stops: Vec<GradientStop>) -> Result<Self, ConfigError> {
        Ok(Self::from_parts(
            Breakpoints::new(breakpoints)?,
            Gradient::new(stops)?,
        ))
    }

    pub fn from_parts(breakpoints: Breakpoints, gradient: Gradient) -> Self {
        tracing::debug!(
            breakpoints = breakpoints.len(),
            stops = gradient.stops().len(),
            min = breakpoints.min(),
            max = breakpoints.max(),
            "Built interpolator"
        );
        Self {
            breakpoints,
            gradient,
        }
    }

    pub fn from_config(config: &ColorConfig) -> Result<Self, ConfigError> {
        Self::new(config.breakpoints(), config.gradient_stops()?)
    }

    /// Interpolator over the built-in default breakpoints and gradient
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::from_config(&ColorConfig::default())
    }

    /// Custom breakpoints over the default gradient
    pub fn with_breakpoints(breakpoints: Vec<f64>) -> Result<Self, ConfigError> {
        Self::new(breakpoints, ColorConfig::default().gradient_stops()?)
    }

    /// Default breakpoints under a custom gradient
    pub fn with_gradient(stops: Vec<GradientStop>) -> Result<Self, ConfigError> {
        Self::new(ColorConfig::default().breakpoints(), stops)
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Normalized position of a duration in `[0, 1]`
    pub fn normalized_position(&self, secs: f64) -> f64 {
        self.breakpoints.normalize(secs)
    }

    /// Interpolated (unclamped, untruncated) color for a duration
    pub fn color_rgb(&self, secs: f64) -> Rgb {
        self.gradient.color_at(self.normalized_position(secs))
    }

    /// `#rrggbb` color for a duration in seconds
    pub fn color(&self, secs: f64) -> String {
        self.color_rgb(secs).to_hex()
    }

    pub fn color_for_duration(&self, duration: Duration) -> String {
        self.color(duration.as_secs_f64())
    }

    /// Color for the age of `timestamp` as seen at `now`.
    ///
    /// Timestamps in the future have a negative age and clamp like any other
    /// duration below the first breakpoint.
    pub fn color_for_age(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let age = now.signed_duration_since(timestamp);
        self.color(age.num_milliseconds() as f64 / 1000.0)
    }

    pub fn sample(&self, secs: f64) -> ColorSample {
        let position = self.normalized_position(secs);
        let rgb = self.gradient.color_at(position);
        ColorSample {
            seconds: secs,
            position,
            rgb,
            color: rgb.to_hex(),
        }
    }

    /// One sample per configured breakpoint, in order
    pub fn scale(&self) -> Vec<ColorSample> {
        self.breakpoints
            .values()
            .iter()
            .map(|&secs| self.sample(secs))
            .collect()
    }
}

impl Default for Interpolator {
    fn default() -> Self {
        // The built-in defaults are static; `test_default_matches_with_defaults` covers them
        Self::with_defaults().expect("built-in default configuration is valid")
    }
}
