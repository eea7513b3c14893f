//! Test fixtures and constants.

use timestamp_color::{GradientStop, Interpolator};

/// Breakpoints used by the reference scenario
pub const MINUTE_HOUR: [f64; 3] = [0.0, 60.0, 3600.0];

/// Hex colors of the reference scenario
pub mod colors {
    pub const GREEN: &str = "#00ff00";
    pub const MIDPOINT: &str = "#7f7f00";
    pub const RED: &str = "#ff0000";
}

/// Two-stop green to red gradient
pub fn green_to_red() -> Vec<GradientStop> {
    vec![
        GradientStop::new([0.0, 255.0, 0.0], 0.0),
        GradientStop::new([255.0, 0.0, 0.0], 1.0),
    ]
}

/// Interpolator over `[0, 60, 3600]` with the green to red gradient
pub fn minute_hour() -> Interpolator {
    Interpolator::new(MINUTE_HOUR.to_vec(), green_to_red()).expect("valid fixture")
}

/// A minimal config file in YAML
pub const SMALL_CONFIG_YAML: &str = r##"
intervals:
  - name: minutes
    seconds: [0, 60]
  - name: hours
    seconds: [3600]
gradient:
  - color: "#ff0000"
    position: 1
  - color: [0, 255, 0]
    position: 0
"##;

/// Durations spread across the default breakpoint range, ascending
pub fn sweep(max: f64, steps: usize) -> Vec<f64> {
    (0..=steps).map(|i| max * i as f64 / steps as f64).collect()
}
