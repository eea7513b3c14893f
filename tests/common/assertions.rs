//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use timestamp_color::{Interpolator, Rgb};

/// Assert a value is a well-formed `#rrggbb` color
pub fn assert_hex_color(color: &str) {
    assert_eq!(color.len(), 7, "Expected 7 characters, got {color:?}");
    assert!(color.starts_with('#'), "Expected leading '#', got {color:?}");
    assert!(
        color[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "Expected lowercase hex digits, got {color:?}"
    );
}

/// Assert two floats are equal within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected {expected}, got {actual}"
    );
}

/// Assert every channel varies in one direction only across `durations`
pub fn assert_channels_monotonic(interpolator: &Interpolator, durations: &[f64]) {
    let colors: Vec<Rgb> = durations.iter().map(|&d| interpolator.color_rgb(d)).collect();
    for channel in timestamp_color::Channel::ALL {
        let values: Vec<f64> = colors.iter().map(|c| c.channel(channel)).collect();
        let rising = values.windows(2).all(|w| w[1] >= w[0] - 1e-9);
        let falling = values.windows(2).all(|w| w[1] <= w[0] + 1e-9);
        assert!(
            rising || falling,
            "Channel {channel} reverses direction: {values:?}"
        );
    }
}
