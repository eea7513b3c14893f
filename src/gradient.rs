//! Linear RGB gradient over positioned color stops

use serde::{Deserialize, Serialize};

use crate::color::{Channel, Rgb};
use crate::error::{ColorError, ConfigError};
use crate::interpolate;

/// A color pinned to a position in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Rgb,
    pub position: f64,
}

impl GradientStop {
    pub fn new(color: impl Into<Rgb>, position: f64) -> Self {
        Self {
            color: color.into(),
            position,
        }
    }
}

/// Gradient stops sorted by position.
///
/// Each channel is interpolated independently between the two stops that
/// bracket the requested position. Positions past the last stop hold the last
/// stop's color, positions before the first stop hold the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Build a gradient from stops in any order.
    ///
    /// Stops sharing a position keep their input order. Channel values are
    /// not range-checked, only required to be finite.
    pub fn new(mut stops: Vec<GradientStop>) -> Result<Self, ConfigError> {
        if stops.is_empty() {
            return Err(ConfigError::EmptyGradient);
        }
        for (index, stop) in stops.iter().enumerate() {
            if !(0.0..=1.0).contains(&stop.position) {
                return Err(ConfigError::StopPositionOutOfRange {
                    index,
                    position: stop.position,
                });
            }
            if !stop.color.is_finite() {
                return Err(ConfigError::NonFiniteChannel { index });
            }
        }

        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Value of `channel` at normalized position `x`
    pub fn channel_value(&self, channel: Channel, x: f64) -> f64 {
        let Some(higher) = self.stops.iter().position(|s| s.position >= x) else {
            return self.stops[self.stops.len() - 1].color.channel(channel);
        };
        let lower = higher.saturating_sub(1);

        // Known values at stop positions; unknown positions fall back to the first stop
        let f = |p: f64| {
            self.stops
                .iter()
                .find(|s| s.position == p)
                .unwrap_or(&self.stops[0])
                .color
                .channel(channel)
        };

        interpolate::linear(f, self.stops[lower].position, self.stops[higher].position)(x)
    }

    /// Value of the channel tagged `r`, `g` or `b` at position `x`.
    ///
    /// Any other tag fails with [`ColorError::InvalidChannel`].
    pub fn channel(&self, tag: &str, x: f64) -> Result<f64, ColorError> {
        let channel: Channel = tag.parse()?;
        Ok(self.channel_value(channel, x))
    }

    /// Interpolated color at normalized position `x`
    pub fn color_at(&self, x: f64) -> Rgb {
        Rgb::from_fn(|channel| self.channel_value(channel, x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn green_to_red() -> Gradient {
        Gradient::new(vec![
            GradientStop::new([0.0, 255.0, 0.0], 0.0),
            GradientStop::new([255.0, 0.0, 0.0], 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_empty_gradient() {
        assert!(matches!(
            Gradient::new(vec![]),
            Err(ConfigError::EmptyGradient)
        ));
    }

    #[test]
    fn test_rejects_position_out_of_range() {
        let result = Gradient::new(vec![
            GradientStop::new([0.0, 0.0, 0.0], 0.0),
            GradientStop::new([0.0, 0.0, 0.0], 1.2),
        ]);
        assert!(matches!(
            result,
            Err(ConfigError::StopPositionOutOfRange { index: 1, .. })
        ));

        let result = Gradient::new(vec![GradientStop::new([0.0, 0.0, 0.0], f64::NAN)]);
        assert!(matches!(
            result,
            Err(ConfigError::StopPositionOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_channel() {
        let result = Gradient::new(vec![GradientStop::new([0.0, f64::NAN, 0.0], 0.5)]);
        assert!(matches!(
            result,
            Err(ConfigError::NonFiniteChannel { index: 0 })
        ));
    }

    #[test]
    fn test_accepts_out_of_range_channels() {
        let g = Gradient::new(vec![
            GradientStop::new([-10.0, 300.0, 0.0], 0.0),
            GradientStop::new([0.0, 0.0, 0.0], 1.0),
        ]);
        assert!(g.is_ok());
    }

    #[test]
    fn test_stops_sorted_by_position() {
        let g = Gradient::new(vec![
            GradientStop::new([255.0, 0.0, 0.0], 1.0),
            GradientStop::new([0.0, 0.0, 255.0], 0.5),
            GradientStop::new([0.0, 255.0, 0.0], 0.0),
        ])
        .unwrap();
        let positions: Vec<f64> = g.stops().iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_color_at_endpoints() {
        let g = green_to_red();
        assert_eq!(g.color_at(0.0), Rgb::new(0.0, 255.0, 0.0));
        assert_eq!(g.color_at(1.0), Rgb::new(255.0, 0.0, 0.0));
    }

    #[test]
    fn test_color_at_midpoint() {
        let g = green_to_red();
        assert_eq!(g.color_at(0.5), Rgb::new(127.5, 127.5, 0.0));
        assert_eq!(g.color_at(0.5).to_hex(), "#7f7f00");
    }

    #[test]
    fn test_color_at_three_stops() {
        let g = Gradient::new(vec![
            GradientStop::new([0.0, 0.0, 0.0], 0.0),
            GradientStop::new([100.0, 200.0, 50.0], 0.5),
            GradientStop::new([200.0, 200.0, 250.0], 1.0),
        ])
        .unwrap();
        assert_eq!(g.color_at(0.25), Rgb::new(50.0, 100.0, 25.0));
        assert_eq!(g.color_at(0.5), Rgb::new(100.0, 200.0, 50.0));
        assert_eq!(g.color_at(0.75), Rgb::new(150.0, 200.0, 150.0));
    }

    #[test]
    fn test_holds_first_stop_before_start() {
        let g = Gradient::new(vec![
            GradientStop::new([10.0, 20.0, 30.0], 0.25),
            GradientStop::new([200.0, 200.0, 200.0], 1.0),
        ])
        .unwrap();
        assert_eq!(g.color_at(0.0), Rgb::new(10.0, 20.0, 30.0));
        assert_eq!(g.color_at(0.1), Rgb::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_holds_last_stop_past_end() {
        let g = Gradient::new(vec![
            GradientStop::new([0.0, 0.0, 0.0], 0.0),
            GradientStop::new([40.0, 80.0, 120.0], 0.5),
        ])
        .unwrap();
        assert_eq!(g.color_at(0.75), Rgb::new(40.0, 80.0, 120.0));
        assert_eq!(g.color_at(1.0), Rgb::new(40.0, 80.0, 120.0));
    }

    #[test]
    fn test_single_stop_is_constant() {
        let g = Gradient::new(vec![GradientStop::new([1.0, 2.0, 3.0], 0.5)]).unwrap();
        for x in [0.0, 0.5, 1.0] {
            assert_eq!(g.color_at(x), Rgb::new(1.0, 2.0, 3.0));
        }
    }

    #[test]
    fn test_duplicate_positions_use_first_stop() {
        let g = Gradient::new(vec![
            GradientStop::new([0.0, 0.0, 0.0], 0.0),
            GradientStop::new([100.0, 0.0, 0.0], 0.5),
            GradientStop::new([200.0, 0.0, 0.0], 0.5),
            GradientStop::new([255.0, 0.0, 0.0], 1.0),
        ])
        .unwrap();
        assert_eq!(g.color_at(0.5).r, 100.0);
        assert_eq!(g.color_at(0.25).r, 50.0);
    }

    #[test]
    fn test_channel_by_tag() {
        let g = green_to_red();
        assert_eq!(g.channel("r", 1.0), Ok(255.0));
        assert_eq!(g.channel("g", 1.0), Ok(0.0));
        assert_eq!(g.channel("b", 1.0), Ok(0.0));
    }

    #[test]
    fn test_channel_invalid_tag() {
        let g = green_to_red();
        assert_eq!(
            g.channel("x", 0.5),
            Err(ColorError::InvalidChannel("x".to_string()))
        );
        assert!(g.channel("rgb", 0.5).is_err());
    }
}
