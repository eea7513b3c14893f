//! Breakpoint set and rank-based normalization
//!
//! A breakpoint's normalized position is its rank divided by `n - 1`, not its
//! value scaled to the range. Two breakpoints far apart in seconds are still
//! neighbours in normalized space.

use crate::error::ConfigError;
use crate::interpolate;

/// An ordered set of duration breakpoints (seconds)
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints {
    values: Vec<f64>,
    /// `(value, position)` pairs; for duplicated values the last rank wins
    distribution: Vec<(f64, f64)>,
    min: f64,
    max: f64,
}

impl Breakpoints {
    /// Build the breakpoint set.
    ///
    /// Values are expected in ascending order. Unsorted input is accepted
    /// (with a warning) but interval lookups on it are unspecified.
    pub fn new(values: Vec<f64>) -> Result<Self, ConfigError> {
        if values.len() < 2 {
            return Err(ConfigError::TooFewBreakpoints(values.len()));
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFiniteBreakpoint { index, value });
        }

        if values.windows(2).any(|w| w[0] > w[1]) {
            tracing::warn!(
                ?values,
                "Breakpoints are not sorted ascending, interval lookup is unreliable"
            );
        }

        let last = (values.len() - 1) as f64;
        let mut distribution: Vec<(f64, f64)> = Vec::with_capacity(values.len());
        for (i, &value) in values.iter().enumerate() {
            let position = i as f64 / last;
            match distribution.iter_mut().find(|(v, _)| *v == value) {
                Some(entry) => entry.1 = position,
                None => distribution.push((value, position)),
            }
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            values,
            distribution,
            min,
            max,
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamp `secs` into `[min, max]`, truncating in-range values toward zero.
    ///
    /// NaN clamps to the minimum.
    pub fn justify(&self, secs: f64) -> f64 {
        if secs.is_nan() {
            self.min
        } else if secs > self.max {
            self.max
        } else if secs < self.min {
            self.min
        } else {
            secs.trunc()
        }
    }

    /// Locate the breakpoints enclosing `x`.
    ///
    /// The higher bound is the first breakpoint `>= x`, the lower bound the
    /// one right before it (or the same one at index 0). Returns `None` only
    /// when `x` is above every breakpoint, which cannot happen after
    /// [`justify`](Self::justify).
    pub fn boundaries(&self, x: f64) -> Option<(f64, f64)> {
        let higher = self.values.iter().position(|&v| v >= x)?;
        let lower = higher.saturating_sub(1);
        Some((self.values[lower], self.values[higher]))
    }

    /// Normalized position of an exact breakpoint value
    pub fn position_of(&self, value: f64) -> Option<f64> {
        self.distribution
            .iter()
            .find(|(v, _)| *v == value)
            .map(|&(_, p)| p)
    }

    /// Map a duration to its normalized position in `[0, 1]`.
    pub fn normalize(&self, secs: f64) -> f64 {
        let x = self.justify(secs);

        if let Some(position) = self.position_of(x) {
            return position;
        }

        let Some((low, high)) = self.boundaries(x) else {
            return 1.0;
        };
        // Bounds always come from the breakpoint list, so the lookup succeeds
        let f = |v: f64| self.position_of(v).unwrap_or(0.0);
        interpolate::linear(f, low, high)(x)
    }
}
