//! timestamp-color - map durations to colors
//!
//! An [`Interpolator`] is built from an ascending list of breakpoint durations
//! (seconds) and a set of gradient stops. Each query clamps the duration into
//! the breakpoint range, converts it to a rank-based position in `[0, 1]` and
//! reads the color at that position off the gradient, returning `#rrggbb`.
//!
//! ```
//! use timestamp_color::Interpolator;
//!
//! let interpolator = Interpolator::with_defaults().unwrap();
//! assert_eq!(interpolator.color(0.0), "#00ff00");
//! ```

pub mod assets;
pub mod breakpoints;
pub mod color;
pub mod error;
pub mod gradient;
pub mod interpolate;
pub mod interpolator;
pub mod models;

pub use breakpoints::Breakpoints;
pub use color::{Channel, Rgb};
pub use error::{ColorError, ConfigError};
pub use gradient::{Gradient, GradientStop};
pub use interpolator::{ColorSample, Interpolator};
pub use models::ColorConfig;
