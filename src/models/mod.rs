pub mod config;

pub use config::{ColorConfig, ColorValue, IntervalGroup, StopConfig};
