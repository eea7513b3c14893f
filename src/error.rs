use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    #[error("Invalid color argument: {0:?} (expected \"r\", \"g\" or \"b\")")]
    InvalidChannel(String),

    #[error("Invalid hex color length: {0:?} (expected 3 or 6 digits)")]
    InvalidHexLength(String),

    #[error("Invalid hex color {color:?}")]
    InvalidHex {
        color: String,
        #[source]
        source: hex::FromHexError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("At least two breakpoints are required, got {0}")]
    TooFewBreakpoints(usize),

    #[error("Breakpoint {index} is not a finite number: {value}")]
    NonFiniteBreakpoint { index: usize, value: f64 },

    #[error("Gradient must have at least one stop")]
    EmptyGradient,

    #[error("Gradient stop {index} has position {position} outside 0..=1")]
    StopPositionOutOfRange { index: usize, position: f64 },

    #[error("Gradient stop {index} has a non-finite channel value")]
    NonFiniteChannel { index: usize },

    #[error("Invalid gradient color")]
    Color(#[from] ColorError),

    #[error("Config parse error")]
    Parse(#[from] serde_yaml::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),
}
