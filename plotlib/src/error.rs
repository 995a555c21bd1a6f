use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplerError {
    #[error("linspace needs at least 2 samples, got {count}")]
    TooFewSamples { count: usize },

    #[error("invalid sampling interval [{start}, {end}]")]
    InvalidBounds { start: f64, end: f64 },

    #[error("invalid scale factor: {0}")]
    InvalidFactor(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FigureError {
    #[error("panel {index} out of range, figure has {panels} panels")]
    PanelOutOfRange { index: usize, panels: usize },

    #[error("x has {x} points but y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("cannot plot an empty series")]
    EmptySeries,

    #[error("point {index} is not finite")]
    NonFinite { index: usize },

    #[error("axis range [{min}, {max}] is too wide to draw")]
    RangeOverflow { min: f64, max: f64 },

    #[error("render failed: {0}")]
    Render(String),
}
