pub mod error;
pub mod figure;
pub mod logger;
pub mod sampler;

pub use error::{FigureError, SamplerError};
pub use figure::{Figure, Panel};
pub use sampler::Samples;
