//! Coordinate conversion: validation pipeline plus projection definitions

pub mod pipeline;
pub mod projection;

pub use pipeline::{ConvertError, convert};
