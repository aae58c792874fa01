use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// UTM hemisphere selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    pub fn toggle(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North => f.write_str("north"),
            Self::South => f.write_str("south"),
        }
    }
}

/// UTM parameters as entered by the user. The zone is kept as a raw string
/// so the pipeline owns its validation, like the coordinate fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtmInput {
    pub zone: String,
    pub hemisphere: Hemisphere,
}

impl UtmInput {
    pub fn new(zone: impl Into<String>, hemisphere: Hemisphere) -> Self {
        Self { zone: zone.into(), hemisphere }
    }
}

/// Outcome of a successful conversion.
///
/// `output1`/`output2` are the formatted display strings in positional order
/// (see [`ConversionMode::output_labels`]). `latitude`/`longitude` are always
/// WGS84 degrees regardless of conversion direction: for lat/lon-output
/// modes they are the outputs, for lat/lon-input modes the parsed inputs.
/// The map-link and share actions depend on that invariant.
///
/// [`ConversionMode::output_labels`]: crate::models::ConversionMode::output_labels
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub output1: String,
    pub output2: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Conversion {
    /// Both formatted outputs as a single line, used for history entries
    /// and clipboard payloads
    pub fn output_text(&self) -> String {
        format!("{}, {}", self.output1, self.output2)
    }
}
