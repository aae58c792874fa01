use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Conversion direction between a projected grid and WGS84 lat/lon.
///
/// The mode determines how the two input values are interpreted, which
/// coordinate system definition is handed to the projection primitive on
/// which side, and how many decimal places the outputs are formatted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ConversionMode {
    /// Dubai DLTM Easting/Northing to WGS84 Latitude/Longitude
    DltmToGps,
    /// WGS84 Latitude/Longitude to Dubai DLTM Easting/Northing
    GpsToDltm,
    /// UTM Easting/Northing to WGS84 Latitude/Longitude
    UtmToGps,
    /// WGS84 Latitude/Longitude to UTM Easting/Northing
    GpsToUtm,
}

/// All modes in TUI cycling order
pub const ALL_MODES: [ConversionMode; 4] = [
    ConversionMode::DltmToGps,
    ConversionMode::GpsToDltm,
    ConversionMode::UtmToGps,
    ConversionMode::GpsToUtm,
];

impl ConversionMode {
    /// Short human-readable label, used in history entries and the mode bar
    pub fn label(self) -> &'static str {
        match self {
            Self::DltmToGps => "DLTM → GPS",
            Self::GpsToDltm => "GPS → DLTM",
            Self::UtmToGps => "UTM → GPS",
            Self::GpsToUtm => "GPS → UTM",
        }
    }

    /// Labels for the two input fields, in positional order
    pub fn input_labels(self) -> (&'static str, &'static str) {
        if self.projected_input() { ("Easting", "Northing") } else { ("Latitude", "Longitude") }
    }

    /// Labels for the two output values, in positional order
    pub fn output_labels(self) -> (&'static str, &'static str) {
        if self.projected_input() { ("Latitude", "Longitude") } else { ("Easting", "Northing") }
    }

    /// Whether the input side is projected Easting/Northing in meters.
    /// Those inputs carry a non-negativity constraint; lat/lon inputs do not.
    pub fn projected_input(self) -> bool {
        matches!(self, Self::DltmToGps | Self::UtmToGps)
    }

    /// Whether this mode needs UTM zone/hemisphere parameters
    pub fn uses_utm(self) -> bool {
        matches!(self, Self::UtmToGps | Self::GpsToUtm)
    }

    /// The mode performing the opposite conversion
    pub fn inverse(self) -> Self {
        match self {
            Self::DltmToGps => Self::GpsToDltm,
            Self::GpsToDltm => Self::DltmToGps,
            Self::UtmToGps => Self::GpsToUtm,
            Self::GpsToUtm => Self::UtmToGps,
        }
    }

    /// Next mode in cycling order (wraps around)
    pub fn next(self) -> Self {
        match self {
            Self::DltmToGps => Self::GpsToDltm,
            Self::GpsToDltm => Self::UtmToGps,
            Self::UtmToGps => Self::GpsToUtm,
            Self::GpsToUtm => Self::DltmToGps,
        }
    }

    /// Previous mode in cycling order (wraps around)
    pub fn prev(self) -> Self {
        match self {
            Self::DltmToGps => Self::GpsToUtm,
            Self::GpsToDltm => Self::DltmToGps,
            Self::UtmToGps => Self::GpsToDltm,
            Self::GpsToUtm => Self::UtmToGps,
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
