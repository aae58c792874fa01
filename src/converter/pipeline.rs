//! The mode-driven conversion pipeline.
//!
//! Takes the two raw strings as typed by the user plus the active
//! [`ConversionMode`], validates them, and hands the parsed pair to the
//! projection primitive with the coordinate systems on the right sides.
//!
//! The projection primitive is defined over (x, y) = (easting/longitude,
//! northing/latitude) pairs regardless of semantic meaning, so the
//! pipeline's real job is the transposition: (lat, lon) input is re-ordered
//! to (lon, lat) before the call, and a returned (lon, lat) is re-ordered
//! back to (lat, lon) for display.
//!
//! Validation is fail-fast in a fixed order; each failure is terminal and
//! no projection call is made:
//!
//! 1. both fields non-empty after trimming ([`ConvertError::MissingInput`])
//! 2. both parse as finite floats ([`ConvertError::NotANumber`])
//! 3. Easting/Northing inputs are non-negative
//!    ([`ConvertError::NegativeCoordinate`]); lat/lon inputs have no sign
//!    constraint
//! 4. UTM modes only: the zone is an integer in [1, 60]
//!    ([`ConvertError::InvalidUtmZone`]); other modes never look at the
//!    zone or hemisphere

use std::fmt;

use super::projection;
use crate::models::{Conversion, ConversionMode, UtmInput};

/// Decimal places for latitude/longitude outputs
const GPS_PRECISION: usize = 8;
/// Decimal places for easting/northing outputs
const GRID_PRECISION: usize = 4;

/// Why a conversion did not produce a result.
///
/// The first four variants are user-input validation failures, reported
/// before any projection call. `Projection` wraps a failure from the
/// projection primitive itself; its detail is kept for debugging but the
/// displayed message stays generic since the primitive's internals are not
/// actionable for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// At least one coordinate field is empty after trimming
    MissingInput,
    /// A coordinate field is not a finite number
    NotANumber,
    /// A projected-grid input (Easting/Northing) is negative
    NegativeCoordinate,
    /// UTM zone is missing, non-integer, or outside [1, 60]
    InvalidUtmZone,
    /// The projection primitive rejected the validated input
    Projection(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::MissingInput => "Please enter both coordinate values.",
            Self::NotANumber => "Coordinates must be valid numbers.",
            Self::NegativeCoordinate => "Easting and Northing must be positive values.",
            Self::InvalidUtmZone => "UTM zone must be a whole number between 1 and 60.",
            Self::Projection(_) => "Conversion failed. Check your coordinates.",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ConvertError {}

/// Run one conversion.
///
/// `raw1` and `raw2` are the two coordinate fields exactly as typed; their
/// meaning follows the mode (see [`ConversionMode::input_labels`]). `utm`
/// carries the zone/hemisphere parameters and is only consulted for UTM
/// modes. Passing it alongside a DLTM mode is fine and ignored; passing
/// `None` with a UTM mode fails as an invalid zone.
///
/// On success the returned [`Conversion`] holds both formatted outputs and
/// the position as WGS84 degrees, whichever direction was converted.
pub fn convert(
    mode: ConversionMode,
    raw1: &str,
    raw2: &str,
    utm: Option<&UtmInput>,
) -> Result<Conversion, ConvertError> {
    let raw1 = raw1.trim();
    let raw2 = raw2.trim();
    if raw1.is_empty() || raw2.is_empty() {
        return Err(ConvertError::MissingInput);
    }

    let value1 = parse_coordinate(raw1)?;
    let value2 = parse_coordinate(raw2)?;

    if mode.projected_input() && (value1 < 0.0 || value2 < 0.0) {
        return Err(ConvertError::NegativeCoordinate);
    }

    let grid_def = if mode.uses_utm() {
        let utm = utm.ok_or(ConvertError::InvalidUtmZone)?;
        projection::utm_definition(parse_zone(&utm.zone)?, utm.hemisphere)
    } else {
        projection::DUBAI_DLTM.to_string()
    };

    match mode {
        ConversionMode::DltmToGps | ConversionMode::UtmToGps => {
            let (easting, northing) = (value1, value2);
            let (lon, lat) = projection::project(&grid_def, projection::WGS84, easting, northing)
                .map_err(|e| ConvertError::Projection(e.to_string()))?;
            Ok(Conversion {
                output1: format_value(lat, GPS_PRECISION),
                output2: format_value(lon, GPS_PRECISION),
                latitude: lat,
                longitude: lon,
            })
        }
        ConversionMode::GpsToDltm | ConversionMode::GpsToUtm => {
            let (lat, lon) = (value1, value2);
            let (easting, northing) = projection::project(projection::WGS84, &grid_def, lon, lat)
                .map_err(|e| ConvertError::Projection(e.to_string()))?;
            Ok(Conversion {
                output1: format_value(easting, GRID_PRECISION),
                output2: format_value(northing, GRID_PRECISION),
                latitude: lat,
                longitude: lon,
            })
        }
    }
}

fn format_value(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Parse a trimmed coordinate field. `f64` parsing accepts "NaN" and "inf",
/// which are not coordinates, so finiteness is checked explicitly.
fn parse_coordinate(raw: &str) -> Result<f64, ConvertError> {
    let value: f64 = raw.parse().map_err(|_| ConvertError::NotANumber)?;
    if !value.is_finite() {
        return Err(ConvertError::NotANumber);
    }
    Ok(value)
}

fn parse_zone(raw: &str) -> Result<u8, ConvertError> {
    let zone: u8 = raw.trim().parse().map_err(|_| ConvertError::InvalidUtmZone)?;
    if !(1..=60).contains(&zone) {
        return Err(ConvertError::InvalidUtmZone);
    }
    Ok(zone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Hemisphere;

    fn zone_40() -> UtmInput {
        UtmInput::new("40", Hemisphere::North)
    }

    #[test]
    fn test_missing_input_when_either_field_blank() {
        for (a, b) in [("", "2780000"), ("500000", ""), ("", ""), ("   ", "2780000")] {
            let result = convert(ConversionMode::DltmToGps, a, b, None);
            assert_eq!(result, Err(ConvertError::MissingInput), "inputs {a:?}, {b:?}");
        }
    }

    #[test]
    fn test_missing_input_checked_before_number_parse() {
        // The non-empty field is garbage, but the empty one wins
        let result = convert(ConversionMode::DltmToGps, "not-a-number", "  ", None);
        assert_eq!(result, Err(ConvertError::MissingInput));
    }

    #[test]
    fn test_not_a_number() {
        for bad in ["abc", "12,5", "1.2.3", "--4"] {
            let result = convert(ConversionMode::DltmToGps, bad, "2780000", None);
            assert_eq!(result, Err(ConvertError::NotANumber), "input {bad:?}");
        }
    }

    #[test]
    fn test_non_finite_values_rejected() {
        for bad in ["NaN", "inf", "-inf", "infinity"] {
            let result = convert(ConversionMode::GpsToDltm, bad, "55.3", None);
            assert_eq!(result, Err(ConvertError::NotANumber), "input {bad:?}");
        }
    }

    #[test]
    fn test_negative_rejected_for_grid_input_modes() {
        let result = convert(ConversionMode::DltmToGps, "-1", "2780000", None);
        assert_eq!(result, Err(ConvertError::NegativeCoordinate));

        let result = convert(ConversionMode::UtmToGps, "500000", "-0.5", Some(&zone_40()));
        assert_eq!(result, Err(ConvertError::NegativeCoordinate));
    }

    #[test]
    fn test_negative_latitude_allowed_for_gps_input_modes() {
        // Southern-hemisphere latitudes are legitimate lat/lon input
        let result =
            convert(ConversionMode::GpsToUtm, "-33.9", "18.4", Some(&UtmInput::new("34", Hemisphere::South)));
        assert!(result.is_ok(), "got {result:?}");

        let result = convert(ConversionMode::GpsToDltm, "-25.1", "55.3", None);
        assert!(result.is_ok(), "got {result:?}");
    }

    #[test]
    fn test_invalid_utm_zone_values() {
        for bad in ["0", "61", "40.5", "forty", "", "-3"] {
            let utm = UtmInput::new(bad, Hemisphere::North);
            let result = convert(ConversionMode::UtmToGps, "500000", "2780000", Some(&utm));
            assert_eq!(result, Err(ConvertError::InvalidUtmZone), "zone {bad:?}");
        }
    }

    #[test]
    fn test_missing_utm_parameters() {
        let result = convert(ConversionMode::GpsToUtm, "25.1", "55.3", None);
        assert_eq!(result, Err(ConvertError::InvalidUtmZone));
    }

    #[test]
    fn test_zone_boundaries_accepted() {
        for zone in ["1", "60", " 40 "] {
            let utm = UtmInput::new(zone, Hemisphere::North);
            let result = convert(ConversionMode::UtmToGps, "500000", "2780000", Some(&utm));
            assert!(result.is_ok(), "zone {zone:?} gave {result:?}");
        }
    }

    #[test]
    fn test_zone_never_consulted_for_dltm_modes() {
        let garbage = UtmInput::new("not-a-zone", Hemisphere::South);
        let result = convert(ConversionMode::DltmToGps, "500000", "2780000", Some(&garbage));
        assert!(result.is_ok(), "got {result:?}");
    }

    #[test]
    fn test_value_checks_run_before_zone_check() {
        // Bad coordinate and bad zone together: the coordinate error wins
        let garbage = UtmInput::new("99", Hemisphere::North);
        let result = convert(ConversionMode::UtmToGps, "abc", "2780000", Some(&garbage));
        assert_eq!(result, Err(ConvertError::NotANumber));

        let result = convert(ConversionMode::UtmToGps, "-5", "2780000", Some(&garbage));
        assert_eq!(result, Err(ConvertError::NegativeCoordinate));
    }

    #[test]
    fn test_dltm_to_gps_known_point() {
        let conversion = convert(ConversionMode::DltmToGps, "500000", "2780000", None).unwrap();
        // Easting 500000 is the false easting, so longitude is the origin
        assert!((conversion.longitude - 55.3333333333333).abs() < 1e-9);
        assert!((25.0..25.3).contains(&conversion.latitude), "lat {}", conversion.latitude);
        // output1 is latitude (~25), output2 longitude (~55), not transposed
        assert!(conversion.output1.starts_with("25."), "output1 {}", conversion.output1);
        assert!(conversion.output2.starts_with("55."), "output2 {}", conversion.output2);
    }

    #[test]
    fn test_utm_to_gps_known_point() {
        let conversion =
            convert(ConversionMode::UtmToGps, "500000", "2780000", Some(&zone_40())).unwrap();
        // Zone 40 central meridian is 57°E
        assert!((conversion.longitude - 57.0).abs() < 1e-9, "lon {}", conversion.longitude);
        assert!(conversion.output1.starts_with("25."), "output1 {}", conversion.output1);
    }

    #[test]
    fn test_gps_to_dltm_output_order_is_easting_northing() {
        let conversion = convert(ConversionMode::GpsToDltm, "25.2", "55.3333333333333", None).unwrap();
        // On the central meridian the easting equals the false easting
        let easting: f64 = conversion.output1.parse().unwrap();
        let northing: f64 = conversion.output2.parse().unwrap();
        assert!((easting - 500_000.0).abs() < 1e-3, "easting {easting}");
        assert!(northing > 2_700_000.0, "northing {northing}");
    }

    #[test]
    fn test_gps_output_has_eight_decimals() {
        let conversion = convert(ConversionMode::DltmToGps, "500000", "2780000", None).unwrap();
        for output in [&conversion.output1, &conversion.output2] {
            let decimals = output.split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 8, "output {output}");
        }
    }

    #[test]
    fn test_grid_output_has_four_decimals() {
        let conversion = convert(ConversionMode::GpsToDltm, "25.2", "55.4", None).unwrap();
        for output in [&conversion.output1, &conversion.output2] {
            let decimals = output.split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 4, "output {output}");
        }
    }

    #[test]
    fn test_position_is_wgs84_for_both_directions() {
        // Grid → GPS: position comes from the outputs
        let to_gps = convert(ConversionMode::DltmToGps, "500000", "2780000", None).unwrap();
        assert!(to_gps.latitude < 90.0 && to_gps.longitude < 180.0);

        // GPS → grid: position is the parsed input, not the projected meters
        let to_grid = convert(ConversionMode::GpsToDltm, "25.2", "55.4", None).unwrap();
        assert!((to_grid.latitude - 25.2).abs() < 1e-12);
        assert!((to_grid.longitude - 55.4).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_dltm() {
        let forward = convert(ConversionMode::DltmToGps, "512345.6789", "2791234.5678", None).unwrap();
        let back =
            convert(ConversionMode::GpsToDltm, &forward.output1, &forward.output2, None).unwrap();
        let easting: f64 = back.output1.parse().unwrap();
        let northing: f64 = back.output2.parse().unwrap();
        assert!((easting - 512_345.6789).abs() < 1e-3, "easting {easting}");
        assert!((northing - 2_791_234.5678).abs() < 1e-3, "northing {northing}");
    }

    #[test]
    fn test_round_trip_utm() {
        let utm = zone_40();
        let forward =
            convert(ConversionMode::UtmToGps, "412345.0", "2781234.0", Some(&utm)).unwrap();
        let back =
            convert(ConversionMode::GpsToUtm, &forward.output1, &forward.output2, Some(&utm))
                .unwrap();
        let easting: f64 = back.output1.parse().unwrap();
        let northing: f64 = back.output2.parse().unwrap();
        assert!((easting - 412_345.0).abs() < 1e-3, "easting {easting}");
        assert!((northing - 2_781_234.0).abs() < 1e-3, "northing {northing}");
    }

    #[test]
    fn test_error_messages_are_human_readable() {
        assert_eq!(
            ConvertError::MissingInput.to_string(),
            "Please enter both coordinate values."
        );
        assert_eq!(
            ConvertError::Projection("tmerc: y out of range".to_string()).to_string(),
            "Conversion failed. Check your coordinates."
        );
    }
}
