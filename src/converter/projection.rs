//! Coordinate system definitions and the projection primitive.
//!
//! All projection math is delegated to `proj4rs`. This module owns the
//! definition strings and a thin wrapper that hides one `proj4rs` quirk:
//! geographic (lat/lon) coordinate systems are transformed in radians, while
//! projected systems work in meters. Callers on both sides of the wrapper
//! always see degrees and meters.

use proj4rs::Proj;
use proj4rs::errors::Error as ProjError;
use proj4rs::transform::transform;

use crate::models::Hemisphere;

/// Dubai Local Transverse Mercator. Fixed definition: false easting 500000 m,
/// false northing 0, longitude origin 55°20′, scale factor 1, WGS84 ellipsoid.
pub const DUBAI_DLTM: &str = "+proj=tmerc +lat_0=0 +lon_0=55.3333333333333 +k=1 +x_0=500000 \
                              +y_0=0 +datum=WGS84 +units=m +no_defs";

/// WGS84 geographic lat/lon (EPSG:4326)
pub const WGS84: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// Build a UTM definition for a validated zone and hemisphere.
///
/// The zone must already be validated to [1, 60]; this function does not
/// re-check it.
pub fn utm_definition(zone: u8, hemisphere: Hemisphere) -> String {
    match hemisphere {
        Hemisphere::North => {
            format!("+proj=utm +zone={zone} +datum=WGS84 +units=m +no_defs")
        }
        Hemisphere::South => {
            format!("+proj=utm +zone={zone} +south +datum=WGS84 +units=m +no_defs")
        }
    }
}

/// Transform a single (x, y) point between two coordinate systems.
///
/// `x` is easting or longitude, `y` is northing or latitude; the caller is
/// responsible for ordering lat/lon pairs as (lon, lat). Geographic values
/// are taken and returned in degrees, projected values in meters.
///
/// # Errors
/// Returns the underlying `proj4rs` error for malformed definition strings
/// or out-of-domain coordinates.
pub fn project(source_def: &str, target_def: &str, x: f64, y: f64) -> Result<(f64, f64), ProjError> {
    let source = Proj::from_proj_string(source_def)?;
    let target = Proj::from_proj_string(target_def)?;

    let mut point = (x, y, 0.0);
    if source.is_latlong() {
        point.0 = point.0.to_radians();
        point.1 = point.1.to_radians();
    }

    transform(&source, &target, &mut point)?;

    if target.is_latlong() {
        point.0 = point.0.to_degrees();
        point.1 = point.1.to_degrees();
    }

    Ok((point.0, point.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utm_definition_north() {
        let def = utm_definition(40, Hemisphere::North);
        assert_eq!(def, "+proj=utm +zone=40 +datum=WGS84 +units=m +no_defs");
    }

    #[test]
    fn test_utm_definition_south() {
        let def = utm_definition(33, Hemisphere::South);
        assert!(def.contains("+zone=33"));
        assert!(def.contains("+south"));
    }

    #[test]
    fn test_project_dltm_false_easting_is_central_meridian() {
        // x_0 = 500000 means easting 500000 sits exactly on the longitude origin
        let (lon, lat) = project(DUBAI_DLTM, WGS84, 500_000.0, 2_780_000.0).unwrap();
        assert!((lon - 55.3333333333333).abs() < 1e-9, "lon was {lon}");
        assert!((25.0..25.3).contains(&lat), "lat was {lat}");
    }

    #[test]
    fn test_project_round_trip_meters() {
        let (lon, lat) = project(DUBAI_DLTM, WGS84, 512_345.0, 2_791_000.0).unwrap();
        let (easting, northing) = project(WGS84, DUBAI_DLTM, lon, lat).unwrap();
        assert!((easting - 512_345.0).abs() < 1e-4, "easting was {easting}");
        assert!((northing - 2_791_000.0).abs() < 1e-4, "northing was {northing}");
    }

    #[test]
    fn test_project_utm_zone_40_covers_dubai() {
        // Zone 40 central meridian is 57°E
        let (lon, lat) = project(&utm_definition(40, Hemisphere::North), WGS84, 500_000.0, 2_780_000.0)
            .unwrap();
        assert!((lon - 57.0).abs() < 1e-9, "lon was {lon}");
        assert!((25.0..25.3).contains(&lat), "lat was {lat}");
    }

    #[test]
    fn test_project_rejects_malformed_definition() {
        assert!(project("+proj=definitely-not-a-projection", WGS84, 1.0, 2.0).is_err());
    }
}
