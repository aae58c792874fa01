//! Outbound link construction for a converted position.
//!
//! Pure string builders over the WGS84 (latitude, longitude) pair kept by
//! every successful conversion. The WhatsApp link percent-encodes the whole
//! message as a URL query component.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Query-component encoding: everything except unreserved marks is escaped
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Map link for a WGS84 position
pub fn maps_url(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps?q={latitude},{longitude}")
}

/// Plain-text share message wrapping the map link
pub fn share_message(latitude: f64, longitude: f64) -> String {
    format!("Here is the plot location: {}", maps_url(latitude, longitude))
}

/// WhatsApp share link carrying the encoded message
pub fn whatsapp_url(latitude: f64, longitude: f64) -> String {
    let message = share_message(latitude, longitude);
    format!("https://wa.me/?text={}", utf8_percent_encode(&message, COMPONENT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_url_is_lat_comma_lon() {
        assert_eq!(maps_url(25.1, 55.3), "https://www.google.com/maps?q=25.1,55.3");
    }

    #[test]
    fn test_maps_url_keeps_full_precision() {
        let url = maps_url(25.12345678, 55.33333333);
        assert_eq!(url, "https://www.google.com/maps?q=25.12345678,55.33333333");
    }

    #[test]
    fn test_maps_url_negative_coordinates() {
        assert_eq!(maps_url(-33.9, 18.4), "https://www.google.com/maps?q=-33.9,18.4");
    }

    #[test]
    fn test_share_message_wraps_link() {
        assert_eq!(
            share_message(25.1, 55.3),
            "Here is the plot location: https://www.google.com/maps?q=25.1,55.3"
        );
    }

    #[test]
    fn test_whatsapp_url_encodes_message_as_component() {
        assert_eq!(
            whatsapp_url(25.1, 55.3),
            "https://wa.me/?text=Here%20is%20the%20plot%20location%3A%20https%3A%2F%2Fwww.google.com%2Fmaps%3Fq%3D25.1%2C55.3"
        );
    }

    #[test]
    fn test_whatsapp_url_leaves_unreserved_marks() {
        // Dots and hyphens survive encoding, so coordinates stay readable
        let url = whatsapp_url(-25.5, 55.25);
        assert!(url.contains("-25.5"));
        assert!(url.contains("55.25"));
        assert!(!url.contains(' '));
    }
}
