//! DLTM Converter - Convert between Dubai DLTM, UTM and WGS84 coordinates
//!
//! This library implements a mode-driven coordinate conversion pipeline for
//! Dubai-area surveying work, with the projection math delegated to
//! `proj4rs`. It supports:
//!
//! - Converting Dubai Local Transverse Mercator Easting/Northing to and from
//!   WGS84 latitude/longitude
//! - Converting UTM Easting/Northing (any zone/hemisphere) to and from WGS84
//! - A bounded, session-scoped log of recent conversions
//! - Map/WhatsApp share links and clipboard export for converted positions
//!
//! # Example
//!
//! ```
//! use dltm_converter::{ConversionMode, convert};
//!
//! let conversion = convert(ConversionMode::DltmToGps, "500000", "2780000", None)?;
//! println!("{}, {}", conversion.output1, conversion.output2);
//! # Ok::<(), dltm_converter::ConvertError>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod converter;
pub mod history;
pub mod models;
pub mod share;
pub mod storage;
pub mod tui;

// Re-export commonly used types
pub use converter::{ConvertError, convert};
pub use history::{HISTORY_CAP, HistoryLog};
pub use models::{Conversion, ConversionMode, Hemisphere, HistoryEntry, UtmInput};
