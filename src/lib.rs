//! # NMEA 0183 GPS Sentence Parser
//!
//! This library parses NMEA 0183 sentences of the form `$TTSSS,D1,D2,...,Dn*CC` into
//! strongly-typed records.
//!
//! Seven sentence types are supported: GGA, GLL, GSA, GSV, RMC, VTG and ZDA.
//! A sentence goes through:
//! - Checksum validation of the `*CC` suffix
//! - Tokenization of the payload on `,`
//! - Identification of the sentence type from the first token
//! - Extraction of the record from fixed token positions
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_gps::{LongitudeDirection, Sample, parse};
//!
//! let sample = parse("$GNRMC,211041.00,A,4024.98796,N,00340.22512,W,0.027,,010218,,,D*7B");
//!
//! match sample {
//!     Ok(Sample::RMC(rmc)) => {
//!         assert_eq!(rmc.status, "A");
//!         assert_eq!(rmc.longitude.direction, LongitudeDirection::West);
//!         assert!(rmc.longitude.value < 0.0);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! Errors are reported as [`ParseError`] values. The crate logs rejections through the
//! [`log`] facade at `debug` level; install any logger to see them.

pub mod error;
mod nmea0183;
pub mod nmea_content;
pub mod parsing;

pub use error::{ChecksumError, FieldError, ParseError};
pub use nmea_content::*;
pub use nmea0183::*;
pub use parsing::{split, tokenize};

#[cfg(test)]
mod tests {
    mod checksum;
    mod samples;
    #[cfg(feature = "serde")]
    mod serialization;
}
