mod gga;
mod gll;
mod gsa;
mod gsv;
mod rmc;
mod vtg;
mod zda;

pub use gga::GGA;
pub use gll::GLL;
pub use gsa::GSA;
pub use gsv::GSV;
pub use rmc::RMC;
pub use vtg::VTG;
pub use zda::ZDA;

/// Token-index tables of every supported sentence.
///
/// Each table maps a record field to the position of its token in the output of
/// [`tokenize`](crate::tokenize). Positions are not contiguous: tokens that carry no
/// record field (unit letters, for instance) are skipped.
pub mod layout {
    pub use super::gga::layout as gga;
    pub use super::gll::layout as gll;
    pub use super::gsa::layout as gsa;
    pub use super::gsv::layout as gsv;
    pub use super::rmc::layout as rmc;
    pub use super::vtg::layout as vtg;
    pub use super::zda::layout as zda;
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// A trait for records that can be extracted from a tokenized sentence.
///
/// This trait is implemented by all strongly-typed NMEA sentence structs. Extraction
/// maps fixed token positions onto record fields; it never looks at the checksum,
/// which [`parse`](crate::parse) has already verified.
pub trait FromTokens: Sized {
    /// The minimum number of tokens, sentence identifier included.
    const MIN_TOKENS: usize;

    /// Extracts the record from the tokens of a sentence.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingFields`] when fewer than [`Self::MIN_TOKENS`] tokens
    /// are given or a numeric field does not parse, and [`ParseError::InvalidDirection`]
    /// for a bad latitude or longitude direction.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nmea0183_gps::{FromTokens, VTG, tokenize};
    ///
    /// let tokens = tokenize("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25");
    /// let vtg = VTG::from_tokens(&tokens).unwrap();
    /// assert_eq!(vtg.speed_kh, "010.2");
    /// ```
    fn from_tokens(tokens: &[&str]) -> Result<Self, ParseError>;
}

/// Rejects token sequences shorter than `min`.
pub(crate) fn ensure_tokens(tokens: &[&str], min: usize) -> Result<(), ParseError> {
    if tokens.len() < min {
        return Err(ParseError::MissingFields);
    }

    Ok(())
}

macro_rules! direction_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[cfg_attr(feature = "serde", serde(rename = $char))]
                $variant,
            )*
        }

        impl $name {
            /// Maps a direction letter to its variant.
            pub fn from_char(c: char) -> Option<Self> {
                let mut buf = [0; 4];
                let letter: &str = c.encode_utf8(&mut buf);

                match letter {
                    $($char => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The direction letter as transmitted.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $char,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

direction_enum! {
    /// Hemisphere of a latitude
    pub enum LatitudeDirection {
        /// N - North
        "N" => North,
        /// S - South
        "S" => South,
    }
}

direction_enum! {
    /// Hemisphere of a longitude
    pub enum LongitudeDirection {
        /// E - East
        "E" => East,
        /// W - West
        "W" => West,
    }
}

/// Latitude in the two-place scaled form produced by [`parse_latitude`](crate::parse_latitude).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latitude {
    /// Latitude value, not signed by direction
    pub value: f64,
    /// North or south
    pub direction: LatitudeDirection,
}

/// Longitude in the two-place scaled form produced by [`parse_longitude`](crate::parse_longitude).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Longitude {
    /// Longitude value, negative to the west
    pub value: f64,
    /// East or west
    pub direction: LongitudeDirection,
}

/// Satellite information used in [`GSV`] sentences
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Satellite {
    pub id: String,
    pub elevation: String,
    pub azimuth: String,
    pub snr: String,
}
