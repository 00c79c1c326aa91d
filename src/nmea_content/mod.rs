//! # NMEA 0183 Sentence Content
//!
//! Strongly-typed records for the supported sentences, and the dispatcher that turns a
//! raw sentence into one of them.
//!
//! Parsing runs in a fixed order: checksum validation, tokenization, identification of
//! the sentence type from the first token, then extraction of the matching record from
//! fixed token positions.

mod parse;
mod sentences;

use std::str::FromStr;

use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use parse::{
    KNOTS_TO_KILOMETERS_PER_HOUR, KNOTS_TO_METERS_PER_SECOND, PositionLayout, SpeedUnit,
    parse_latitude, parse_longitude, parse_speed, parse_utc_date, parse_utc_time,
    utc_calendar_date, utc_time_of_day,
};
pub use sentences::{
    FromTokens, GGA, GLL, GSA, GSV, Latitude, LatitudeDirection, Longitude, LongitudeDirection,
    RMC, Satellite, VTG, ZDA, layout,
};

use crate::{ParseError, nmea0183::validate, parsing::tokenize};

macro_rules! sentence_types {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $code:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every sentence type, in identification priority order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// The three-letter sentence code.
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)*
                }
            }

            /// The minimum token count of the sentence, identifier included.
            pub const fn min_tokens(self) -> usize {
                match self {
                    $(Self::$variant => <$variant as FromTokens>::MIN_TOKENS,)*
                }
            }
        }
    };
}

sentence_types! {
    /// The supported sentence types.
    pub enum SentenceType {
        /// Global Positioning System Fix Data
        "GGA" => GGA,
        /// Geographic Position - Latitude/Longitude
        "GLL" => GLL,
        /// GPS DOP and active satellites
        "GSA" => GSA,
        /// Satellites in View
        "GSV" => GSV,
        /// Recommended Minimum Navigation Information
        "RMC" => RMC,
        /// Track made good and Ground speed
        "VTG" => VTG,
        /// Time & Date - UTC, day, month, year and local time zone
        "ZDA" => ZDA,
    }
}

impl SentenceType {
    /// Identifies the sentence type from the sentence identifier token.
    ///
    /// Talker prefixes vary (`$GPGGA`, `$GNRMC`, ...), so the token is searched for each
    /// code in [`SentenceType::ALL`] order and the first contained code wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_gps::SentenceType;
    ///
    /// assert_eq!(SentenceType::identify("$GNRMC"), Some(SentenceType::RMC));
    /// assert_eq!(SentenceType::identify("GPGSV"), Some(SentenceType::GSV));
    /// assert_eq!(SentenceType::identify("$GPXXX"), None);
    /// ```
    pub fn identify(token: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|sentence_type| token.contains(sentence_type.code()))
    }
}

impl std::fmt::Display for SentenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A parsed sentence of any supported type.
///
/// `Sample` is the output of [`parse`]; each variant wraps the corresponding
/// strongly-typed record. There is no catch-all variant: unrecognized sentences are
/// reported as [`ParseError::UnsupportedType`].
///
/// ## Example Usage
///
/// ```rust
/// use nmea0183_gps::{Sample, parse};
///
/// let sample = parse("$GPZDA,201530.00,04,07,2002,00,00*60").unwrap();
/// match sample {
///     Sample::ZDA(zda) => {
///         assert_eq!(zda.utc_year, "2002");
///     }
///     _ => unreachable!(),
/// }
/// ```
///
/// ## Supported Sentence Types
///
/// | Variant      | Sentence Type                                           | Description                      |
/// |--------------|---------------------------------------------------------|----------------------------------|
/// | GGA([`GGA`]) | Global Positioning System Fix Data                      | GPS position and fix quality     |
/// | GLL([`GLL`]) | Geographic Position - Latitude/Longitude                | Latitude/longitude with time     |
/// | GSA([`GSA`]) | GPS DOP and active satellites                           | Satellite constellation info     |
/// | GSV([`GSV`]) | Satellites in View                                      | Individual satellite details     |
/// | RMC([`RMC`]) | Recommended Minimum Navigation Information              | Essential navigation data        |
/// | VTG([`VTG`]) | Track made good and Ground speed                        | Velocity information             |
/// | ZDA([`ZDA`]) | Time & Date - UTC, day, month, year and local time zone | UTC time and date with time zone |
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// Geographic Position - Latitude/Longitude
    GLL(GLL),
    /// GPS DOP and active satellites
    GSA(GSA),
    /// Satellites in View
    GSV(GSV),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Track made good and Ground speed
    VTG(VTG),
    /// Time & Date - UTC, day, month, year and local time zone
    ZDA(ZDA),
}

impl Sample {
    /// The type of the wrapped record.
    pub fn sentence_type(&self) -> SentenceType {
        match self {
            Sample::GGA(_) => SentenceType::GGA,
            Sample::GLL(_) => SentenceType::GLL,
            Sample::GSA(_) => SentenceType::GSA,
            Sample::GSV(_) => SentenceType::GSV,
            Sample::RMC(_) => SentenceType::RMC,
            Sample::VTG(_) => SentenceType::VTG,
            Sample::ZDA(_) => SentenceType::ZDA,
        }
    }
}

impl FromStr for Sample {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses a complete sentence into a [`Sample`].
///
/// The input is a single line without trailing CR/LF, shaped like
/// `$GPGGA,field1,...,fieldN*CC`.
///
/// # Errors
///
/// - [`ParseError::InvalidFormat`]: the checksum is missing or does not match; no field
///   is looked at.
/// - [`ParseError::UnsupportedType`]: the identifier contains none of the supported codes.
/// - [`ParseError::MissingFields`] and [`ParseError::InvalidDirection`]: reported by the
///   record extraction, see [`FromTokens`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_gps::{ParseError, Sample, parse};
///
/// let sample = parse("$GNRMC,211041.00,A,4024.98796,N,00340.22512,W,0.027,,010218,,,D*7B");
/// assert!(matches!(sample, Ok(Sample::RMC(_))));
///
/// let sample = parse("$GNRMC,211041.00,A,4024.98796,N,00340.22512,W,0.027,,010218,,,D*7C");
/// assert_eq!(sample, Err(ParseError::InvalidFormat));
/// ```
pub fn parse(sentence: &str) -> Result<Sample, ParseError> {
    if let Err(e) = validate(sentence) {
        debug!("rejecting {sentence:?}: {e}");
        return Err(ParseError::InvalidFormat);
    }

    let tokens = tokenize(sentence);

    let Some(identifier) = tokens.first() else {
        debug!("rejecting {sentence:?}: no tokens");
        return Err(ParseError::UnknownError);
    };

    let Some(sentence_type) = SentenceType::identify(identifier) else {
        debug!("rejecting {sentence:?}: unsupported sentence {identifier:?}");
        return Err(ParseError::UnsupportedType);
    };

    trace!("{sentence_type} sentence with {} tokens", tokens.len());

    let sample = match sentence_type {
        SentenceType::GGA => GGA::from_tokens(&tokens).map(Sample::GGA),
        SentenceType::GLL => GLL::from_tokens(&tokens).map(Sample::GLL),
        SentenceType::GSA => GSA::from_tokens(&tokens).map(Sample::GSA),
        SentenceType::GSV => GSV::from_tokens(&tokens).map(Sample::GSV),
        SentenceType::RMC => RMC::from_tokens(&tokens).map(Sample::RMC),
        SentenceType::VTG => VTG::from_tokens(&tokens).map(Sample::VTG),
        SentenceType::ZDA => ZDA::from_tokens(&tokens).map(Sample::ZDA),
    };

    if let Err(e) = &sample {
        debug!("rejecting {sentence_type} sentence {sentence:?}: {e}");
    }

    sample
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_priority() {
        assert_eq!(SentenceType::identify("$GPGGA"), Some(SentenceType::GGA));
        assert_eq!(SentenceType::identify("$GLGLL"), Some(SentenceType::GLL));
        assert_eq!(SentenceType::identify("$BDGSA"), Some(SentenceType::GSA));
        assert_eq!(SentenceType::identify("$GAZDA"), Some(SentenceType::ZDA));
        assert_eq!(SentenceType::identify("$GPVTG"), Some(SentenceType::VTG));
        // Containment, first code in priority order wins.
        assert_eq!(SentenceType::identify("RMCGGA"), Some(SentenceType::GGA));
        assert_eq!(SentenceType::identify("$GPgga"), None);
        assert_eq!(SentenceType::identify(""), None);
    }

    #[test]
    fn test_sentence_type_table() {
        let codes = SentenceType::ALL
            .iter()
            .map(|sentence_type| sentence_type.code())
            .collect::<Vec<_>>();
        assert_eq!(codes, vec!["GGA", "GLL", "GSA", "GSV", "RMC", "VTG", "ZDA"]);

        let minimums = SentenceType::ALL
            .iter()
            .map(|sentence_type| sentence_type.min_tokens())
            .collect::<Vec<_>>();
        assert_eq!(minimums, vec![15, 7, 18, 4, 12, 10, 7]);
    }

    #[test]
    fn test_parse_dispatch() {
        let valid = [
            ("$GPGGA,092725.00,4717.11399,N,00833.91590,E,1,08,1.01,499.6,M,48.0,M,,*5B", SentenceType::GGA),
            ("$GPGLL,4916.45,N,12311.12,W,225444,A*31", SentenceType::GLL),
            ("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39", SentenceType::GSA),
            ("$GPGSV,1,1,01*78", SentenceType::GSV),
            ("$GNRMC,211041.00,A,4024.98796,N,00340.22512,W,0.027,,010218,,,D*7B", SentenceType::RMC),
            ("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25", SentenceType::VTG),
            ("$GPZDA,201530.00,04,07,2002,00,00*60", SentenceType::ZDA),
        ];

        for (sentence, expected) in valid {
            let result = parse(sentence);
            assert!(result.is_ok(), "Failed to parse valid sentence: {sentence}, error: {result:?}");
            assert_eq!(result.unwrap().sentence_type(), expected);
        }
    }

    #[test]
    fn test_from_str() {
        let sample: Sample = "$GPGSV,1,1,01*78".parse().unwrap();
        assert_eq!(sample.sentence_type(), SentenceType::GSV);

        let result = "$GPGSV,1,1,01*79".parse::<Sample>();
        assert_eq!(result, Err(ParseError::InvalidFormat));
    }
}
