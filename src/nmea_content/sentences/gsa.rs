#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    ParseError,
    nmea_content::{FromTokens, sentences::ensure_tokens},
};

/// Token positions of a GSA sentence.
pub mod layout {
    pub const MIN_TOKENS: usize = 18;

    pub const SENTENCE_TYPE: usize = 0;
    pub const MODE: usize = 1;
    pub const FIX_TYPE: usize = 2;
    /// First of up to [`MAX_SATELLITES`] consecutive satellite ID tokens
    pub const SATELLITES: usize = 3;
    pub const MAX_SATELLITES: usize = 12;
    pub const PDOP: usize = 15;
    pub const HDOP: usize = 16;
    pub const VDOP: usize = 17;
}

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17
///         | | |                         |  |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSA {
    /// Sentence identifier, talker included
    pub sentence_type: String,
    /// Selection mode, `A` automatic or `M` manual
    pub mode: String,
    /// Fix type, `1` no fix, `2` 2D or `3` 3D
    pub fix_type: String,
    /// IDs of the satellites used for the fix, empty slots kept in place
    pub satellites: heapless::Vec<String, { layout::MAX_SATELLITES }>,
    /// Position Dilution of Precision
    pub pdop: String,
    /// Horizontal Dilution of Precision
    pub hdop: String,
    /// Vertical Dilution of Precision
    pub vdop: String,
}

impl GSA {
    /// IDs of the satellites actually reported, skipping empty slots.
    pub fn active_satellites(&self) -> impl Iterator<Item = &str> {
        self.satellites
            .iter()
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }
}

impl FromTokens for GSA {
    const MIN_TOKENS: usize = layout::MIN_TOKENS;

    fn from_tokens(tokens: &[&str]) -> Result<Self, ParseError> {
        ensure_tokens(tokens, Self::MIN_TOKENS)?;

        let satellites = tokens
            .iter()
            .skip(layout::SATELLITES)
            .take(layout::MAX_SATELLITES)
            .map(|id| id.to_string())
            .collect::<heapless::Vec<_, { layout::MAX_SATELLITES }>>();

        Ok(Self {
            sentence_type: tokens[layout::SENTENCE_TYPE].to_owned(),
            mode: tokens[layout::MODE].to_owned(),
            fix_type: tokens[layout::FIX_TYPE].to_owned(),
            satellites,
            pdop: tokens[layout::PDOP].to_owned(),
            hdop: tokens[layout::HDOP].to_owned(),
            vdop: tokens[layout::VDOP].to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    #[test]
    fn test_gsa_parsing() {
        let tokens = tokenize("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39");
        let gsa = GSA::from_tokens(&tokens).unwrap();

        assert_eq!(gsa.sentence_type, "$GPGSA");
        assert_eq!(gsa.mode, "A");
        assert_eq!(gsa.fix_type, "3");
        assert_eq!(gsa.satellites.len(), 12);
        assert_eq!(gsa.satellites[0], "04");
        assert_eq!(gsa.satellites[2], "");
        assert_eq!(gsa.satellites[7], "24");
        assert_eq!(
            gsa.active_satellites().collect::<Vec<_>>(),
            vec!["04", "05", "09", "12", "24"]
        );
        assert_eq!(gsa.pdop, "2.5");
        assert_eq!(gsa.hdop, "1.3");
        assert_eq!(gsa.vdop, "2.1");
    }

    #[test]
    fn test_gsa_full_constellation() {
        let tokens = tokenize("GPGSA,A,3,01,02,03,04,05,06,07,08,09,10,11,12,1.5,1.0,2.0");
        let gsa = GSA::from_tokens(&tokens).unwrap();

        let expected = (1..=12).map(|id| format!("{id:02}")).collect::<Vec<_>>();
        assert_eq!(gsa.satellites.as_slice(), expected.as_slice());
        assert_eq!(gsa.vdop, "2.0");
    }

    #[test]
    fn test_gsa_missing_fields() {
        let tokens = tokenize("GPGSA,A,3,01,02,03,04,05,06,07,08,09,10,11,12,1.5,1.0");
        assert_eq!(tokens.len(), 17);
        assert_eq!(GSA::from_tokens(&tokens), Err(ParseError::MissingFields));
    }

    #[test]
    fn test_gsa_layout() {
        assert_eq!(layout::SATELLITES + layout::MAX_SATELLITES, layout::PDOP);
        assert_eq!(layout::VDOP + 1, layout::MIN_TOKENS);
    }
}
