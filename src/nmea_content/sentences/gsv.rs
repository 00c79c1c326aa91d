#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    ParseError,
    nmea_content::{FromTokens, Satellite, parse::count, sentences::ensure_tokens},
};

/// Token positions of a GSV sentence.
pub mod layout {
    pub const MIN_TOKENS: usize = 4;

    pub const SENTENCE_TYPE: usize = 0;
    pub const NUMBER_OF_MESSAGES: usize = 1;
    pub const SEQUENCE_NUMBER: usize = 2;
    pub const SATELLITES_IN_VIEW: usize = 3;

    /// Tokens per satellite: id, elevation, azimuth, SNR
    pub const SATELLITE_STRIDE: usize = 4;
    /// Offset added to `n * SATELLITE_STRIDE` for the `n`-th satellite, counted from 1
    pub const SATELLITE_OFFSET: usize = 4;

    /// Position of the first token of the `n`-th satellite, counted from 1.
    pub const fn satellite(n: usize) -> usize {
        n * SATELLITE_STRIDE + SATELLITE_OFFSET
    }
}

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// The number of satellite blocks read is driven by the number-of-messages field. The
/// `n`-th block, counted from 1, starts at token [`layout::satellite`]`(n)`; reading
/// stops at the first block that does not fit entirely in the sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSV {
    /// Sentence identifier, talker included
    pub sentence_type: String,
    /// Total number of GSV sentences to be transmitted in this group
    pub number_of_messages: String,
    /// Sentence number of this GSV message within current group
    pub sequence_number: String,
    /// Total number of satellites in view
    pub satellites_in_view: String,
    /// Satellite information
    pub satellites: Vec<Satellite>,
}

impl FromTokens for GSV {
    const MIN_TOKENS: usize = layout::MIN_TOKENS;

    fn from_tokens(tokens: &[&str]) -> Result<Self, ParseError> {
        ensure_tokens(tokens, Self::MIN_TOKENS)?;

        let number_of_messages = count(tokens[layout::NUMBER_OF_MESSAGES])?;

        let satellites = (1..=number_of_messages)
            .map(layout::satellite)
            .map_while(|start| tokens.get(start..start + layout::SATELLITE_STRIDE))
            .map(|block| Satellite {
                id: block[0].to_owned(),
                elevation: block[1].to_owned(),
                azimuth: block[2].to_owned(),
                snr: block[3].to_owned(),
            })
            .collect();

        Ok(Self {
            sentence_type: tokens[layout::SENTENCE_TYPE].to_owned(),
            number_of_messages: tokens[layout::NUMBER_OF_MESSAGES].to_owned(),
            sequence_number: tokens[layout::SEQUENCE_NUMBER].to_owned(),
            satellites_in_view: tokens[layout::SATELLITES_IN_VIEW].to_owned(),
            satellites,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    fn satellite(id: &str, elevation: &str, azimuth: &str, snr: &str) -> Satellite {
        Satellite {
            id: id.to_string(),
            elevation: elevation.to_string(),
            azimuth: azimuth.to_string(),
            snr: snr.to_string(),
        }
    }

    #[test]
    fn test_gsv_parsing() {
        let tokens =
            tokenize("$GPGSV,3,1,11,01,65,123,45,02,40,210,30,03,70,300,35,04,20,090,20*72");
        let gsv = GSV::from_tokens(&tokens).unwrap();

        assert_eq!(gsv.sentence_type, "$GPGSV");
        assert_eq!(gsv.number_of_messages, "3");
        assert_eq!(gsv.sequence_number, "1");
        assert_eq!(gsv.satellites_in_view, "11");
        assert_eq!(
            gsv.satellites,
            vec![
                satellite("02", "40", "210", "30"),
                satellite("03", "70", "300", "35"),
                satellite("04", "20", "090", "20"),
            ]
        );
    }

    #[test]
    fn test_gsv_stops_when_tokens_run_out() {
        // Two blocks requested, only the block at 8..12 is present.
        let tokens = tokenize("$GPGSV,2,1,08,01,40,083,46,02,17,308,41*74");
        let gsv = GSV::from_tokens(&tokens).unwrap();
        assert_eq!(gsv.satellites, vec![satellite("02", "17", "308", "41")]);

        // A partial block is not read.
        let tokens = tokenize("$GPGSV,2,1,08,01,40,083,46,02,17,308");
        let gsv = GSV::from_tokens(&tokens).unwrap();
        assert!(gsv.satellites.is_empty());

        let tokens = tokenize("$GPGSV,1,1,01*78");
        let gsv = GSV::from_tokens(&tokens).unwrap();
        assert!(gsv.satellites.is_empty());
    }

    #[test]
    fn test_gsv_zero_messages() {
        let tokens = tokenize("$GPGSV,0,1,08,01,40,083,46,02,17,308,41");
        let gsv = GSV::from_tokens(&tokens).unwrap();
        assert!(gsv.satellites.is_empty());
    }

    #[test]
    fn test_gsv_missing_fields() {
        for sentence in ["$GPGSV,x,1,08,01,40,083,46", "$GPGSV,,1,08", "$GPGSV,-1,1,08"] {
            let tokens = tokenize(sentence);
            assert_eq!(
                GSV::from_tokens(&tokens),
                Err(ParseError::MissingFields),
                "{sentence}"
            );
        }

        let tokens = tokenize("$GPGSV,1,1");
        assert_eq!(GSV::from_tokens(&tokens), Err(ParseError::MissingFields));
    }

    #[test]
    fn test_gsv_layout() {
        assert_eq!(layout::satellite(1), 8);
        assert_eq!(layout::satellite(2), 12);
        assert_eq!(layout::satellite(3), 16);
    }
}
