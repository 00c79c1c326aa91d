#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    FieldError, ParseError,
    nmea_content::{
        FromTokens, Latitude, Longitude,
        parse::{position, utc_time_of_day},
        sentences::ensure_tokens,
    },
};

/// Token positions of a GLL sentence.
pub mod layout {
    use crate::nmea_content::PositionLayout;

    pub const MIN_TOKENS: usize = 7;

    pub const SENTENCE_TYPE: usize = 0;
    pub const POSITION: PositionLayout = PositionLayout {
        latitude: 1,
        latitude_direction: 2,
        longitude: 3,
        longitude_direction: 4,
    };
    pub const UTC_TIME: usize = 5;
    pub const STATUS: usize = 6;
}

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
///
/// The NMEA 2.3 mode indicator (7) is not kept.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GLL {
    /// Sentence identifier, talker included
    pub sentence_type: String,
    /// Latitude
    pub latitude: Latitude,
    /// Longitude
    pub longitude: Longitude,
    /// Fix time in UTC, `hhmmss.ss`
    pub utc_time: String,
    /// Status, `A` valid or `V` invalid
    pub status: String,
}

impl GLL {
    /// Fix time of day.
    pub fn time(&self) -> Result<time::Time, FieldError> {
        utc_time_of_day(&self.utc_time)
    }
}

impl FromTokens for GLL {
    const MIN_TOKENS: usize = layout::MIN_TOKENS;

    fn from_tokens(tokens: &[&str]) -> Result<Self, ParseError> {
        ensure_tokens(tokens, Self::MIN_TOKENS)?;

        let (latitude, longitude) = position(tokens, layout::POSITION)?;

        Ok(Self {
            sentence_type: tokens[layout::SENTENCE_TYPE].to_owned(),
            latitude,
            longitude,
            utc_time: tokens[layout::UTC_TIME].to_owned(),
            status: tokens[layout::STATUS].to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LatitudeDirection, LongitudeDirection, tokenize};

    #[test]
    fn test_gll_parsing() {
        for sentence in [
            "$GPGLL,4916.45,N,12311.12,W,225444,A*31",
            "$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C",
        ] {
            let gll = GLL::from_tokens(&tokenize(sentence)).unwrap();

            assert_eq!(gll.sentence_type, "$GPGLL");
            assert!((gll.latitude.value - 49.1645).abs() < 1e-9);
            assert_eq!(gll.latitude.direction, LatitudeDirection::North);
            assert!((gll.longitude.value + 123.1112).abs() < 1e-9);
            assert_eq!(gll.longitude.direction, LongitudeDirection::West);
            assert_eq!(gll.utc_time, "225444");
            assert_eq!(gll.status, "A");
        }
    }

    #[test]
    fn test_gll_errors() {
        let tokens = tokenize("$GPGLL,4916.45,N,12311.12*0A");
        assert_eq!(GLL::from_tokens(&tokens), Err(ParseError::MissingFields));

        let tokens = tokenize("$GPGLL,abc,N,12311.12,W,225444,A");
        assert_eq!(GLL::from_tokens(&tokens), Err(ParseError::MissingFields));

        let tokens = tokenize("$GPGLL,4916.45,N,def,W,225444,A");
        assert_eq!(GLL::from_tokens(&tokens), Err(ParseError::MissingFields));

        let tokens = tokenize("$GPGLL,4916.45,N,12311.12,S,225444,A");
        assert_eq!(GLL::from_tokens(&tokens), Err(ParseError::InvalidDirection));
    }

    #[test]
    fn test_gll_time() {
        let gll = GLL::from_tokens(&tokenize("$GPGLL,4916.45,N,12311.12,W,225444,A")).unwrap();
        assert_eq!(gll.time().unwrap().as_hms(), (22, 54, 44));

        let gll = GLL::from_tokens(&tokenize("$GPGLL,4916.45,N,12311.12,W,,V")).unwrap();
        assert!(gll.time().is_err());
    }
}
