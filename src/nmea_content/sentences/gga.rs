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

/// Token positions of a GGA sentence.
pub mod layout {
    use crate::nmea_content::PositionLayout;

    pub const MIN_TOKENS: usize = 15;

    pub const SENTENCE_TYPE: usize = 0;
    pub const UTC_TIME: usize = 1;
    pub const POSITION: PositionLayout = PositionLayout {
        latitude: 2,
        latitude_direction: 3,
        longitude: 4,
        longitude_direction: 5,
    };
    pub const QUALITY: usize = 6;
    pub const SATELLITES_USED: usize = 7;
    pub const HDOP: usize = 8;
    pub const ALTITUDE: usize = 9;
    // 10: altitude units
    pub const GEOIDAL_SEPARATION: usize = 11;
    // 12: separation units, 13: age of differential data
    pub const DGPS: usize = 14;
}

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GGA {
    /// Sentence identifier, talker included
    pub sentence_type: String,
    /// Fix time in UTC, `hhmmss.ss`
    pub utc_time: String,
    /// Latitude
    pub latitude: Latitude,
    /// Longitude
    pub longitude: Longitude,
    /// GPS Quality Indicator
    pub quality: String,
    /// Number of satellites in use
    pub satellites_used: String,
    /// Horizontal Dilution of Precision
    pub hdop: String,
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: String,
    /// Geoidal separation in meters
    pub geoidal_separation: String,
    /// Differential reference station ID
    pub dgps: String,
}

impl GGA {
    /// Fix time of day.
    pub fn time(&self) -> Result<time::Time, FieldError> {
        utc_time_of_day(&self.utc_time)
    }
}

impl FromTokens for GGA {
    const MIN_TOKENS: usize = layout::MIN_TOKENS;

    fn from_tokens(tokens: &[&str]) -> Result<Self, ParseError> {
        ensure_tokens(tokens, Self::MIN_TOKENS)?;

        let (latitude, longitude) = position(tokens, layout::POSITION)?;

        Ok(Self {
            sentence_type: tokens[layout::SENTENCE_TYPE].to_owned(),
            utc_time: tokens[layout::UTC_TIME].to_owned(),
            latitude,
            longitude,
            quality: tokens[layout::QUALITY].to_owned(),
            satellites_used: tokens[layout::SATELLITES_USED].to_owned(),
            hdop: tokens[layout::HDOP].to_owned(),
            altitude: tokens[layout::ALTITUDE].to_owned(),
            geoidal_separation: tokens[layout::GEOIDAL_SEPARATION].to_owned(),
            dgps: tokens[layout::DGPS].to_owned(),
        })
    }
}
