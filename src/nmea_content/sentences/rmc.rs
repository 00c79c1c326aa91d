#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    FieldError, ParseError,
    nmea_content::{
        FromTokens, Latitude, Longitude, SpeedUnit,
        parse::{parse_speed, position, utc_calendar_date, utc_time_of_day},
        sentences::ensure_tokens,
    },
};

/// Token positions of an RMC sentence.
pub mod layout {
    use crate::nmea_content::PositionLayout;

    pub const MIN_TOKENS: usize = 12;

    pub const SENTENCE_TYPE: usize = 0;
    pub const UTC_TIME: usize = 1;
    pub const STATUS: usize = 2;
    pub const POSITION: PositionLayout = PositionLayout {
        latitude: 3,
        latitude_direction: 4,
        longitude: 5,
        longitude_direction: 6,
    };
    pub const SPEED: usize = 7;
    pub const COURSE: usize = 8;
    pub const UTC_DATE: usize = 9;
    // 10: magnetic variation
    pub const MODE: usize = 11;
}

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    /// Sentence identifier, talker included
    pub sentence_type: String,
    /// Fix time in UTC, `hhmmss.ss`
    pub utc_time: String,
    /// Status, `A` valid or `V` invalid
    pub status: String,
    /// Latitude
    pub latitude: Latitude,
    /// Longitude
    pub longitude: Longitude,
    /// Speed over ground in knots
    pub speed: String,
    /// Course over ground in degrees
    pub course: String,
    /// Fix date in UTC, `ddmmyy`
    pub utc_date: String,
    /// Mode indicator
    pub mode: String,
}

impl RMC {
    /// Speed over ground converted from knots to `unit`.
    pub fn speed_in(&self, unit: SpeedUnit) -> Result<f64, FieldError> {
        parse_speed(&self.speed, unit)
    }

    /// Fix date and time in UTC.
    pub fn datetime(&self) -> Result<time::PrimitiveDateTime, FieldError> {
        let date = utc_calendar_date(&self.utc_date)?;
        let time_of_day = utc_time_of_day(&self.utc_time)?;

        Ok(time::PrimitiveDateTime::new(date, time_of_day))
    }
}

impl FromTokens for RMC {
    const MIN_TOKENS: usize = layout::MIN_TOKENS;

    fn from_tokens(tokens: &[&str]) -> Result<Self, ParseError> {
        ensure_tokens(tokens, Self::MIN_TOKENS)?;

        let (latitude, longitude) = position(tokens, layout::POSITION)?;

        Ok(Self {
            sentence_type: tokens[layout::SENTENCE_TYPE].to_owned(),
            utc_time: tokens[layout::UTC_TIME].to_owned(),
            status: tokens[layout::STATUS].to_owned(),
            latitude,
            longitude,
            speed: tokens[layout::SPEED].to_owned(),
            course: tokens[layout::COURSE].to_owned(),
            utc_date: tokens[layout::UTC_DATE].to_owned(),
            mode: tokens[layout::MODE].to_owned(),
        })
    }
}
