#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    FieldError, ParseError,
    nmea_content::{
        FromTokens,
        parse::{calendar_date, full_year, two_digits, utc_time_of_day},
        sentences::ensure_tokens,
    },
};

/// Token positions of a ZDA sentence.
pub mod layout {
    pub const MIN_TOKENS: usize = 7;

    pub const SENTENCE_TYPE: usize = 0;
    pub const UTC_TIME: usize = 1;
    pub const UTC_DAY: usize = 2;
    pub const UTC_MONTH: usize = 3;
    pub const UTC_YEAR: usize = 4;
    pub const LOCAL_ZONE_HOURS: usize = 5;
    pub const LOCAL_ZONE_MINUTES: usize = 6;
}

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZDA {
    pub sentence_type: String,
    pub utc_time: String,
    pub utc_day: String,
    pub utc_month: String,
    pub utc_year: String,
    pub local_zone_hours: String,
    pub local_zone_minutes: String,
}

impl ZDA {
    /// Date and time in UTC, ignoring the local zone fields.
    pub fn datetime(&self) -> Result<time::PrimitiveDateTime, FieldError> {
        let date = calendar_date(
            full_year(&self.utc_year)?,
            two_digits(&self.utc_month)?,
            two_digits(&self.utc_day)?,
        )
        .map_err(|_| {
            FieldError::OutOfRange(format!(
                "{},{},{}",
                self.utc_day, self.utc_month, self.utc_year
            ))
        })?;

        Ok(time::PrimitiveDateTime::new(date, utc_time_of_day(&self.utc_time)?))
    }
}

impl FromTokens for ZDA {
    const MIN_TOKENS: usize = layout::MIN_TOKENS;

    fn from_tokens(tokens: &[&str]) -> Result<Self, ParseError> {
        ensure_tokens(tokens, Self::MIN_TOKENS)?;

        Ok(Self {
            sentence_type: tokens[layout::SENTENCE_TYPE].to_owned(),
            utc_time: tokens[layout::UTC_TIME].to_owned(),
            utc_day: tokens[layout::UTC_DAY].to_owned(),
            utc_month: tokens[layout::UTC_MONTH].to_owned(),
            utc_year: tokens[layout::UTC_YEAR].to_owned(),
            local_zone_hours: tokens[layout::LOCAL_ZONE_HOURS].to_owned(),
            local_zone_minutes: tokens[layout::LOCAL_ZONE_MINUTES].to_owned(),
        })
    }
}
