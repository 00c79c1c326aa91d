#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    FieldError, ParseError,
    nmea_content::{FromTokens, SpeedUnit, parse::parse_speed, sentences::ensure_tokens},
};

/// Token positions of a VTG sentence.
pub mod layout {
    pub const MIN_TOKENS: usize = 10;

    pub const SENTENCE_TYPE: usize = 0;
    pub const COURSE: usize = 1;
    pub const COURSE_MAGNETIC: usize = 3;
    pub const SPEED_KN: usize = 5;
    pub const SPEED_KH: usize = 7;
    pub const MODE: usize = 9;
}

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///         1    2 3    4 5    6 7    8 9
///         |    | |    | |    | |    | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
///
/// The unit letters (2, 4, 6, 8) are not kept.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VTG {
    /// Sentence identifier, talker included
    pub sentence_type: String,
    /// Course over ground, degrees true
    pub course: String,
    /// Course over ground, degrees magnetic
    pub course_magnetic: String,
    /// Speed over ground in knots
    pub speed_kn: String,
    /// Speed over ground in kilometers per hour
    pub speed_kh: String,
    /// FAA mode indicator
    pub mode: String,
}

impl VTG {
    /// Speed over ground converted from the knots field to `unit`.
    pub fn speed_in(&self, unit: SpeedUnit) -> Result<f64, FieldError> {
        parse_speed(&self.speed_kn, unit)
    }
}

impl FromTokens for VTG {
    const MIN_TOKENS: usize = layout::MIN_TOKENS;

    fn from_tokens(tokens: &[&str]) -> Result<Self, ParseError> {
        ensure_tokens(tokens, Self::MIN_TOKENS)?;

        Ok(Self {
            sentence_type: tokens[layout::SENTENCE_TYPE].to_owned(),
            course: tokens[layout::COURSE].to_owned(),
            course_magnetic: tokens[layout::COURSE_MAGNETIC].to_owned(),
            speed_kn: tokens[layout::SPEED_KN].to_owned(),
            speed_kh: tokens[layout::SPEED_KH].to_owned(),
            mode: tokens[layout::MODE].to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    #[test]
    fn test_vtg_parsing() {
        let tokens = tokenize("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25");
        let vtg = VTG::from_tokens(&tokens).unwrap();

        assert_eq!(
            vtg,
            VTG {
                sentence_type: "$GPVTG".to_string(),
                course: "054.7".to_string(),
                course_magnetic: "034.4".to_string(),
                speed_kn: "005.5".to_string(),
                speed_kh: "010.2".to_string(),
                mode: "A".to_string(),
            }
        );

        let kmh = vtg.speed_in(SpeedUnit::KilometersPerHour).unwrap();
        assert!((kmh - 10.175).abs() < 1e-9);
    }

    #[test]
    fn test_vtg_missing_fields() {
        let tokens = tokenize("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K");
        assert_eq!(VTG::from_tokens(&tokens), Err(ParseError::MissingFields));
    }
}
