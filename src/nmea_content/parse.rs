use nom::{
    Finish, Parser,
    bytes::complete::take,
    character::complete::{u8, u16, u32},
    error::ErrorKind,
    number::complete::double,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    FieldError, ParseError,
    nmea_content::{Latitude, LatitudeDirection, Longitude, LongitudeDirection},
    parsing::consumed,
};

/// Conversion factor from knots to meters per second.
pub const KNOTS_TO_METERS_PER_SECOND: f64 = 0.514444444;

/// Conversion factor from knots to kilometers per hour.
pub const KNOTS_TO_KILOMETERS_PER_HOUR: f64 = 1.85;

/// Target unit of [`parse_speed`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnit {
    /// Meters per second
    MetersPerSecond,
    /// Kilometers per hour
    KilometersPerHour,
}

impl SpeedUnit {
    /// Multiplier converting a value in knots to this unit.
    pub const fn factor(self) -> f64 {
        match self {
            SpeedUnit::MetersPerSecond => KNOTS_TO_METERS_PER_SECOND,
            SpeedUnit::KilometersPerHour => KNOTS_TO_KILOMETERS_PER_HOUR,
        }
    }
}

/// Token positions of a latitude/longitude pair within a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionLayout {
    pub latitude: usize,
    pub latitude_direction: usize,
    pub longitude: usize,
    pub longitude_direction: usize,
}

/// Parses a floating-point literal that must span the whole field.
fn number(text: &str) -> Result<f64, FieldError> {
    let result: nom::IResult<&str, f64> = consumed(double, ErrorKind::Float).parse(text);

    result
        .finish()
        .map(|(_, value)| value)
        .map_err(|_| FieldError::MalformedNumber(text.to_owned()))
}

/// Parses an unsigned integer literal that must span the whole field.
pub(crate) fn count(text: &str) -> Result<usize, FieldError> {
    let result: nom::IResult<&str, u32> = consumed(u32, ErrorKind::Digit).parse(text);

    result
        .finish()
        .map(|(_, value)| value as usize)
        .map_err(|_| FieldError::MalformedNumber(text.to_owned()))
}

/// Slices the three leading two-character groups of a fixed-width field.
fn pairs(text: &str) -> Result<(&str, &str, &str), FieldError> {
    let result: nom::IResult<&str, (&str, &str, &str)> =
        (take(2u8), take(2u8), take(2u8)).parse(text);

    result
        .finish()
        .map(|(_, pairs)| pairs)
        .map_err(|_| FieldError::TooShort {
            field: text.to_owned(),
            length: 6,
        })
}

/// Splits an `HHMMSS` field into hours, minutes and seconds.
///
/// Only the first six characters are looked at, so fractional seconds are ignored.
/// The groups are not range-checked.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gps::parse_utc_time;
///
/// assert_eq!(parse_utc_time("211041"), Ok(("21", "10", "41")));
/// assert_eq!(parse_utc_time("211041.00"), Ok(("21", "10", "41")));
/// assert!(parse_utc_time("2110").is_err());
/// ```
pub fn parse_utc_time(text: &str) -> Result<(&str, &str, &str), FieldError> {
    pairs(text)
}

/// Splits a `DDMMYY` field into day, month and year.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gps::parse_utc_date;
///
/// assert_eq!(parse_utc_date("010218"), Ok(("01", "02", "18")));
/// ```
pub fn parse_utc_date(text: &str) -> Result<(&str, &str, &str), FieldError> {
    pairs(text)
}

/// Parses a `DDMM.MMMM` latitude field.
///
/// The value is divided by 100, which moves the decimal point two places; it is not a
/// degrees-and-minutes conversion. Consumers depend on this scaling.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gps::parse_latitude;
///
/// let latitude = parse_latitude("4024.98796").unwrap();
/// assert!((latitude - 40.2498796).abs() < 1e-9);
/// ```
pub fn parse_latitude(text: &str) -> Result<f64, FieldError> {
    Ok(number(text)? / 100.0)
}

/// Parses a `DDDMM.MMMM` longitude field, negative when `direction` is `"W"`.
///
/// Uses the same scaling as [`parse_latitude`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_gps::parse_longitude;
///
/// let west = parse_longitude("00340.22512", "W").unwrap();
/// assert!((west + 3.4022512).abs() < 1e-9);
///
/// let east = parse_longitude("00340.22512", "E").unwrap();
/// assert!((east - 3.4022512).abs() < 1e-9);
/// ```
pub fn parse_longitude(text: &str, direction: &str) -> Result<f64, FieldError> {
    let sign = if direction == "W" { -1.0 } else { 1.0 };
    Ok(sign * number(text)? / 100.0)
}

/// Converts a speed in knots to `unit`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gps::{SpeedUnit, parse_speed};
///
/// let speed = parse_speed("10.0", SpeedUnit::KilometersPerHour).unwrap();
/// assert!((speed - 18.5).abs() < 1e-6);
/// ```
pub fn parse_speed(text: &str, unit: SpeedUnit) -> Result<f64, FieldError> {
    Ok(number(text)? * unit.factor())
}

/// Parses a small unsigned field such as an hour, day or month.
pub(crate) fn two_digits(group: &str) -> Result<u8, FieldError> {
    let result: nom::IResult<&str, u8> = consumed(u8, ErrorKind::Digit).parse(group);

    result
        .finish()
        .map(|(_, value)| value)
        .map_err(|_| FieldError::MalformedNumber(group.to_owned()))
}

/// Parses an `HHMMSS` field into a time of day, ignoring fractional seconds.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gps::utc_time_of_day;
///
/// let time = utc_time_of_day("211041.00").unwrap();
/// assert_eq!(time.as_hms(), (21, 10, 41));
/// assert!(utc_time_of_day("251041").is_err());
/// ```
pub fn utc_time_of_day(text: &str) -> Result<time::Time, FieldError> {
    let (hours, minutes, seconds) = parse_utc_time(text)?;

    time::Time::from_hms(two_digits(hours)?, two_digits(minutes)?, two_digits(seconds)?)
        .map_err(|_| FieldError::OutOfRange(text.to_owned()))
}

/// Parses a `DDMMYY` field into a calendar date in the 21st century.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gps::utc_calendar_date;
///
/// let date = utc_calendar_date("010218").unwrap();
/// assert_eq!(date.to_calendar_date(), (2018, time::Month::February, 1));
/// ```
pub fn utc_calendar_date(text: &str) -> Result<time::Date, FieldError> {
    let (day, month, year) = parse_utc_date(text)?;

    calendar_date(2000 + i32::from(two_digits(year)?), two_digits(month)?, two_digits(day)?)
        .map_err(|_| FieldError::OutOfRange(text.to_owned()))
}

/// Parses a four-digit year field.
pub(crate) fn full_year(text: &str) -> Result<i32, FieldError> {
    let result: nom::IResult<&str, u16> = consumed(u16, ErrorKind::Digit).parse(text);

    result
        .finish()
        .map(|(_, value)| i32::from(value))
        .map_err(|_| FieldError::MalformedNumber(text.to_owned()))
}

pub(crate) fn calendar_date(
    year: i32,
    month: u8,
    day: u8,
) -> Result<time::Date, time::error::ComponentRange> {
    time::Month::try_from(month).and_then(|month| time::Date::from_calendar_date(year, month, day))
}

/// Extracts a latitude/longitude pair from the positions given by `layout`.
///
/// Checks run in field order: latitude value, latitude direction, longitude direction,
/// longitude value. A bad direction letter yields [`ParseError::InvalidDirection`], a
/// bad number [`ParseError::MissingFields`]. Only the first character of a direction
/// token is looked at.
///
/// The caller guarantees every position in `layout` is within `tokens`.
pub(crate) fn position(
    tokens: &[&str],
    layout: PositionLayout,
) -> Result<(Latitude, Longitude), ParseError> {
    let latitude = parse_latitude(tokens[layout.latitude])?;
    let latitude_direction = tokens[layout.latitude_direction]
        .chars()
        .next()
        .and_then(LatitudeDirection::from_char)
        .ok_or(ParseError::InvalidDirection)?;

    let longitude_direction = tokens[layout.longitude_direction]
        .chars()
        .next()
        .and_then(LongitudeDirection::from_char)
        .ok_or(ParseError::InvalidDirection)?;
    let longitude = parse_longitude(tokens[layout.longitude], longitude_direction.as_str())?;

    Ok((
        Latitude {
            value: latitude,
            direction: latitude_direction,
        },
        Longitude {
            value: longitude,
            direction: longitude_direction,
        },
    ))
}
