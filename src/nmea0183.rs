//! # NMEA 0183 Checksum Validation
//!
//! A sentence has the shape `$HHH,D1,D2,...,Dn*CC`, where `CC` is the XOR of every
//! byte between `$` and `*` rendered as two uppercase hexadecimal digits.
//!
//! Validation runs before any tokenization for field extraction: a sentence failing
//! it is rejected without looking at its fields.

use nom::{AsBytes, Input};

use crate::{error::ChecksumError, parsing::split};

/// Calculates the NMEA 0183 checksum for the given message content.
///
/// The NMEA 0183 checksum is calculated by performing an XOR (exclusive OR) operation
/// on all bytes in the message content. This includes everything between the '$' prefix
/// and the '*' checksum delimiter, but excludes both the '$' and '*' characters themselves.
///
/// # Arguments
///
/// * `input` - The message content to calculate checksum for (without '$' prefix or '*' delimiter)
///
/// # Returns
///
/// A tuple of (input, checksum) where:
/// - `input` is returned unchanged (zero-copy)
/// - `checksum` is the calculated XOR value as a u8
///
/// # Examples
///
/// ```rust
/// use nmea0183_gps::checksum;
///
/// // Calculate checksum for "GPGGA,data"
/// let (_, cc) = checksum("GPGGA,data");
/// assert_eq!(cc, 0x6A);
/// ```
pub fn checksum<I>(input: I) -> (I, u8)
where
    I: Input + AsBytes,
{
    let calculated_checksum = input
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte);

    (input, calculated_checksum)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gps::format_checksum;
///
/// assert_eq!(format_checksum(0x7B), "7B");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Validates the checksum of a complete sentence.
///
/// The sentence is split on `*`; the first part is the payload (a single leading `$`
/// is ignored) and the second part is the transmitted checksum. The transmitted text
/// must equal [`format_checksum`] of the calculated value exactly, so the comparison is
/// case-sensitive and length-exact.
///
/// Returns the calculated checksum on success.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gps::{ChecksumError, validate};
///
/// assert_eq!(validate("$GPGGA,data*6A"), Ok(0x6A));
/// assert_eq!(validate("$GPGGA,data"), Err(ChecksumError::Missing));
/// assert!(matches!(validate("$GPGGA,data*6a"), Err(ChecksumError::Mismatch { .. })));
/// ```
pub fn validate(sentence: &str) -> Result<u8, ChecksumError> {
    let parts = split(sentence, '*');

    let (payload, found) = match parts.as_slice() {
        [payload, found, ..] if !found.is_empty() => (*payload, *found),
        _ => return Err(ChecksumError::Missing),
    };

    let payload = payload.strip_prefix('$').unwrap_or(payload);
    let (_, calculated) = checksum(payload);
    let expected = format_checksum(calculated);

    if expected != found {
        return Err(ChecksumError::Mismatch {
            expected,
            found: found.to_owned(),
        });
    }

    Ok(calculated)
}

/// Returns `true` when the sentence carries a checksum matching its payload.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gps::is_valid;
///
/// assert!(is_valid("$GNRMC,211041.00,A,4024.98796,N,00340.22512,W,0.027,,010218,,,D*7B"));
/// assert!(!is_valid("$GNRMC,211041.00,A,4024.98796,N,00340.22512,W,0.027,,010218,,,D*7C"));
/// ```
pub fn is_valid(sentence: &str) -> bool {
    validate(sentence).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_fold() {
        assert_eq!(checksum("").1, 0x00);
        assert_eq!(checksum("A").1, b'A');
        assert_eq!(checksum("AA").1, 0x00);
        assert_eq!(checksum("GPGLL,4916.45,N,12311.12,W,225444,A").1, 0x31);
    }

    #[test]
    fn test_missing_checksum() {
        assert_eq!(validate(""), Err(ChecksumError::Missing));
        assert_eq!(validate("$GPGLL,4916.45"), Err(ChecksumError::Missing));
        assert_eq!(validate("$GPGLL,4916.45*"), Err(ChecksumError::Missing));
    }

    #[test]
    fn test_dollar_is_optional() {
        assert_eq!(validate("GPGGA,data*6A"), Ok(0x6A));
        assert_eq!(validate("$GPGGA,data*6A"), Ok(0x6A));
        // Only a single leading '$' is stripped.
        assert!(validate("$$GPGGA,data*6A").is_err());
    }

    #[test]
    fn test_mismatch_reports_both_values() {
        assert_eq!(
            validate("$GPGGA,data*41"),
            Err(ChecksumError::Mismatch {
                expected: "6A".to_string(),
                found: "41".to_string(),
            })
        );
    }

    #[test]
    fn test_zero_padded_checksum() {
        assert_eq!(validate("$*00"), Ok(0x00));
        assert_eq!(validate("$GPGLL,4916.45,N,12311.12*0A"), Ok(0x0A));
        assert!(!is_valid("$GPGLL,4916.45,N,12311.12*A"));
    }

    #[test]
    fn test_only_second_part_is_compared() {
        assert!(is_valid("$GPGGA,data*6A*FF"));
        assert!(!is_valid("$GPGGA,data*6A\r\n"));
    }
}
