//! # Parsing Utilities
//!
//! This module provides the tokenizer that breaks a sentence into positional fields,
//! and a combinator ensuring complete consumption of a field by a nom parser.

use nom::{
    Err, Input, Parser,
    combinator::{rest_len, verify},
    error::{ErrorKind, ParseError},
    sequence::terminated,
};

/// Splits `text` at every occurrence of `separator`.
///
/// The result always holds at least one element: the whole input when the separator
/// is absent. A trailing separator produces a trailing empty segment.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gps::split;
///
/// assert_eq!(split("a,b,,c", ','), vec!["a", "b", "", "c"]);
/// assert_eq!(split("a,", ','), vec!["a", ""]);
/// assert_eq!(split("abc", '*'), vec!["abc"]);
/// assert_eq!(split("", ','), vec![""]);
/// ```
pub fn split(text: &str, separator: char) -> Vec<&str> {
    text.split(separator).collect()
}

/// Splits a sentence into its comma-delimited tokens.
///
/// Everything from the first `*` onwards (the checksum suffix) is dropped, the remaining
/// payload is split on `,`. The first token is the sentence identifier, including the
/// leading `$` when present.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gps::tokenize;
///
/// let tokens = tokenize("$GPZDA,201530.00,04,07,2002,00,00*60");
/// assert_eq!(tokens, vec!["$GPZDA", "201530.00", "04", "07", "2002", "00", "00"]);
/// ```
pub fn tokenize(sentence: &str) -> Vec<&str> {
    let payload = split(sentence, '*').into_iter().next().unwrap_or(sentence);
    split(payload, ',')
}

/// Ensures that the parser consumes all input.
///
/// The wrapped parser runs first; if anything remains afterwards, an error of kind `e`
/// is returned instead of the parsed value.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gps::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// // Parse all 3 bytes
/// let mut parser = consumed(take(3u8), ErrorKind::Count);
/// let result: IResult<_, _> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// // This would fail because not all input is consumed
/// let result: IResult<_, _> = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    terminated(
        f,
        verify(rest_len, |len: &usize| *len == 0).or(move |i| Err(Err::Error(E::from_error_kind(i, e)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_empty_segments() {
        assert_eq!(split(",,", ','), vec!["", "", ""]);
        assert_eq!(split("$GPGGA,", ','), vec!["$GPGGA", ""]);
    }

    #[test]
    fn test_tokenize_drops_checksum() {
        let tokens = tokenize("$GPGLL,4916.45,N,12311.12,W,225444,A*31");
        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens[0], "$GPGLL");
        assert_eq!(tokens[6], "A");
    }

    #[test]
    fn test_tokenize_without_checksum() {
        assert_eq!(tokenize("GPXXX,1"), vec!["GPXXX", "1"]);
        assert_eq!(tokenize(""), vec![""]);
        assert_eq!(tokenize("*7B"), vec![""]);
    }

    #[test]
    fn test_token_count_matches_fields() {
        for fields in 1..20 {
            let payload = (0..fields)
                .map(|n| if n == 0 { "$GPXXX".to_string() } else { n.to_string() })
                .collect::<Vec<_>>()
                .join(",");
            let sentence = format!("{payload}*00");

            let tokens = tokenize(&sentence);
            assert_eq!(tokens.len(), fields);
            assert_eq!(tokens[0], "$GPXXX");
        }
    }
}
