//! Single metric line parsing (panic-free).
//!
//! Parsing rules:
//! - Split on `|` first; only the first segment is interpreted.
//! - The first segment is split on `:`; the name is taken verbatim (it may be
//!   empty) and the second part must be a base-10 `i64`.
//! - Extra `:` parts after the value are ignored (`a:1:2` is `a` += 1).

use crate::error::ParseError;

/// Separator between the `name:value` part and trailing segments.
pub const SEGMENT_SEP: char = '|';
/// Separator between name and value.
pub const VALUE_SEP: char = ':';

/// Parsed metric line. Borrows from the datagram text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricLine<'a> {
    /// The line as received, used for reports.
    pub raw: &'a str,
    /// Metric name (text before the first `:`).
    pub name: &'a str,
    /// Signed delta to add to the running total.
    pub delta: i64,
    /// Type, sample rate and tag segments. Accepted but not interpreted.
    pub trailing: Vec<&'a str>,
}

/// Parse one line of a datagram.
pub fn parse_line(line: &str) -> Result<MetricLine<'_>, ParseError> {
    let mut segments = line.split(SEGMENT_SEP);

    // `split` always yields at least one segment, so this only guards a
    // degenerate split result.
    let Some(name_value) = segments.next() else {
        return Err(ParseError::Empty { line: line.to_string() });
    };

    let mut parts = name_value.split(VALUE_SEP);
    let (Some(name), Some(value)) = (parts.next(), parts.next()) else {
        return Err(ParseError::MissingValue { line: line.to_string() });
    };

    let delta = value
        .parse::<i64>()
        .map_err(|source| ParseError::InvalidValue {
            line: line.to_string(),
            source,
        })?;

    Ok(MetricLine {
        raw: line,
        name,
        delta,
        trailing: segments.collect(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn trailing_segments_are_kept_raw() {
        let m = parse_line("a:5|c|@0.1|#env:prod").unwrap();
        assert_eq!(m.name, "a");
        assert_eq!(m.delta, 5);
        assert_eq!(m.trailing, vec!["c", "@0.1", "#env:prod"]);
    }

    #[test]
    fn extra_colon_parts_are_ignored() {
        let m = parse_line("a:1:2").unwrap();
        assert_eq!((m.name, m.delta), ("a", 1));
    }

    #[test]
    fn empty_name_is_accepted() {
        let m = parse_line(":-3").unwrap();
        assert_eq!((m.name, m.delta), ("", -3));
    }

    #[test]
    fn signed_values() {
        assert_eq!(parse_line("a:+7").unwrap().delta, 7);
        assert_eq!(parse_line("a:-7").unwrap().delta, -7);
    }

    #[test]
    fn empty_line_is_missing_value() {
        let err = parse_line("").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::MissingValue);
        assert_eq!(err.to_string(), "invalid name/value pair: \"\"");
    }

    #[test]
    fn invalid_value_quotes_line_and_cause() {
        let err = parse_line("a:x|c").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::InvalidValue);
        assert_eq!(
            err.to_string(),
            "can not convert value to int: \"a:x|c\", invalid digit found in string"
        );
    }

    #[test]
    fn value_with_spaces_is_rejected() {
        assert!(parse_line("a: 1").is_err());
        assert!(parse_line("a:").is_err());
    }
}
