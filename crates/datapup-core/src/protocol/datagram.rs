//! Datagram framing: payload bytes to candidate lines.

use crate::error::ParseError;

/// Line separator inside one datagram.
pub const LINE_SEP: char = '\n';

/// Split a text payload into candidate lines.
///
/// No line is dropped: a trailing newline yields a final empty line, which
/// later fails to parse and is reported like any other bad line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(LINE_SEP)
}

/// Split received bytes into candidate lines, before any UTF-8 check.
///
/// Same framing as `split_lines`; `\n` is never part of a multi-byte
/// sequence, so splitting first keeps a damaged line from touching its
/// neighbours.
pub fn split_payload(payload: &[u8]) -> impl Iterator<Item = &[u8]> {
    payload.split(|b| *b == LINE_SEP as u8)
}

/// Interpret one line of received bytes as text.
///
/// Invalid UTF-8 is rejected, not replaced: replacement would merge names
/// that differ only in their invalid bytes into one counter.
pub fn decode_line(raw: &[u8]) -> Result<&str, ParseError> {
    std::str::from_utf8(raw).map_err(|source| ParseError::InvalidEncoding {
        line: String::from_utf8_lossy(raw).into_owned(),
        source,
    })
}
