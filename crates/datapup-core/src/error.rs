//! Error types shared across datapup crates.

use std::fmt;
use std::num::ParseIntError;
use std::str::Utf8Error;

use thiserror::Error;

/// Stable error codes for daemon-level failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Socket could not be bound. Fatal at startup.
    Bind,
    /// A single datagram read failed.
    Receive,
    /// Invalid configuration.
    Config,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorKind {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Bind => "BIND",
            ErrorKind::Receive => "RECEIVE",
            ErrorKind::Config => "CONFIG",
            ErrorKind::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DatapupError>;

/// Unified error type used by core and daemon.
#[derive(Debug, Error)]
pub enum DatapupError {
    #[error("bind failed: {0}")]
    Bind(String),
    #[error("receive failed: {0}")]
    Receive(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl DatapupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DatapupError::Bind(_) => ErrorKind::Bind,
            DatapupError::Receive(_) => ErrorKind::Receive,
            DatapupError::Config(_) => ErrorKind::Config,
            DatapupError::UnsupportedVersion => ErrorKind::UnsupportedVersion,
            DatapupError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Only a bind failure stops the daemon once it is configured.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DatapupError::Bind(_))
    }
}

/// Stable codes for per-line parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    Empty,
    MissingValue,
    InvalidValue,
    InvalidEncoding,
}

impl ParseErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseErrorKind::Empty => "EMPTY",
            ParseErrorKind::MissingValue => "MISSING_VALUE",
            ParseErrorKind::InvalidValue => "INVALID_VALUE",
            ParseErrorKind::InvalidEncoding => "INVALID_ENCODING",
        }
    }
}

/// Failure to turn one metric line into a `(name, delta)` pair.
///
/// Each variant keeps the offending line so reports can quote it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid metric: \"{line}\"")]
    Empty { line: String },
    #[error("invalid name/value pair: \"{line}\"")]
    MissingValue { line: String },
    #[error("can not convert value to int: \"{line}\", {source}")]
    InvalidValue {
        line: String,
        #[source]
        source: ParseIntError,
    },
    /// The line is not valid UTF-8. `line` is a lossy rendering for reports.
    #[error("invalid utf-8 in metric: \"{line}\", {source}")]
    InvalidEncoding {
        line: String,
        #[source]
        source: Utf8Error,
    },
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::Empty { .. } => ParseErrorKind::Empty,
            ParseError::MissingValue { .. } => ParseErrorKind::MissingValue,
            ParseError::InvalidValue { .. } => ParseErrorKind::InvalidValue,
            ParseError::InvalidEncoding { .. } => ParseErrorKind::InvalidEncoding,
        }
    }

    /// The raw line that failed to parse.
    pub fn line(&self) -> &str {
        match self {
            ParseError::Empty { line }
            | ParseError::MissingValue { line }
            | ParseError::InvalidValue { line, .. }
            | ParseError::InvalidEncoding { line, .. } => line,
        }
    }
}

/// One failed line inside a datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    pub line: String,
    pub error: ParseError,
}

impl fmt::Display for LineFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error processing metric: \"{}\", {}", self.line, self.error)
    }
}

/// Batch-level error for a single datagram.
///
/// Displays every failed line, newline-joined, in the order the lines appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateError {
    failures: Vec<LineFailure>,
}

impl AggregateError {
    /// Returns `None` when nothing failed.
    pub fn from_failures(failures: Vec<LineFailure>) -> Option<Self> {
        if failures.is_empty() {
            None
        } else {
            Some(Self { failures })
        }
    }

    pub fn failures(&self) -> &[LineFailure] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateError {}
