//! datapup core: StatsD line grammar, error types, and the counter aggregator.
//!
//! This crate owns the decode-and-fold protocol shared by the daemon and its
//! tests. It carries no transport or runtime dependencies, so an aggregator
//! can be driven from a UDP loop, a test, or anything else that has text.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Datagrams come from the network, so every malformed line must surface as a
//! `ParseError` instead of taking the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod aggregate;
pub mod error;
pub mod protocol;

pub use aggregate::Aggregator;
/// Shared result type.
pub use error::{AggregateError, DatapupError, ParseError, Result};
