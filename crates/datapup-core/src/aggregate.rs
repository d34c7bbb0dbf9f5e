//! Running counter totals fed by datagrams.
//!
//! The aggregator is an owned value: the receive loop holds the only mutable
//! handle, tests build as many independent instances as they like.

use std::collections::{BTreeMap, HashMap};

use crate::error::{AggregateError, LineFailure, ParseError};
use crate::protocol::datagram::{decode_line, split_lines, split_payload};
use crate::protocol::line::parse_line;

/// Per-name running sums of counter deltas.
#[derive(Debug, Default)]
pub struct Aggregator {
    counters: HashMap<String, i64>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            counters: HashMap::with_capacity(10),
        }
    }

    /// Apply every line of one datagram.
    ///
    /// Good lines are applied even when others fail; failures are collected
    /// in line order and returned together. Nothing is rolled back.
    pub fn handle_datagram(&mut self, text: &str) -> Result<(), AggregateError> {
        let mut failures = Vec::new();
        for line in split_lines(text) {
            if let Err(error) = self.parse_and_apply(line) {
                failures.push(LineFailure {
                    line: line.to_string(),
                    error,
                });
            }
        }

        match AggregateError::from_failures(failures) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Apply every line of one received payload.
    ///
    /// Like `handle_datagram`, but framing happens on bytes: a line that is
    /// not valid UTF-8 fails with `ParseError::InvalidEncoding` and the rest
    /// of the payload still applies.
    pub fn handle_payload(&mut self, payload: &[u8]) -> Result<(), AggregateError> {
        let mut failures = Vec::new();
        for raw in split_payload(payload) {
            let applied = decode_line(raw).and_then(|line| self.parse_and_apply(line));
            if let Err(error) = applied {
                failures.push(LineFailure {
                    line: error.line().to_string(),
                    error,
                });
            }
        }

        match AggregateError::from_failures(failures) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Parse one line and add its delta to the running total for its name.
    ///
    /// A line that fails to parse leaves every counter untouched.
    pub fn parse_and_apply(&mut self, line: &str) -> Result<(), ParseError> {
        let metric = parse_line(line)?;

        let total = self.counters.entry(metric.name.to_string()).or_insert(0);
        *total = total.wrapping_add(metric.delta);

        tracing::info!(
            target: "datapup::counter",
            "{}\t (total: {})",
            metric.raw,
            *total
        );
        Ok(())
    }

    /// Current total for `name`, if it was ever seen.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.counters.get(name).copied()
    }

    /// Number of distinct metric names seen so far.
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Sorted copy of all totals.
    pub fn snapshot(&self) -> BTreeMap<String, i64> {
        self.counters
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect()
    }
}
