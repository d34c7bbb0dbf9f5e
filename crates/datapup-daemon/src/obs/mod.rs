//! Lightweight in-process self-metrics.
//!
//! Counts what the daemon itself does (datagrams, lines, errors) as atomics
//! and renders them in Prometheus text format for the `/metrics` handler.

pub mod metrics;
