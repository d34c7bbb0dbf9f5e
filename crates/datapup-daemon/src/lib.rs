//! datapup daemon library entry.
//!
//! Wires the UDP transport, the shared aggregator state, self-metrics and the
//! optional ops HTTP server. It is consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod shutdown;
pub mod transport;
