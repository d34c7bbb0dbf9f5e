//! Transport layer (UDP).
//!
//! Binds the StatsD listening socket and feeds every received datagram to
//! the aggregator held in `AppState`.

pub mod udp;
