//! StatsD wire format (counter subset).
//!
//! A datagram is a newline-separated list of lines:
//!
//! ```text
//! line := name:value[|type][|@sample_rate][|#tag1:v1,tag2]
//! ```
//!
//! Only `name:value` is enforced. Everything after the first `|` is carried
//! as raw segments and never interpreted. All parsers are panic-free:
//! malformed input is reported as `ParseError`.

pub mod datagram;
pub mod line;
