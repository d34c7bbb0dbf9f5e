//! Top-level facade crate for datapup.
//!
//! Re-exports the protocol core and the daemon library so users can depend on a single crate.

pub mod core {
    pub use datapup_core::*;
}

pub mod daemon {
    pub use datapup_daemon::*;
}
