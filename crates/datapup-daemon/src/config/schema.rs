use datapup_core::error::{DatapupError, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DaemonConfig {
    pub version: u32,

    #[serde(default)]
    pub daemon: DaemonSection,

    /// Ops HTTP endpoints; disabled when absent.
    #[serde(default)]
    pub ops: Option<OpsSection>,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            version: 1,
            daemon: DaemonSection::default(),
            ops: None,
        }
    }
}

impl DaemonConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(DatapupError::UnsupportedVersion);
        }

        self.daemon.validate()?;
        if let Some(ops) = &self.ops {
            ops.validate()?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DaemonSection {
    /// `host:port` or `:port` (all interfaces).
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Receive buffer size. Longer datagrams are truncated by the read.
    #[serde(default = "default_max_datagram_bytes")]
    pub max_datagram_bytes: usize,
}

impl Default for DaemonSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_datagram_bytes: default_max_datagram_bytes(),
        }
    }
}

impl DaemonSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.trim().is_empty() {
            return Err(DatapupError::Config("daemon.listen must not be empty".into()));
        }
        if !(1..=65535).contains(&self.max_datagram_bytes) {
            return Err(DatapupError::Config(
                "daemon.max_datagram_bytes must be between 1 and 65535".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    ":8125".into()
}
fn default_max_datagram_bytes() -> usize {
    1024
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpsSection {
    pub listen: String,

    /// How long the ops server keeps answering (`/readyz` 503) after the
    /// receive loop stops.
    #[serde(default = "default_drain_grace_ms")]
    pub drain_grace_ms: u64,
}

impl OpsSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.trim().is_empty() {
            return Err(DatapupError::Config("ops.listen must not be empty".into()));
        }
        if self.drain_grace_ms > 60000 {
            return Err(DatapupError::Config(
                "ops.drain_grace_ms must be at most 60000".into(),
            ));
        }
        Ok(())
    }
}

fn default_drain_grace_ms() -> u64 {
    2000
}
