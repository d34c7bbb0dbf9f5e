//! UDP listener.
//!
//! Responsibilities:
//! - Resolve the configured address (`host:port` or `:port`) and bind once
//! - Receive into one reusable buffer; longer datagrams are truncated by the read
//! - Hand every payload to `AppState::ingest`, strictly one at a time
//! - Receive and parse failures are logged; only bind failure is fatal

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::UdpSocket;

use datapup_core::error::{DatapupError, Result};

use crate::app_state::AppState;

/// `:port` means every interface.
fn normalize_addr(addr: &str) -> String {
    match addr.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{port}"),
        None => addr.to_string(),
    }
}

/// Resolve a listen address to the first socket address it names.
pub async fn resolve(addr: &str) -> Result<SocketAddr> {
    let target = normalize_addr(addr);
    let mut addrs = tokio::net::lookup_host(target.as_str())
        .await
        .map_err(|e| DatapupError::Bind(format!("resolve {addr}: {e}")))?;
    addrs
        .next() // just use the first address we resolve to
        .ok_or_else(|| DatapupError::Bind(format!("resolve {addr}: no addresses")))
}

/// Bind the listening socket. Any failure is `DatapupError::Bind`.
pub async fn bind(addr: &str) -> Result<UdpSocket> {
    let local = resolve(addr).await?;
    UdpSocket::bind(local)
        .await
        .map_err(|e| DatapupError::Bind(format!("bind {local}: {e}")))
}

/// Receive loop. Returns when `shutdown` resolves; the socket is dropped on return.
pub async fn run<F>(socket: UdpSocket, state: AppState, shutdown: F)
where
    F: Future<Output = ()>,
{
    let mut buf = vec![0u8; state.cfg().daemon.max_datagram_bytes];
    let metrics = state.metrics();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("receive loop stopping");
                break;
            }

            received = socket.recv_from(&mut buf) => {
                match received {
                    Ok((n, peer)) => {
                        if let Err(e) = state.ingest(&buf[..n]) {
                            tracing::warn!(%peer, failed_lines = e.len(), "{e}");
                        }
                    }
                    Err(e) => {
                        let err = DatapupError::Receive(e.to_string());
                        metrics.receive_errors.inc(&[]);
                        tracing::warn!(error = %err, "datagram dropped");
                    }
                }
            }
        }
    }
}
