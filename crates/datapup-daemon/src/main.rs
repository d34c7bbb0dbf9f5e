//! datapup: StatsD counter ingestion daemon.
//!
//! - UDP listener on `daemon.listen` (default `:8125`)
//! - Per-name running totals of counter deltas
//! - Optional ops HTTP server on `ops.listen`
//! - Ctrl-C stops the receive loop; the ops server then drains for `ops.drain_grace_ms`

use std::process::ExitCode;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing_subscriber::{fmt, EnvFilter};

use datapup_core::error::{DatapupError, Result};
use datapup_daemon::config::{self, DaemonConfig};
use datapup_daemon::{app_state::AppState, ops, shutdown, transport};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    match serve().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = e.kind().as_str(), "terminating due to error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<DaemonConfig> {
    match std::env::var("DATAPUP_CONFIG") {
        Ok(path) => config::load_from_file(&path),
        Err(_) => Ok(DaemonConfig::default()),
    }
}

async fn serve() -> Result<()> {
    let cfg = load_config()?;
    let listen = cfg.daemon.listen.clone();
    let ops_listen = cfg.ops.as_ref().map(|o| o.listen.clone());
    let drain_grace = Duration::from_millis(cfg.ops.as_ref().map_or(0, |o| o.drain_grace_ms));

    let state = AppState::new(cfg);

    tracing::info!(%listen, "starting datapup service");
    let socket = transport::udp::bind(&listen).await?;

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut ops_task = None;
    if let Some(ops_listen) = ops_listen {
        let addr = transport::udp::resolve(&ops_listen).await?;
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| DatapupError::Bind(format!("ops bind {addr}: {e}")))?;

        tracing::info!(%addr, "ops server starting");
        ops_task = Some(tokio::spawn(ops::serve(
            listener,
            state.clone(),
            async move {
                let _ = stop_rx.await;
            },
            drain_grace,
        )));
    }

    let drain = state.clone();
    transport::udp::run(socket, state, async move {
        shutdown::ctrl_c().await;
        drain.set_draining();
    })
    .await;

    // ops server keeps answering for the grace period so `/readyz` can report draining
    let _ = stop_tx.send(());
    if let Some(task) = ops_task {
        tracing::info!(grace_ms = drain_grace.as_millis() as u64, "draining");
        if let Err(e) = task.await {
            tracing::error!(error = %e, "ops task failed");
        }
    }

    Ok(())
}
