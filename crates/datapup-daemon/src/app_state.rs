//! Shared application state for the datapup daemon.
//!
//! The receive loop is the only writer of the aggregator; ops handlers only
//! take snapshots. Both go through the same mutex.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use datapup_core::protocol::datagram::split_payload;
use datapup_core::{AggregateError, Aggregator};

use crate::config::DaemonConfig;
use crate::obs::metrics::DaemonMetrics;

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<DaemonConfig>,
    aggregator: Arc<Mutex<Aggregator>>,
    metrics: Arc<DaemonMetrics>,
}

impl AppState {
    pub fn new(cfg: DaemonConfig) -> Self {
        Self {
            cfg: Arc::new(cfg),
            aggregator: Arc::new(Mutex::new(Aggregator::new())),
            metrics: Arc::new(DaemonMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &DaemonConfig {
        &self.cfg
    }

    pub fn metrics(&self) -> Arc<DaemonMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    // A panic while holding the lock can only happen between whole-line
    // updates, so the table is still consistent.
    fn lock(&self) -> MutexGuard<'_, Aggregator> {
        self.aggregator
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Decode one received payload and fold it into the counters.
    pub fn ingest(&self, payload: &[u8]) -> Result<(), AggregateError> {
        let started = Instant::now();

        self.metrics
            .datagram_bytes
            .add(&[], u64::try_from(payload.len()).unwrap_or(u64::MAX));

        let (res, names) = {
            let mut agg = self.lock();
            let res = agg.handle_payload(payload);
            (res, agg.len())
        };

        let lines = split_payload(payload).count();
        let failed = res.as_ref().err().map(AggregateError::len).unwrap_or(0);
        self.metrics
            .lines_applied
            .add(&[], u64::try_from(lines - failed).unwrap_or(0));
        if let Err(e) = &res {
            for f in e.failures() {
                self.metrics
                    .parse_errors
                    .inc(&[("kind", f.error.kind().as_str())]);
            }
        }
        self.metrics
            .counter_names
            .set(&[], i64::try_from(names).unwrap_or(i64::MAX));
        self.metrics.handle_duration.observe(&[], started.elapsed());
        self.metrics.datagrams_received.inc(&[]);

        res
    }

    /// Current total for one metric name.
    pub fn counter(&self, name: &str) -> Option<i64> {
        self.lock().get(name)
    }

    /// Sorted copy of every total.
    pub fn counters(&self) -> BTreeMap<String, i64> {
        self.lock().snapshot()
    }
}
