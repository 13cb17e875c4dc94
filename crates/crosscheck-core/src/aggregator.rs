//! Concurrent collection of records from every registered adapter.

use crosscheck_adapters::AdapterRegistry;
use crosscheck_protocol::{AdapterError, Record, RunId, SourceStatus};
use futures_util::future::join_all;
use log::{debug, info, warn};
use std::time::Duration;
use tokio::time::timeout;
use uuid::Uuid;

/// Unified result of one collection run.
#[derive(Debug, Clone)]
pub struct Collection {
    /// Identifier for this run, used for log correlation.
    pub run_id: RunId,
    /// Bag union of every adapter's records, in adapter registration order.
    /// Within a platform, source order is preserved.
    pub records: Vec<Record>,
    /// Per-adapter fetch outcome, in adapter registration order.
    pub sources: Vec<SourceStatus>,
}

/// Fans out to all registered adapters and merges their batches.
#[derive(Clone)]
pub struct Aggregator {
    registry: AdapterRegistry,
    fetch_timeout: Duration,
}

impl Aggregator {
    /// Create an aggregator over a registry with a per-adapter deadline.
    pub fn new(registry: AdapterRegistry, fetch_timeout: Duration) -> Self {
        Self {
            registry,
            fetch_timeout,
        }
    }

    /// The adapter registry backing this aggregator.
    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    /// Fetch from every adapter concurrently and merge the results.
    ///
    /// This is a join-all barrier: every fetch is awaited before the merged
    /// collection is returned. A fetch that errors or exceeds the deadline
    /// degrades to zero records with an error flag on its source status; it
    /// never aborts the aggregation.
    pub async fn collect_all(&self) -> Collection {
        let run_id = Uuid::new_v4();
        let adapters = self.registry.all();
        debug!(
            "starting collection (run_id={}, adapters={})",
            run_id,
            adapters.len()
        );

        let fetches = adapters
            .iter()
            .map(|adapter| timeout(self.fetch_timeout, adapter.fetch()));
        let results = join_all(fetches).await;

        let mut records = Vec::new();
        let mut sources = Vec::with_capacity(adapters.len());
        for (adapter, result) in adapters.iter().zip(results) {
            let platform = adapter.platform();
            match result {
                Ok(Ok(batch)) => {
                    debug!(
                        "platform fetch complete (run_id={}, platform={}, records={})",
                        run_id,
                        platform.slug(),
                        batch.len()
                    );
                    sources.push(SourceStatus {
                        platform,
                        records: batch.len(),
                        error: None,
                    });
                    records.extend(batch);
                }
                Ok(Err(err)) => {
                    warn!(
                        "platform fetch failed (run_id={}, platform={}, error={})",
                        run_id,
                        platform.slug(),
                        err
                    );
                    sources.push(SourceStatus {
                        platform,
                        records: 0,
                        error: Some(err.to_string()),
                    });
                }
                Err(_) => {
                    let err = AdapterError::Timeout(self.fetch_timeout.as_millis() as u64);
                    warn!(
                        "platform fetch timed out (run_id={}, platform={})",
                        run_id,
                        platform.slug()
                    );
                    sources.push(SourceStatus {
                        platform,
                        records: 0,
                        error: Some(err.to_string()),
                    });
                }
            }
        }

        info!(
            "collection complete (run_id={}, platforms={}, records={})",
            run_id,
            sources.len(),
            records.len()
        );
        Collection {
            run_id,
            records,
            sources,
        }
    }
}
