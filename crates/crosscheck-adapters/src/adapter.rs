//! Source adapter trait definition.

use async_trait::async_trait;
use crosscheck_protocol::{AdapterError, Platform, Record};
use std::fmt::Debug;

/// Interface for platform source adapters.
///
/// An adapter stands in for one platform integration: `fetch` returns the
/// batch of records currently visible from that platform, preserving the
/// platform's own ordering. Fetches must not block the caller; slow sources
/// are bounded by the aggregator's per-adapter deadline.
#[async_trait]
pub trait SourceAdapter: Send + Sync + Debug {
    /// Platform this adapter serves.
    fn platform(&self) -> Platform;

    /// Fetch the current batch of records from the platform.
    async fn fetch(&self) -> Result<Vec<Record>, AdapterError>;
}
