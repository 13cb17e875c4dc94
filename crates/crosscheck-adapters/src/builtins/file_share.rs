//! Simulated file storage adapter.

use crate::adapter::SourceAdapter;
use crate::builtins::{days_ago, object, simulate_latency};
use async_trait::async_trait;
use crosscheck_protocol::{AdapterError, DataType, Platform, Record};
use log::debug;
use serde_json::json;
use std::time::Duration;

/// Adapter for the file storage and sharing platform.
#[derive(Debug, Clone)]
pub struct FileShareAdapter {
    latency: Duration,
}

impl FileShareAdapter {
    /// Create the adapter with a simulated fetch latency.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SourceAdapter for FileShareAdapter {
    fn platform(&self) -> Platform {
        Platform::FileShare
    }

    async fn fetch(&self) -> Result<Vec<Record>, AdapterError> {
        simulate_latency(self.latency).await;
        let records = vec![Record::new(
            Platform::FileShare,
            DataType::Policy,
            "Data Retention Policy: Customer data must be retained for 7 years. Vendor data: \
             3 years. All data must be encrypted at rest.",
            object(json!({
                "title": "Data Retention Policy v1.2",
                "author": "Legal Team",
                "department": "Legal",
                "last_modified": "2024-01-10",
                "version": "1.2",
            })),
            days_ago(3),
            "legal.team@company.com",
            "file_share_policy_001",
            0.94,
        )?];
        debug!(
            "platform batch ready (platform={}, records={})",
            self.platform().slug(),
            records.len()
        );
        Ok(records)
    }
}
