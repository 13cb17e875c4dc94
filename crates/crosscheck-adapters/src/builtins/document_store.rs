//! Simulated document management adapter.

use crate::adapter::SourceAdapter;
use crate::builtins::{days_ago, object, simulate_latency};
use async_trait::async_trait;
use crosscheck_protocol::{AdapterError, DataType, Platform, Record};
use log::debug;
use serde_json::json;
use std::time::Duration;

/// Adapter for the document management platform.
#[derive(Debug, Clone)]
pub struct DocumentStoreAdapter {
    latency: Duration,
}

impl DocumentStoreAdapter {
    /// Create the adapter with a simulated fetch latency.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SourceAdapter for DocumentStoreAdapter {
    fn platform(&self) -> Platform {
        Platform::DocumentStore
    }

    async fn fetch(&self) -> Result<Vec<Record>, AdapterError> {
        simulate_latency(self.latency).await;
        let records = vec![Record::new(
            Platform::DocumentStore,
            DataType::Document,
            "Vendor Security Requirements: All vendors must implement MFA and data encryption. \
             Vendor access must be reviewed quarterly.",
            object(json!({
                "title": "Vendor Security Policy v2.1",
                "author": "Security Team",
                "department": "IT Security",
                "last_modified": "2024-01-15",
                "tags": ["security", "vendor", "compliance"],
            })),
            days_ago(2),
            "security.team@company.com",
            "document_store_doc_001",
            0.95,
        )?];
        debug!(
            "platform batch ready (platform={}, records={})",
            self.platform().slug(),
            records.len()
        );
        Ok(records)
    }
}
