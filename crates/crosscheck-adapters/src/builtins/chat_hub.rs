//! Simulated team chat adapter.

use crate::adapter::SourceAdapter;
use crate::builtins::{hours_ago, object, simulate_latency};
use async_trait::async_trait;
use crosscheck_protocol::{AdapterError, DataType, Platform, Record};
use log::debug;
use serde_json::json;
use std::time::Duration;

/// Adapter for the team chat platform.
#[derive(Debug, Clone)]
pub struct ChatHubAdapter {
    latency: Duration,
}

impl ChatHubAdapter {
    /// Create the adapter with a simulated fetch latency.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SourceAdapter for ChatHubAdapter {
    fn platform(&self) -> Platform {
        Platform::ChatHub
    }

    async fn fetch(&self) -> Result<Vec<Record>, AdapterError> {
        simulate_latency(self.latency).await;
        let records = vec![Record::new(
            Platform::ChatHub,
            DataType::UserActivity,
            "Team discussion: Client XYZ requires GDPR compliance. Need to update our data \
             processing agreements.",
            object(json!({
                "channel": "Sales Team",
                "message_type": "chat",
                "participants": ["sales.rep@company.com", "legal.team@company.com"],
                "thread_id": "thread_001",
            })),
            hours_ago(2),
            "sales.rep@company.com",
            "chat_msg_001",
            0.85,
        )?];
        debug!(
            "platform batch ready (platform={}, records={})",
            self.platform().slug(),
            records.len()
        );
        Ok(records)
    }
}
