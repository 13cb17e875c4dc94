//! Simulated ticket tracker adapter.

use crate::adapter::SourceAdapter;
use crate::builtins::{hours_ago, object, simulate_latency};
use async_trait::async_trait;
use crosscheck_protocol::{AdapterError, DataType, Platform, Record};
use log::debug;
use serde_json::json;
use std::time::Duration;

/// Adapter for the issue and project tracking platform.
#[derive(Debug, Clone)]
pub struct TicketTrackerAdapter {
    latency: Duration,
}

impl TicketTrackerAdapter {
    /// Create the adapter with a simulated fetch latency.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SourceAdapter for TicketTrackerAdapter {
    fn platform(&self) -> Platform {
        Platform::TicketTracker
    }

    async fn fetch(&self) -> Result<Vec<Record>, AdapterError> {
        simulate_latency(self.latency).await;
        let records = vec![Record::new(
            Platform::TicketTracker,
            DataType::Task,
            "Implement SOC2 compliance controls for Client XYZ deal. Required: MFA, audit \
             logging, data encryption",
            object(json!({
                "issue_key": "PROJ-123",
                "issue_type": "Task",
                "priority": "High",
                "assignee": "dev.team@company.com",
                "project": "Compliance Implementation",
                "due_date": "2024-02-15",
            })),
            hours_ago(6),
            "project.manager@company.com",
            "ticket_task_001",
            0.90,
        )?];
        debug!(
            "platform batch ready (platform={}, records={})",
            self.platform().slug(),
            records.len()
        );
        Ok(records)
    }
}
