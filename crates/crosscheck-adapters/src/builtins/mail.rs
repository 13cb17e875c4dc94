//! Simulated email adapter.

use crate::adapter::SourceAdapter;
use crate::builtins::{hours_ago, object, simulate_latency};
use async_trait::async_trait;
use crosscheck_protocol::{AdapterError, DataType, Platform, Record};
use log::debug;
use serde_json::json;
use std::time::Duration;

/// Adapter for the email platform.
#[derive(Debug, Clone)]
pub struct MailAdapter {
    latency: Duration,
}

impl MailAdapter {
    /// Create the adapter with a simulated fetch latency.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SourceAdapter for MailAdapter {
    fn platform(&self) -> Platform {
        Platform::Mail
    }

    async fn fetch(&self) -> Result<Vec<Record>, AdapterError> {
        simulate_latency(self.latency).await;
        let records = vec![Record::new(
            Platform::Mail,
            DataType::Email,
            "Subject: Vendor ABC Security Review - URGENT\n\nVendor ABC's current security \
             setup doesn't meet our MFA requirements. Need immediate remediation.",
            object(json!({
                "subject": "Vendor ABC Security Review - URGENT",
                "sender": "security.team@company.com",
                "recipients": ["procurement@company.com", "vendor.abc@company.com"],
                "priority": "High",
                "has_attachments": true,
            })),
            hours_ago(1),
            "security.team@company.com",
            "mail_email_001",
            0.93,
        )?];
        debug!(
            "platform batch ready (platform={}, records={})",
            self.platform().slug(),
            records.len()
        );
        Ok(records)
    }
}
