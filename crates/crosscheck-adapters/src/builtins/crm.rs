//! Simulated CRM adapter.

use crate::adapter::SourceAdapter;
use crate::builtins::{days_ago, object, simulate_latency};
use async_trait::async_trait;
use crosscheck_protocol::{AdapterError, DataType, Platform, Record};
use log::debug;
use serde_json::json;
use std::time::Duration;

/// Adapter for the customer relationship management platform.
#[derive(Debug, Clone)]
pub struct CrmAdapter {
    latency: Duration,
}

impl CrmAdapter {
    /// Create the adapter with a simulated fetch latency.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SourceAdapter for CrmAdapter {
    fn platform(&self) -> Platform {
        Platform::Crm
    }

    async fn fetch(&self) -> Result<Vec<Record>, AdapterError> {
        simulate_latency(self.latency).await;
        let records = vec![Record::new(
            Platform::Crm,
            DataType::Opportunity,
            "Enterprise deal with Client XYZ: Requires SOC2 compliance, data residency in EU, \
             24/7 support",
            object(json!({
                "opportunity_id": "OPP-2024-003",
                "client_name": "Client XYZ",
                "deal_value": "$2,500,000",
                "stage": "Proposal",
                "probability": "75%",
                "expected_close": "2024-03-15",
            })),
            days_ago(1),
            "sales.rep@company.com",
            "crm_opp_001",
            0.88,
        )?];
        debug!(
            "platform batch ready (platform={}, records={})",
            self.platform().slug(),
            records.len()
        );
        Ok(records)
    }
}
