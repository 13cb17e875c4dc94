//! Simulated ERP adapter.

use crate::adapter::SourceAdapter;
use crate::builtins::{days_ago, object, simulate_latency};
use async_trait::async_trait;
use crosscheck_protocol::{AdapterError, DataType, Platform, Record};
use log::debug;
use serde_json::json;
use std::time::Duration;

/// Adapter for the enterprise resource planning platform.
#[derive(Debug, Clone)]
pub struct ErpAdapter {
    latency: Duration,
}

impl ErpAdapter {
    /// Create the adapter with a simulated fetch latency.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SourceAdapter for ErpAdapter {
    fn platform(&self) -> Platform {
        Platform::Erp
    }

    async fn fetch(&self) -> Result<Vec<Record>, AdapterError> {
        simulate_latency(self.latency).await;
        let records = vec![Record::new(
            Platform::Erp,
            DataType::Contract,
            "Contract with Vendor ABC: Payment terms 30 days, security requirements: basic \
             authentication only, data retention: 2 years",
            object(json!({
                "contract_id": "CON-2024-001",
                "vendor_name": "Vendor ABC",
                "contract_value": "$500,000",
                "start_date": "2024-01-01",
                "end_date": "2024-12-31",
                "department": "Procurement",
            })),
            days_ago(5),
            "procurement@company.com",
            "erp_contract_001",
            0.92,
        )?];
        debug!(
            "platform batch ready (platform={}, records={})",
            self.platform().slug(),
            records.len()
        );
        Ok(records)
    }
}
