//! Built-in simulated adapters, one per platform.
//!
//! Each adapter returns a fixed batch of realistic records, standing in for
//! a real platform integration. Batches are produced fresh on every fetch;
//! the only simulated cost is a configurable latency.

mod chat_hub;
mod crm;
mod document_store;
mod erp;
mod file_share;
mod mail;
mod ticket_tracker;

pub use chat_hub::ChatHubAdapter;
pub use crm::CrmAdapter;
pub use document_store::DocumentStoreAdapter;
pub use erp::ErpAdapter;
pub use file_share::FileShareAdapter;
pub use mail::MailAdapter;
pub use ticket_tracker::TicketTrackerAdapter;

use crate::registry::AdapterRegistry;
use chrono::{DateTime, TimeDelta, Utc};
use crosscheck_protocol::Metadata;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Build a registry with every built-in adapter in canonical platform order.
pub fn builtin_adapter_registry(latency: Duration) -> AdapterRegistry {
    let registry = AdapterRegistry::new();
    registry.register(Arc::new(DocumentStoreAdapter::new(latency)));
    registry.register(Arc::new(ErpAdapter::new(latency)));
    registry.register(Arc::new(CrmAdapter::new(latency)));
    registry.register(Arc::new(TicketTrackerAdapter::new(latency)));
    registry.register(Arc::new(ChatHubAdapter::new(latency)));
    registry.register(Arc::new(MailAdapter::new(latency)));
    registry.register(Arc::new(FileShareAdapter::new(latency)));
    registry
}

/// Simulate the network latency of a real platform call.
pub(crate) async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

/// Coerce a JSON object literal into record metadata.
pub(crate) fn object(value: Value) -> Metadata {
    match value {
        Value::Object(map) => map,
        _ => Metadata::new(),
    }
}

/// Timestamp the given number of days in the past.
pub(crate) fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - TimeDelta::days(days)
}

/// Timestamp the given number of hours in the past.
pub(crate) fn hours_ago(hours: i64) -> DateTime<Utc> {
    Utc::now() - TimeDelta::hours(hours)
}
