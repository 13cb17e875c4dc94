//! Source adapters: one per platform, each producing the current batch of
//! records visible from that platform.

mod adapter;
mod builtins;
mod registry;

pub use adapter::SourceAdapter;
pub use builtins::{
    ChatHubAdapter, CrmAdapter, DocumentStoreAdapter, ErpAdapter, FileShareAdapter, MailAdapter,
    TicketTrackerAdapter, builtin_adapter_registry,
};
pub use registry::AdapterRegistry;
