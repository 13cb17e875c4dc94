//! Registry for source adapters.

use crate::adapter::SourceAdapter;
use crosscheck_protocol::Platform;
use log::debug;
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory registry of source adapters.
///
/// Registration order is preserved: aggregation merges platform batches in
/// the order adapters were registered, so callers get a stable unified set.
#[derive(Default, Clone)]
pub struct AdapterRegistry {
    /// Registered adapters in registration order.
    adapters: Arc<RwLock<Vec<Arc<dyn SourceAdapter>>>>,
}

impl AdapterRegistry {
    /// Create an empty adapter registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter, replacing any existing adapter for the same
    /// platform in place.
    pub fn register(&self, adapter: Arc<dyn SourceAdapter>) {
        let platform = adapter.platform();
        debug!("registering adapter (platform={})", platform.slug());
        let mut adapters = self.adapters.write();
        match adapters.iter().position(|entry| entry.platform() == platform) {
            Some(index) => adapters[index] = adapter,
            None => adapters.push(adapter),
        }
    }

    /// Fetch the adapter for a platform.
    pub fn get(&self, platform: Platform) -> Option<Arc<dyn SourceAdapter>> {
        self.adapters
            .read()
            .iter()
            .find(|entry| entry.platform() == platform)
            .cloned()
    }

    /// List registered platforms in registration order.
    pub fn platforms(&self) -> Vec<Platform> {
        self.adapters
            .read()
            .iter()
            .map(|entry| entry.platform())
            .collect()
    }

    /// Return all registered adapters in registration order.
    pub fn all(&self) -> Vec<Arc<dyn SourceAdapter>> {
        self.adapters.read().clone()
    }

    /// Number of registered adapters.
    pub fn len(&self) -> usize {
        self.adapters.read().len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.adapters.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::AdapterRegistry;
    use crate::adapter::SourceAdapter;
    use async_trait::async_trait;
    use crosscheck_protocol::{AdapterError, Platform, Record};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[derive(Debug)]
    struct EmptyAdapter {
        platform: Platform,
    }

    #[async_trait]
    impl SourceAdapter for EmptyAdapter {
        fn platform(&self) -> Platform {
            self.platform
        }

        async fn fetch(&self) -> Result<Vec<Record>, AdapterError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn registry_preserves_registration_order() {
        let registry = AdapterRegistry::new();
        registry.register(Arc::new(EmptyAdapter {
            platform: Platform::Mail,
        }));
        registry.register(Arc::new(EmptyAdapter {
            platform: Platform::Erp,
        }));
        registry.register(Arc::new(EmptyAdapter {
            platform: Platform::Crm,
        }));

        assert_eq!(
            registry.platforms(),
            vec![Platform::Mail, Platform::Erp, Platform::Crm]
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn registering_same_platform_replaces_in_place() {
        let registry = AdapterRegistry::new();
        registry.register(Arc::new(EmptyAdapter {
            platform: Platform::Mail,
        }));
        registry.register(Arc::new(EmptyAdapter {
            platform: Platform::Erp,
        }));
        registry.register(Arc::new(EmptyAdapter {
            platform: Platform::Mail,
        }));

        assert_eq!(registry.platforms(), vec![Platform::Mail, Platform::Erp]);
        assert!(registry.get(Platform::Mail).is_some());
        assert!(registry.get(Platform::FileShare).is_none());
    }
}
