//! Engine facade: one entry point tying aggregation, rules, and reports.

use crate::aggregator::{Aggregator, Collection};
use crate::error::EngineError;
use crate::report::ReportBuilder;
use crate::rules::RuleEngine;
use crosscheck_adapters::{AdapterRegistry, builtin_adapter_registry};
use crosscheck_config::CrosscheckConfig;
use crosscheck_protocol::{
    Discrepancy, DiscrepancySummaryReport, DiscrepancyView, FeedReport, IntelligenceReport,
    MonitorReport, Platform, PlatformDetail,
};
use log::info;
use std::time::Duration;

/// Cross-platform discrepancy engine.
///
/// Holds no record state between calls: every operation runs a fresh
/// collection over the registered adapters and evaluates rules against that
/// snapshot. Construct once and share behind an `Arc`.
pub struct Engine {
    aggregator: Aggregator,
    rules: RuleEngine,
    reports: ReportBuilder,
}

impl Engine {
    /// Create an engine over an explicit adapter registry.
    pub fn new(config: &CrosscheckConfig, registry: AdapterRegistry) -> Self {
        let aggregator = Aggregator::new(registry, Duration::from_millis(config.adapters.timeout_ms));
        Self {
            aggregator,
            rules: RuleEngine::with_default_rules(),
            reports: ReportBuilder::new(&config.feed),
        }
    }

    /// Create an engine over the built-in simulated adapters.
    pub fn with_default_adapters(config: &CrosscheckConfig) -> Self {
        let registry = builtin_adapter_registry(Duration::from_millis(config.adapters.latency_ms));
        Self::new(config, registry)
    }

    /// The adapter registry backing this engine.
    pub fn registry(&self) -> &AdapterRegistry {
        self.aggregator.registry()
    }

    /// Collect from every adapter and evaluate the rule set.
    async fn run(&self) -> (Collection, Vec<Discrepancy>) {
        let collection = self.aggregator.collect_all().await;
        let findings = self.rules.evaluate(&collection.records);
        info!(
            "engine run complete (run_id={}, records={}, findings={})",
            collection.run_id,
            collection.records.len(),
            findings.len()
        );
        (collection, findings)
    }

    /// Poll every platform and summarize what was collected.
    pub async fn monitor(&self) -> MonitorReport {
        let collection = self.aggregator.collect_all().await;
        self.reports.monitor_report(&collection)
    }

    /// Run the rule engine and return the findings.
    pub async fn validate(&self) -> Vec<DiscrepancyView> {
        let (_, findings) = self.run().await;
        self.reports.discrepancy_views(&findings)
    }

    /// Full intelligence report: summaries, findings, risk, insights.
    pub async fn intelligence_report(&self) -> IntelligenceReport {
        let (collection, findings) = self.run().await;
        self.reports.intelligence_report(&collection, &findings)
    }

    /// Most recent activity across all platforms.
    pub async fn activity_feed(&self) -> FeedReport {
        let collection = self.aggregator.collect_all().await;
        self.reports.activity_feed(&collection)
    }

    /// Detailed metrics for one platform, addressed by slug or label.
    pub async fn platform_detail(&self, name: &str) -> Result<PlatformDetail, EngineError> {
        let platform = Platform::parse(name)
            .ok_or_else(|| EngineError::UnknownPlatform(name.to_string()))?;
        let collection = self.aggregator.collect_all().await;
        Ok(self.reports.platform_detail(&collection, platform))
    }

    /// Findings grouped by severity, framework, risk, and platform.
    pub async fn discrepancy_summary(&self) -> DiscrepancySummaryReport {
        let (_, findings) = self.run().await;
        self.reports.discrepancy_summary(&findings)
    }
}
