//! Report assembly over a collection run and its findings.

use crate::aggregator::Collection;
use crosscheck_config::FeedConfig;
use crosscheck_protocol::{
    Discrepancy, DiscrepancySummaryReport, DiscrepancyView, FeedReport, IntelligenceReport,
    LevelCounts, MonitorReport, Platform, PlatformActivity, PlatformDetail, PlatformSummary,
    Record, RecordPreview, RiskAssessment, RiskLevel, Severity,
};
use chrono::Utc;
use std::collections::BTreeMap;

/// Preview budget for monitor, validation, and platform-detail payloads.
const DETAIL_PREVIEW_CHARS: usize = 150;

/// Entries in a platform detail's recent-activity list.
const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Builds wire payloads from a collection run and rule-engine findings.
///
/// Stateless apart from feed tuning; every method is a pure projection of
/// its inputs.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    feed_limit: usize,
    feed_preview_chars: usize,
}

impl ReportBuilder {
    /// Create a builder with the given feed tuning.
    pub fn new(feed: &FeedConfig) -> Self {
        Self {
            feed_limit: feed.limit,
            feed_preview_chars: feed.preview_chars,
        }
    }

    /// Per-platform aggregates for the platforms polled in this run.
    pub fn platform_summaries(&self, collection: &Collection) -> Vec<PlatformSummary> {
        collection
            .sources
            .iter()
            .map(|source| summarize_platform(source.platform, &collection.records))
            .collect()
    }

    /// Monitoring payload: platform summaries with previewed records.
    pub fn monitor_report(&self, collection: &Collection) -> MonitorReport {
        let platforms = collection
            .sources
            .iter()
            .map(|source| {
                let items = collection
                    .records
                    .iter()
                    .filter(|record| record.platform == source.platform)
                    .map(|record| RecordPreview::from_record(record, DETAIL_PREVIEW_CHARS))
                    .collect();
                PlatformActivity {
                    summary: summarize_platform(source.platform, &collection.records),
                    items,
                }
            })
            .collect();
        MonitorReport {
            monitored_at: Utc::now(),
            platforms_monitored: collection.sources.len(),
            total_records_collected: collection.records.len(),
            platforms,
            sources: collection.sources.clone(),
        }
    }

    /// Serialized findings with previewed evidence.
    pub fn discrepancy_views(&self, findings: &[Discrepancy]) -> Vec<DiscrepancyView> {
        findings
            .iter()
            .map(|finding| DiscrepancyView::from_discrepancy(finding, DETAIL_PREVIEW_CHARS))
            .collect()
    }

    /// Full intelligence report over one run.
    pub fn intelligence_report(
        &self,
        collection: &Collection,
        findings: &[Discrepancy],
    ) -> IntelligenceReport {
        IntelligenceReport {
            report_generated_at: Utc::now(),
            platform_summary: self.platform_summaries(collection),
            discrepancies: self.discrepancy_views(findings),
            risk_assessment: risk_assessment(collection, findings),
            insights: insights(findings),
            sources: collection.sources.clone(),
        }
    }

    /// Activity feed: most recent records across all platforms.
    ///
    /// Records are ordered by timestamp descending; ties keep their
    /// collection order. At most the configured limit is returned.
    pub fn activity_feed(&self, collection: &Collection) -> FeedReport {
        let mut ordered: Vec<&Record> = collection.records.iter().collect();
        ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let activities: Vec<RecordPreview> = ordered
            .into_iter()
            .take(self.feed_limit)
            .map(|record| RecordPreview::from_record(record, self.feed_preview_chars))
            .collect();
        FeedReport {
            generated_at: Utc::now(),
            activities_count: activities.len(),
            activities,
        }
    }

    /// Detailed metrics for one platform.
    pub fn platform_detail(&self, collection: &Collection, platform: Platform) -> PlatformDetail {
        let records: Vec<&Record> = collection
            .records
            .iter()
            .filter(|record| record.platform == platform)
            .collect();

        let mut data_type_distribution = BTreeMap::new();
        let mut user_activity = BTreeMap::new();
        for record in &records {
            *data_type_distribution
                .entry(record.data_type.as_str().to_string())
                .or_insert(0) += 1;
            *user_activity.entry(record.user_id.clone()).or_insert(0) += 1;
        }

        let mut recent: Vec<&&Record> = records.iter().collect();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let recent_activity = recent
            .into_iter()
            .take(RECENT_ACTIVITY_LIMIT)
            .map(|record| RecordPreview::from_record(record, DETAIL_PREVIEW_CHARS))
            .collect();

        let last_activity = records.iter().map(|record| record.timestamp).max();
        let average_confidence = if records.is_empty() {
            0.0
        } else {
            records
                .iter()
                .map(|record| record.confidence_score)
                .sum::<f64>()
                / records.len() as f64
        };

        PlatformDetail {
            platform,
            label: platform.label().to_string(),
            total_records: records.len(),
            data_type_distribution,
            user_activity,
            recent_activity,
            last_activity,
            average_confidence,
        }
    }

    /// Findings grouped by severity, framework, risk, and platform.
    pub fn discrepancy_summary(&self, findings: &[Discrepancy]) -> DiscrepancySummaryReport {
        let mut severity_distribution = LevelCounts::default();
        let mut risk_distribution = LevelCounts::default();
        let mut framework_distribution = BTreeMap::new();
        let mut platform_distribution = BTreeMap::new();
        for finding in findings {
            match finding.severity {
                Severity::High => severity_distribution.high += 1,
                Severity::Medium => severity_distribution.medium += 1,
                Severity::Low => severity_distribution.low += 1,
            }
            match finding.risk_level {
                RiskLevel::High => risk_distribution.high += 1,
                RiskLevel::Medium => risk_distribution.medium += 1,
                RiskLevel::Low => risk_distribution.low += 1,
            }
            *framework_distribution
                .entry(finding.compliance_framework.clone())
                .or_insert(0) += 1;
            for platform in &finding.platforms_involved {
                *platform_distribution
                    .entry(platform.label().to_string())
                    .or_insert(0) += 1;
            }
        }
        DiscrepancySummaryReport {
            generated_at: Utc::now(),
            total_discrepancies: findings.len(),
            severity_distribution,
            framework_distribution,
            platform_distribution,
            risk_distribution,
        }
    }
}

/// Aggregate one platform's records into a summary.
fn summarize_platform(platform: Platform, records: &[Record]) -> PlatformSummary {
    let own: Vec<&Record> = records
        .iter()
        .filter(|record| record.platform == platform)
        .collect();
    let mut data_types: Vec<_> = own.iter().map(|record| record.data_type).collect();
    data_types.sort();
    data_types.dedup();
    let mut users: Vec<String> = own.iter().map(|record| record.user_id.clone()).collect();
    users.sort();
    users.dedup();
    PlatformSummary {
        platform,
        label: platform.label().to_string(),
        record_count: own.len(),
        data_types,
        users,
        last_activity: own.iter().map(|record| record.timestamp).max(),
    }
}

/// Risk assessment over one run.
///
/// Overall risk is the highest severity among findings, or low when the run
/// produced none.
fn risk_assessment(collection: &Collection, findings: &[Discrepancy]) -> RiskAssessment {
    let mut severity_counts = LevelCounts::default();
    let mut overall_risk = Severity::Low;
    for finding in findings {
        match finding.severity {
            Severity::High => severity_counts.high += 1,
            Severity::Medium => severity_counts.medium += 1,
            Severity::Low => severity_counts.low += 1,
        }
        if finding.severity.rank() > overall_risk.rank() {
            overall_risk = finding.severity;
        }
    }
    RiskAssessment {
        overall_risk,
        severity_counts,
        platforms_monitored: collection.sources.len(),
        total_records_analyzed: collection.records.len(),
    }
}

/// Narrative insight lines derived from the findings.
fn insights(findings: &[Discrepancy]) -> Vec<String> {
    if findings.is_empty() {
        return vec!["No cross-platform discrepancies detected in this run".to_string()];
    }
    findings
        .iter()
        .map(|finding| match finding.compliance_framework.as_str() {
            "SOC2, ISO27001" => {
                "Security standardization needed: MFA requirements are inconsistent across \
                 platforms"
                    .to_string()
            }
            "GDPR" => {
                "Compliance gap: GDPR requirements need review before EU engagements proceed"
                    .to_string()
            }
            "Data Retention Policy" => {
                "Policy alignment needed: data retention periods vary across documents"
                    .to_string()
            }
            "Vendor Management" => {
                "Vendor management attention required: urgent security issues identified in \
                 review"
                    .to_string()
            }
            other => format!("Review required under {}: {}", other, finding.description),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::ReportBuilder;
    use crate::aggregator::Collection;
    use crate::rules::RuleEngine;
    use crosscheck_config::FeedConfig;
    use crosscheck_protocol::{Platform, Record, Severity, SourceStatus};
    use crosscheck_test_utils::sample_record;
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn collection_of(records: Vec<Record>) -> Collection {
        let mut sources: Vec<SourceStatus> = Vec::new();
        for record in &records {
            if !sources.iter().any(|s| s.platform == record.platform) {
                sources.push(SourceStatus {
                    platform: record.platform,
                    records: 0,
                    error: None,
                });
            }
        }
        for source in &mut sources {
            source.records = records
                .iter()
                .filter(|r| r.platform == source.platform)
                .count();
        }
        Collection {
            run_id: Uuid::new_v4(),
            records,
            sources,
        }
    }

    fn builder() -> ReportBuilder {
        ReportBuilder::new(&FeedConfig::default())
    }

    #[test]
    fn platform_summaries_deduplicate_users_and_types() {
        let mut first = sample_record(Platform::Mail, "first note");
        first.user_id = "a@company.com".to_string();
        let mut second = sample_record(Platform::Mail, "second note");
        second.user_id = "a@company.com".to_string();
        let collection = collection_of(vec![first, second]);

        let summaries = builder().platform_summaries(&collection);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].record_count, 2);
        assert_eq!(summaries[0].users, vec!["a@company.com"]);
        assert_eq!(summaries[0].data_types.len(), 1);
    }

    #[test]
    fn activity_feed_sorts_descending_and_truncates() {
        let now = Utc::now();
        let mut records = Vec::new();
        for i in 0..25 {
            let mut record = sample_record(Platform::ChatHub, &format!("note {i}"));
            record.timestamp = now - Duration::minutes(i);
            records.push(record);
        }
        let feed = builder().activity_feed(&collection_of(records));

        assert_eq!(feed.activities_count, 20);
        assert_eq!(feed.activities[0].content_preview, "note 0");
        assert_eq!(feed.activities[19].content_preview, "note 19");
        for pair in feed.activities.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn activity_feed_previews_long_content() {
        let long = "c".repeat(400);
        let feed = builder().activity_feed(&collection_of(vec![sample_record(
            Platform::Mail,
            &long,
        )]));
        assert_eq!(feed.activities[0].content_preview.chars().count(), 103);
        assert!(feed.activities[0].content_preview.ends_with("..."));
    }

    #[test]
    fn platform_detail_builds_distributions() {
        let now = Utc::now();
        let mut records = Vec::new();
        for i in 0..12 {
            let mut record = sample_record(Platform::Erp, &format!("contract {i}"));
            record.timestamp = now - Duration::hours(i);
            record.confidence_score = 0.5;
            records.push(record);
        }
        let collection = collection_of(records);

        let detail = builder().platform_detail(&collection, Platform::Erp);
        assert_eq!(detail.total_records, 12);
        assert_eq!(detail.recent_activity.len(), 10);
        assert_eq!(detail.recent_activity[0].content_preview, "contract 0");
        assert_eq!(detail.average_confidence, 0.5);
        assert_eq!(detail.user_activity.values().sum::<usize>(), 12);
    }

    #[test]
    fn platform_detail_handles_empty_platform() {
        let detail = builder().platform_detail(&collection_of(vec![]), Platform::Crm);
        assert_eq!(detail.total_records, 0);
        assert_eq!(detail.average_confidence, 0.0);
        assert_eq!(detail.last_activity, None);
    }

    #[test]
    fn risk_assessment_defaults_to_low_without_findings() {
        let report = builder().intelligence_report(&collection_of(vec![]), &[]);
        assert_eq!(report.risk_assessment.overall_risk, Severity::Low);
        assert_eq!(
            report.insights,
            vec!["No cross-platform discrepancies detected in this run"]
        );
    }

    #[test]
    fn risk_assessment_takes_highest_severity() {
        let records = vec![
            sample_record(Platform::DocumentStore, "MFA required everywhere"),
            sample_record(Platform::Erp, "vendor allows basic authentication"),
            sample_record(Platform::FileShare, "Retention period: 7 years"),
            sample_record(Platform::Crm, "Contract retention: 3 years"),
        ];
        let findings = RuleEngine::with_default_rules().evaluate(&records);
        let collection = collection_of(records);

        let report = builder().intelligence_report(&collection, &findings);
        assert_eq!(report.risk_assessment.overall_risk, Severity::High);
        assert_eq!(report.risk_assessment.severity_counts.high, 1);
        assert_eq!(report.risk_assessment.severity_counts.medium, 1);
        assert_eq!(report.insights.len(), 2);
    }

    #[test]
    fn discrepancy_summary_counts_platform_contributions() {
        let records = vec![
            sample_record(Platform::DocumentStore, "MFA required everywhere"),
            sample_record(Platform::Erp, "vendor allows basic authentication"),
        ];
        let findings = RuleEngine::with_default_rules().evaluate(&records);

        let summary = builder().discrepancy_summary(&findings);
        assert_eq!(summary.total_discrepancies, 1);
        assert_eq!(summary.severity_distribution.high, 1);
        assert_eq!(summary.risk_distribution.high, 1);
        assert_eq!(summary.framework_distribution.get("SOC2, ISO27001"), Some(&1));
        assert_eq!(summary.platform_distribution.get("Document Store"), Some(&1));
        assert_eq!(summary.platform_distribution.get("ERP"), Some(&1));
    }
}
