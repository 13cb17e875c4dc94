//! Wire payloads returned by the engine and HTTP boundary.

use crate::discrepancy::{Discrepancy, RiskLevel, Severity};
use crate::record::{DataType, Metadata, Platform, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ellipsis marker appended to truncated previews.
const ELLIPSIS: &str = "...";

/// Truncate content to a character-bounded preview.
///
/// Returns the full text when it fits, otherwise the first `max_chars`
/// characters followed by an ellipsis marker. Operates on characters, not
/// bytes, so multi-byte content never splits mid-character.
pub fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let mut truncated: String = content.chars().take(max_chars).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Outcome of one adapter fetch within an aggregation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceStatus {
    /// Platform the adapter serves.
    pub platform: Platform,
    /// Records contributed to the unified set.
    pub records: usize,
    /// Failure description when the adapter timed out or errored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Reduced view of a record for feeds and finding evidence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordPreview {
    /// Originating platform.
    pub platform: Platform,
    /// Display label for the platform.
    pub platform_label: String,
    /// Semantic kind of the content.
    pub data_type: DataType,
    /// Truncated content preview.
    pub content_preview: String,
    /// Acting or owning user.
    pub user_id: String,
    /// When the record was produced.
    pub timestamp: DateTime<Utc>,
    /// Adapter-assigned trust indicator.
    pub confidence_score: f64,
    /// Platform-specific metadata.
    pub metadata: Metadata,
}

impl RecordPreview {
    /// Reduce a record to a preview with the given content budget.
    pub fn from_record(record: &Record, max_chars: usize) -> Self {
        Self {
            platform: record.platform,
            platform_label: record.platform.label().to_string(),
            data_type: record.data_type,
            content_preview: preview(&record.content, max_chars),
            user_id: record.user_id.clone(),
            timestamp: record.timestamp,
            confidence_score: record.confidence_score,
            metadata: record.metadata.clone(),
        }
    }
}

/// Serialized view of a discrepancy with previewed evidence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscrepancyView {
    /// Detection strength.
    pub severity: Severity,
    /// Human-readable explanation.
    pub description: String,
    /// Platforms contributing evidence.
    pub platforms_involved: Vec<Platform>,
    /// Framework implicated.
    pub compliance_framework: String,
    /// Business impact.
    pub risk_level: RiskLevel,
    /// Suggested remediation.
    pub recommended_action: String,
    /// Detection timestamp.
    pub detected_at: DateTime<Utc>,
    /// Number of evidence records.
    pub items_count: usize,
    /// Previewed evidence records.
    pub items: Vec<RecordPreview>,
}

impl DiscrepancyView {
    /// Serialize a discrepancy, previewing its evidence records.
    pub fn from_discrepancy(discrepancy: &Discrepancy, max_chars: usize) -> Self {
        Self {
            severity: discrepancy.severity,
            description: discrepancy.description.clone(),
            platforms_involved: discrepancy.platforms_involved.clone(),
            compliance_framework: discrepancy.compliance_framework.clone(),
            risk_level: discrepancy.risk_level,
            recommended_action: discrepancy.recommended_action.clone(),
            detected_at: discrepancy.detected_at,
            items_count: discrepancy.items.len(),
            items: discrepancy
                .items
                .iter()
                .map(|record| RecordPreview::from_record(record, max_chars))
                .collect(),
        }
    }
}

/// Per-platform aggregate over one collection run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformSummary {
    /// Platform identifier.
    pub platform: Platform,
    /// Display label.
    pub label: String,
    /// Records collected from the platform.
    pub record_count: usize,
    /// Distinct data types seen, in canonical order.
    pub data_types: Vec<DataType>,
    /// Distinct users seen, sorted.
    pub users: Vec<String>,
    /// Most recent record timestamp, when any records exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
}

/// Platform summary plus previewed records, as returned by `/monitor`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformActivity {
    /// Aggregate platform summary.
    #[serde(flatten)]
    pub summary: PlatformSummary,
    /// Previewed records collected from the platform.
    pub items: Vec<RecordPreview>,
}

/// Monitoring payload: per-platform record summaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitorReport {
    /// When the collection ran.
    pub monitored_at: DateTime<Utc>,
    /// Number of platforms polled.
    pub platforms_monitored: usize,
    /// Total records in the unified set.
    pub total_records_collected: usize,
    /// Per-platform summaries with previews.
    pub platforms: Vec<PlatformActivity>,
    /// Per-adapter fetch outcomes.
    pub sources: Vec<SourceStatus>,
}

/// Histogram of three-level counts (severity or risk).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelCounts {
    /// High-level findings.
    pub high: usize,
    /// Medium-level findings.
    pub medium: usize,
    /// Low-level findings.
    pub low: usize,
}

/// Risk assessment block of an intelligence report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    /// Highest severity present among findings; low when there are none.
    pub overall_risk: Severity,
    /// Findings by severity.
    pub severity_counts: LevelCounts,
    /// Number of platforms polled.
    pub platforms_monitored: usize,
    /// Total records analyzed.
    pub total_records_analyzed: usize,
}

/// Full cross-platform intelligence report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntelligenceReport {
    /// When the report was generated.
    pub report_generated_at: DateTime<Utc>,
    /// Per-platform aggregates.
    pub platform_summary: Vec<PlatformSummary>,
    /// Findings from the rule engine.
    pub discrepancies: Vec<DiscrepancyView>,
    /// Risk assessment over the run.
    pub risk_assessment: RiskAssessment,
    /// Narrative insights derived from the findings.
    pub insights: Vec<String>,
    /// Per-adapter fetch outcomes.
    pub sources: Vec<SourceStatus>,
}

/// Activity feed payload: most recent records across platforms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedReport {
    /// When the feed was generated.
    pub generated_at: DateTime<Utc>,
    /// Number of entries returned.
    pub activities_count: usize,
    /// Entries sorted by timestamp descending.
    pub activities: Vec<RecordPreview>,
}

/// Detailed metrics for a single platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformDetail {
    /// Platform identifier.
    pub platform: Platform,
    /// Display label.
    pub label: String,
    /// Records collected from the platform.
    pub total_records: usize,
    /// Record counts keyed by data type.
    pub data_type_distribution: BTreeMap<String, usize>,
    /// Record counts keyed by user.
    pub user_activity: BTreeMap<String, usize>,
    /// Most recent records, previewed.
    pub recent_activity: Vec<RecordPreview>,
    /// Most recent record timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
    /// Mean confidence score across the platform's records.
    pub average_confidence: f64,
}

/// Findings grouped by severity, framework, and platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscrepancySummaryReport {
    /// When the summary was generated.
    pub generated_at: DateTime<Utc>,
    /// Total findings in the run.
    pub total_discrepancies: usize,
    /// Findings by severity.
    pub severity_distribution: LevelCounts,
    /// Findings by compliance framework.
    pub framework_distribution: BTreeMap<String, usize>,
    /// Evidence contributions by platform label.
    pub platform_distribution: BTreeMap<String, usize>,
    /// Findings by risk level.
    pub risk_distribution: LevelCounts,
}
