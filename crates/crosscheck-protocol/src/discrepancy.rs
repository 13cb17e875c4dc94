//! Discrepancy model: structured findings emitted by the rule engine.

use crate::record::{Platform, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Detection strength of a finding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Strong, unambiguous signal.
    High,
    /// Likely issue worth review.
    Medium,
    /// Weak or informational signal.
    Low,
}

impl Severity {
    /// Return the severity as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Numeric rank for comparisons; higher means more severe.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::High => 2,
            Severity::Medium => 1,
            Severity::Low => 0,
        }
    }
}

/// Business impact of a finding. Independent axis from [`Severity`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// High business impact.
    High,
    /// Moderate business impact.
    Medium,
    /// Low business impact.
    Low,
}

impl RiskLevel {
    /// Return the risk level as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }
}

/// One inconsistency detected across platform records.
///
/// Discrepancies are ephemeral: recomputed on every rule-engine run, never
/// persisted, with no identity across runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Discrepancy {
    /// Detection strength.
    pub severity: Severity,
    /// Human-readable explanation.
    pub description: String,
    /// Platforms contributing evidence, deduplicated in evidence order.
    pub platforms_involved: Vec<Platform>,
    /// Snapshot of the records that triggered the finding.
    pub items: Vec<Record>,
    /// Regulatory or internal framework implicated.
    pub compliance_framework: String,
    /// Business impact.
    pub risk_level: RiskLevel,
    /// Suggested remediation.
    pub recommended_action: String,
    /// When the rule-engine run detected the finding.
    pub detected_at: DateTime<Utc>,
}
