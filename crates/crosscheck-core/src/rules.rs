//! Rule engine: a fixed, ordered set of independent detectors.
//!
//! Every detector is a pure function of the unified record set and emits at
//! most one discrepancy. Matching is plain case-insensitive substring search
//! over record content (retention period literals are matched
//! case-sensitively) — no tokenization or stemming. That is a deliberate
//! precision trade-off: detector output must be reproducible across runs.

use chrono::{DateTime, Utc};
use crosscheck_protocol::{Discrepancy, Platform, Record, RiskLevel, Severity};
use log::{debug, info};

/// Retention period literals recognized by the retention conflict rule, in
/// match-priority order. Only a record's first match counts.
const RETENTION_PERIODS: [&str; 3] = ["7 years", "3 years", "2 years"];

/// Interface for one detector.
pub trait Rule: Send + Sync {
    /// Stable rule identifier for logs.
    fn name(&self) -> &'static str;

    /// Scan the record set and emit at most one finding.
    ///
    /// Rules never mutate records and share no state; absence of a finding
    /// is the default, successful outcome.
    fn evaluate(&self, records: &[Record], detected_at: DateTime<Utc>) -> Option<Discrepancy>;
}

/// Case-insensitive substring match over record content.
fn contains_ci(content: &str, needle: &str) -> bool {
    content.to_lowercase().contains(needle)
}

/// Platforms contributing evidence, deduplicated in evidence order.
fn involved_platforms(items: &[Record]) -> Vec<Platform> {
    let mut platforms = Vec::new();
    for record in items {
        if !platforms.contains(&record.platform) {
            platforms.push(record.platform);
        }
    }
    platforms
}

/// Flags MFA policies coexisting with basic-authentication arrangements.
#[derive(Debug, Default)]
pub struct MfaConsistencyRule;

impl Rule for MfaConsistencyRule {
    fn name(&self) -> &'static str {
        "mfa-consistency"
    }

    fn evaluate(&self, records: &[Record], detected_at: DateTime<Utc>) -> Option<Discrepancy> {
        let mfa_required: Vec<&Record> = records
            .iter()
            .filter(|record| {
                contains_ci(&record.content, "mfa") && contains_ci(&record.content, "required")
            })
            .collect();
        let basic_auth: Vec<&Record> = records
            .iter()
            .filter(|record| contains_ci(&record.content, "basic authentication"))
            .collect();
        if mfa_required.is_empty() || basic_auth.is_empty() {
            return None;
        }

        let items: Vec<Record> = mfa_required
            .into_iter()
            .chain(basic_auth)
            .cloned()
            .collect();
        Some(Discrepancy {
            severity: Severity::High,
            description: "Inconsistent MFA requirements detected across platforms. Policy \
                          requires MFA but vendor contract allows basic authentication."
                .to_string(),
            platforms_involved: involved_platforms(&items),
            compliance_framework: "SOC2, ISO27001".to_string(),
            risk_level: RiskLevel::High,
            recommended_action: "Update vendor contract to require MFA and conduct security \
                                 review"
                .to_string(),
            detected_at,
            items,
        })
    }
}

/// Flags SOC2 commitments with no GDPR coverage anywhere in the set.
///
/// The suppression check is deliberately whole-set: a GDPR mention in *any*
/// record silences the rule, even when it is not the record mentioning SOC2.
#[derive(Debug, Default)]
pub struct FrameworkGapRule;

impl Rule for FrameworkGapRule {
    fn name(&self) -> &'static str {
        "compliance-framework-gap"
    }

    fn evaluate(&self, records: &[Record], detected_at: DateTime<Utc>) -> Option<Discrepancy> {
        let soc2: Vec<&Record> = records
            .iter()
            .filter(|record| contains_ci(&record.content, "soc2"))
            .collect();
        let gdpr_mentioned = records
            .iter()
            .any(|record| contains_ci(&record.content, "gdpr"));
        if soc2.is_empty() || gdpr_mentioned {
            return None;
        }

        let items: Vec<Record> = soc2.into_iter().cloned().collect();
        Some(Discrepancy {
            severity: Severity::Medium,
            description: "SOC2 compliance mentioned but GDPR requirements not addressed in EU \
                          client deal"
                .to_string(),
            platforms_involved: involved_platforms(&items),
            compliance_framework: "GDPR".to_string(),
            risk_level: RiskLevel::Medium,
            recommended_action: "Review GDPR compliance requirements for EU client deal"
                .to_string(),
            detected_at,
            items,
        })
    }
}

/// Flags conflicting data retention periods across documents.
#[derive(Debug, Default)]
pub struct RetentionConflictRule;

impl Rule for RetentionConflictRule {
    fn name(&self) -> &'static str {
        "retention-period-conflict"
    }

    fn evaluate(&self, records: &[Record], detected_at: DateTime<Utc>) -> Option<Discrepancy> {
        let retention: Vec<&Record> = records
            .iter()
            .filter(|record| contains_ci(&record.content, "retention"))
            .collect();
        if retention.len() < 2 {
            return None;
        }

        let mut periods: Vec<&str> = Vec::new();
        for record in &retention {
            let matched = RETENTION_PERIODS
                .iter()
                .find(|period| record.content.contains(*period));
            if let Some(period) = matched {
                if !periods.contains(period) {
                    periods.push(period);
                }
            }
        }
        if periods.len() < 2 {
            return None;
        }

        let items: Vec<Record> = retention.into_iter().cloned().collect();
        Some(Discrepancy {
            severity: Severity::Medium,
            description: "Inconsistent data retention periods specified across documents"
                .to_string(),
            platforms_involved: involved_platforms(&items),
            compliance_framework: "Data Retention Policy".to_string(),
            risk_level: RiskLevel::Medium,
            recommended_action: "Standardize data retention periods across all contracts and \
                                 policies"
                .to_string(),
            detected_at,
            items,
        })
    }
}

/// Flags vendor security reviews that surfaced urgent issues.
#[derive(Debug, Default)]
pub struct VendorReviewRule;

impl Rule for VendorReviewRule {
    fn name(&self) -> &'static str {
        "vendor-review-urgency"
    }

    fn evaluate(&self, records: &[Record], detected_at: DateTime<Utc>) -> Option<Discrepancy> {
        let vendor: Vec<&Record> = records
            .iter()
            .filter(|record| contains_ci(&record.content, "vendor"))
            .collect();
        if vendor.is_empty() {
            return None;
        }
        let review_mentioned = vendor
            .iter()
            .any(|record| contains_ci(&record.content, "security review"));
        let urgent_mentioned = vendor
            .iter()
            .any(|record| contains_ci(&record.content, "urgent"));
        if !review_mentioned || !urgent_mentioned {
            return None;
        }

        let items: Vec<Record> = vendor.into_iter().cloned().collect();
        Some(Discrepancy {
            severity: Severity::High,
            description: "Vendor security review identified urgent issues requiring immediate \
                          attention"
                .to_string(),
            platforms_involved: involved_platforms(&items),
            compliance_framework: "Vendor Management".to_string(),
            risk_level: RiskLevel::High,
            recommended_action: "Immediate vendor security remediation and quarterly review \
                                 implementation"
                .to_string(),
            detected_at,
            items,
        })
    }
}

/// Applies the fixed rule set in declared order.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

impl RuleEngine {
    /// Create an engine over an explicit rule set.
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Create an engine with the standard rule catalog.
    pub fn with_default_rules() -> Self {
        Self::new(vec![
            Box::new(MfaConsistencyRule),
            Box::new(FrameworkGapRule),
            Box::new(RetentionConflictRule),
            Box::new(VendorReviewRule),
        ])
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Evaluate every rule against the record set.
    ///
    /// All findings from one run share a single detection timestamp. Given
    /// the same record set, repeated runs yield identical findings modulo
    /// that timestamp.
    pub fn evaluate(&self, records: &[Record]) -> Vec<Discrepancy> {
        let detected_at = Utc::now();
        let mut findings = Vec::new();
        for rule in &self.rules {
            if let Some(finding) = rule.evaluate(records, detected_at) {
                debug!(
                    "rule fired (rule={}, severity={}, items={})",
                    rule.name(),
                    finding.severity.as_str(),
                    finding.items.len()
                );
                findings.push(finding);
            }
        }
        info!(
            "rule evaluation complete (records={}, findings={})",
            records.len(),
            findings.len()
        );
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::RuleEngine;
    use crosscheck_protocol::{Platform, Severity};
    use crosscheck_test_utils::sample_record;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_record_set_yields_no_findings() {
        let engine = RuleEngine::with_default_rules();
        assert_eq!(engine.evaluate(&[]).len(), 0);
    }

    #[test]
    fn mfa_rule_flags_policy_against_basic_authentication() {
        let records = vec![
            sample_record(Platform::DocumentStore, "MFA is required for all vendors"),
            sample_record(Platform::Erp, "Basic Authentication only"),
        ];
        let findings = RuleEngine::with_default_rules().evaluate(&records);

        assert_eq!(findings.len(), 1);
        let finding = &findings[0];
        assert_eq!(finding.severity, Severity::High);
        assert_eq!(finding.items.len(), 2);
        assert_eq!(
            finding.platforms_involved,
            vec![Platform::DocumentStore, Platform::Erp]
        );
    }

    #[test]
    fn retention_rule_fires_on_distinct_periods_only() {
        let conflicting = vec![
            sample_record(Platform::FileShare, "Retention period: 7 years"),
            sample_record(Platform::Erp, "Contract retention: 3 years"),
            sample_record(Platform::DocumentStore, "Policy retention: 7 years"),
        ];
        let findings = RuleEngine::with_default_rules().evaluate(&conflicting);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Medium);
        assert_eq!(findings[0].items.len(), 3);

        let uniform = vec![
            sample_record(Platform::FileShare, "Retention period: 7 years"),
            sample_record(Platform::Erp, "Contract retention: 7 years"),
            sample_record(Platform::DocumentStore, "Policy retention: 7 years"),
        ];
        assert_eq!(RuleEngine::with_default_rules().evaluate(&uniform).len(), 0);
    }

    #[test]
    fn retention_rule_needs_at_least_two_mentions() {
        let records = vec![sample_record(
            Platform::FileShare,
            "Retention schedule lists 7 years and 3 years",
        )];
        assert_eq!(RuleEngine::with_default_rules().evaluate(&records).len(), 0);
    }

    #[test]
    fn retention_periods_match_case_sensitively() {
        // "Years" with a capital Y is not one of the recognized literals.
        let records = vec![
            sample_record(Platform::FileShare, "Retention: 7 Years"),
            sample_record(Platform::Erp, "Retention: 3 years"),
        ];
        assert_eq!(RuleEngine::with_default_rules().evaluate(&records).len(), 0);
    }

    #[test]
    fn vendor_rule_requires_review_and_urgency() {
        let firing = vec![
            sample_record(Platform::Mail, "Vendor security review - URGENT remediation"),
            sample_record(Platform::Erp, "Vendor ABC contract on file"),
        ];
        let findings = RuleEngine::with_default_rules().evaluate(&firing);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::High);
        // every vendor record is cited as evidence
        assert_eq!(findings[0].items.len(), 2);

        let calm = vec![
            sample_record(Platform::Mail, "Vendor security review scheduled"),
            sample_record(Platform::Erp, "Vendor ABC contract on file"),
        ];
        assert_eq!(RuleEngine::with_default_rules().evaluate(&calm).len(), 0);
    }

    #[test]
    fn framework_gap_fires_without_any_gdpr_mention() {
        let records = vec![
            sample_record(Platform::Crm, "Deal requires SOC2 compliance"),
            sample_record(Platform::ChatHub, "Discussing onboarding schedule"),
        ];
        let findings = RuleEngine::with_default_rules().evaluate(&records);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].compliance_framework, "GDPR");
        assert_eq!(findings[0].items.len(), 1);
    }

    #[test]
    fn framework_gap_suppressed_by_any_gdpr_mention() {
        // The GDPR mention lives in a different record than the SOC2 one;
        // the whole-set policy still silences the rule.
        let records = vec![
            sample_record(Platform::Crm, "Deal requires SOC2 compliance"),
            sample_record(Platform::ChatHub, "Client asked about GDPR posture"),
        ];
        assert_eq!(RuleEngine::with_default_rules().evaluate(&records).len(), 0);
    }

    #[test]
    fn rules_evaluate_independently_over_shared_records() {
        // One record feeds both the MFA and vendor rules.
        let records = vec![
            sample_record(
                Platform::Mail,
                "Vendor security review - URGENT: MFA required immediately",
            ),
            sample_record(Platform::Erp, "Vendor contract allows basic authentication"),
        ];
        let findings = RuleEngine::with_default_rules().evaluate(&records);
        let names: Vec<&str> = findings
            .iter()
            .map(|finding| finding.compliance_framework.as_str())
            .collect();
        assert_eq!(names, vec!["SOC2, ISO27001", "Vendor Management"]);
    }

    #[test]
    fn evaluation_is_idempotent_modulo_detection_time() {
        let records = vec![
            sample_record(Platform::DocumentStore, "MFA required for vendors"),
            sample_record(Platform::Erp, "basic authentication in contract"),
        ];
        let engine = RuleEngine::with_default_rules();
        let mut first = engine.evaluate(&records);
        let mut second = engine.evaluate(&records);
        for finding in first.iter_mut().chain(second.iter_mut()) {
            finding.detected_at = chrono::DateTime::<chrono::Utc>::MIN_UTC;
        }
        assert_eq!(first, second);
    }
}
