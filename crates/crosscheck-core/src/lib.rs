//! Core discrepancy engine: aggregation, rule evaluation, and reporting.

mod aggregator;
mod engine;
mod error;
mod report;
mod rules;

pub use aggregator::{Aggregator, Collection};
pub use engine::Engine;
pub use error::EngineError;
pub use report::ReportBuilder;
pub use rules::{
    FrameworkGapRule, MfaConsistencyRule, RetentionConflictRule, Rule, RuleEngine,
    VendorReviewRule,
};
