//! Shared record, discrepancy, and report payload types for Crosscheck.

mod discrepancy;
mod error;
mod record;
mod report;

pub use discrepancy::{Discrepancy, RiskLevel, Severity};
pub use error::{AdapterError, RecordError};
pub use record::{DataType, Metadata, Platform, Record};
pub use report::{
    DiscrepancySummaryReport, DiscrepancyView, FeedReport, IntelligenceReport, LevelCounts,
    MonitorReport, PlatformActivity, PlatformDetail, PlatformSummary, RecordPreview,
    RiskAssessment, SourceStatus, preview,
};

use uuid::Uuid;

/// Unique identifier for one engine run.
pub type RunId = Uuid;
