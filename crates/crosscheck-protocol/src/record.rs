//! Record model: one observation collected from a source platform.

use crate::error::RecordError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open string-to-scalar metadata attached to a record.
///
/// Adapters legitimately vary in which fields they populate, so this stays a
/// free-form map rather than a typed schema.
pub type Metadata = Map<String, Value>;

/// Source platform a record was observed on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Document management system.
    DocumentStore,
    /// Enterprise resource planning system.
    Erp,
    /// Customer relationship management system.
    Crm,
    /// Issue and project tracking system.
    TicketTracker,
    /// Team chat system.
    ChatHub,
    /// Email system.
    Mail,
    /// File storage and sharing system.
    FileShare,
}

impl Platform {
    /// Every platform in canonical order.
    pub const ALL: [Platform; 7] = [
        Platform::DocumentStore,
        Platform::Erp,
        Platform::Crm,
        Platform::TicketTracker,
        Platform::ChatHub,
        Platform::Mail,
        Platform::FileShare,
    ];

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::DocumentStore => "Document Store",
            Platform::Erp => "ERP",
            Platform::Crm => "CRM",
            Platform::TicketTracker => "Ticket Tracker",
            Platform::ChatHub => "Chat Hub",
            Platform::Mail => "Mail",
            Platform::FileShare => "File Share",
        }
    }

    /// URL-safe identifier used by the HTTP boundary.
    pub fn slug(&self) -> &'static str {
        match self {
            Platform::DocumentStore => "document_store",
            Platform::Erp => "erp",
            Platform::Crm => "crm",
            Platform::TicketTracker => "ticket_tracker",
            Platform::ChatHub => "chat_hub",
            Platform::Mail => "mail",
            Platform::FileShare => "file_share",
        }
    }

    /// Parse a platform from a slug or display label.
    ///
    /// Matching is case-insensitive and treats spaces and underscores as
    /// equivalent, so `"ticket_tracker"`, `"Ticket Tracker"`, and
    /// `"TICKET TRACKER"` all resolve to the same platform.
    pub fn parse(value: &str) -> Option<Platform> {
        let wanted = normalize(value);
        Platform::ALL
            .into_iter()
            .find(|platform| normalize(platform.slug()) == wanted)
    }
}

/// Normalize a platform name for comparison.
fn normalize(value: &str) -> String {
    value.trim().to_lowercase().replace(' ', "_")
}

/// Semantic kind of record content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// Free-form document.
    Document,
    /// Email message.
    Email,
    /// Work item or task.
    Task,
    /// Sales opportunity.
    Opportunity,
    /// Commercial contract.
    Contract,
    /// Internal policy document.
    Policy,
    /// Compliance artifact.
    ComplianceItem,
    /// User activity such as a chat message.
    UserActivity,
}

impl DataType {
    /// Return the data type as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Document => "document",
            DataType::Email => "email",
            DataType::Task => "task",
            DataType::Opportunity => "opportunity",
            DataType::Contract => "contract",
            DataType::Policy => "policy",
            DataType::ComplianceItem => "compliance_item",
            DataType::UserActivity => "user_activity",
        }
    }
}

/// One observation from a source platform. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Originating platform.
    pub platform: Platform,
    /// Semantic kind of the content.
    pub data_type: DataType,
    /// Free-form text body searched by the rule engine.
    pub content: String,
    /// Platform-specific open metadata.
    #[serde(default)]
    pub metadata: Metadata,
    /// When the record was produced or observed.
    pub timestamp: DateTime<Utc>,
    /// Acting or owning user.
    pub user_id: String,
    /// Platform-local stable identifier, preserved for traceability.
    pub source_id: String,
    /// Adapter-assigned trust indicator in `[0, 1]`.
    pub confidence_score: f64,
}

impl Record {
    /// Construct a validated record.
    ///
    /// Malformed records are rejected here so downstream rules can assume
    /// well-formed fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        platform: Platform,
        data_type: DataType,
        content: impl Into<String>,
        metadata: Metadata,
        timestamp: DateTime<Utc>,
        user_id: impl Into<String>,
        source_id: impl Into<String>,
        confidence_score: f64,
    ) -> Result<Self, RecordError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(RecordError::EmptyContent);
        }
        let user_id = user_id.into();
        if user_id.trim().is_empty() {
            return Err(RecordError::EmptyField("user_id"));
        }
        let source_id = source_id.into();
        if source_id.trim().is_empty() {
            return Err(RecordError::EmptyField("source_id"));
        }
        if !(0.0..=1.0).contains(&confidence_score) || confidence_score.is_nan() {
            return Err(RecordError::ConfidenceOutOfRange(confidence_score));
        }
        Ok(Self {
            platform,
            data_type,
            content,
            metadata,
            timestamp,
            user_id,
            source_id,
            confidence_score,
        })
    }
}
