use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::LawyerProfile;

/// Lifecycle status of a dispute, from intake to terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    Draft,
    Submitted,
    UnderReview,
    Assigned,
    InProgress,
    Mediation,
    SettlementPending,
    Resolved,
    Closed,
    Withdrawn,
}

impl DisputeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::UnderReview => "under_review",
            Self::Assigned => "assigned",
            Self::InProgress => "in_progress",
            Self::Mediation => "mediation",
            Self::SettlementPending => "settlement_pending",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
            Self::Withdrawn => "withdrawn",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "submitted" => Some(Self::Submitted),
            "under_review" => Some(Self::UnderReview),
            "assigned" => Some(Self::Assigned),
            "in_progress" => Some(Self::InProgress),
            "mediation" => Some(Self::Mediation),
            "settlement_pending" => Some(Self::SettlementPending),
            "resolved" => Some(Self::Resolved),
            "closed" => Some(Self::Closed),
            "withdrawn" => Some(Self::Withdrawn),
            _ => None,
        }
    }

    /// Terminal states accept no further mutating actions client-side.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved | Self::Closed | Self::Withdrawn)
    }
}

/// Subject-matter category of a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeCategory {
    Contract,
    Property,
    Family,
    Employment,
    Commercial,
    Consumer,
    LandlordTenant,
    Other,
}

impl DisputeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Property => "property",
            Self::Family => "family",
            Self::Employment => "employment",
            Self::Commercial => "commercial",
            Self::Consumer => "consumer",
            Self::LandlordTenant => "landlord_tenant",
            Self::Other => "other",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "contract" => Some(Self::Contract),
            "property" => Some(Self::Property),
            "family" => Some(Self::Family),
            "employment" => Some(Self::Employment),
            "commercial" => Some(Self::Commercial),
            "consumer" => Some(Self::Consumer),
            "landlord_tenant" => Some(Self::LandlordTenant),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputePriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl DisputePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

/// Lawyer-acceptance sub-state, tracked independently of the dispute's
/// overall lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Unassigned,
    PendingAcceptance,
    Accepted,
    Declined,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unassigned => "unassigned",
            Self::PendingAcceptance => "pending_acceptance",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

/// One side of a dispute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeParty {
    pub id: String,
    pub name: String,
    /// "individual" or "organization".
    pub party_type: String,
    pub contact_email: String,
}

/// A message on the dispute thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeMessage {
    pub id: String,
    pub content: String,
    pub sender: String,
    /// "text", "system", or "settlement".
    pub message_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Rejected,
}

impl OfferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

/// A settlement offer made by either party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementOffer {
    pub id: String,
    pub offered_by: String,
    pub amount: f64,
    pub terms: String,
    pub status: OfferStatus,
    pub created_at: DateTime<Utc>,
}

/// A document attached to a dispute (distinct from the standalone document
/// vault records).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeDocument {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub uploaded_by: String,
    pub shared: bool,
    pub uploaded_at: DateTime<Utc>,
}

/// Valid dispute deadline status values.
pub const DISPUTE_DEADLINE_STATUSES: &[&str] = &["open", "met", "missed", "cancelled"];

/// Check whether a status string is a valid dispute deadline status.
pub fn is_valid_deadline_status(s: &str) -> bool {
    DISPUTE_DEADLINE_STATUSES.contains(&s)
}

/// A deadline tracked on a dispute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeDeadline {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    pub status: String,
}

/// A dispute as the backend returns it, with its embedded collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    pub id: String,
    pub title: String,
    pub description: String,
    pub plaintiff: DisputeParty,
    pub defendant: DisputeParty,
    pub status: DisputeStatus,
    pub category: DisputeCategory,
    pub priority: DisputePriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_lawyer: Option<LawyerProfile>,
    pub assignment_status: AssignmentStatus,
    #[serde(default)]
    pub can_create_case: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_case_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_hearing: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing_type: Option<String>,
    #[serde(default)]
    pub messages: Vec<DisputeMessage>,
    #[serde(default)]
    pub settlement_offers: Vec<SettlementOffer>,
    #[serde(default)]
    pub documents: Vec<DisputeDocument>,
    #[serde(default)]
    pub deadlines: Vec<DisputeDeadline>,
    pub last_activity: DateTime<Utc>,
}

// ── Request DTOs ────────────────────────────────────────────────────

/// Body for `POST /api/v1/disputes/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateDisputeRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, message = "Title is required"))
    )]
    pub title: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 10, message = "Describe the dispute in at least 10 characters"))
    )]
    pub description: String,
    pub category: DisputeCategory,
    pub priority: DisputePriority,
    pub defendant_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid defendant email is required"))
    )]
    pub defendant_email: String,
}

/// Body for `POST /api/v1/disputes/:id/messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMessageRequest {
    pub content: String,
    pub message_type: String,
}

/// Body for `POST /api/v1/disputes/:id/settlement-offer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementOfferRequest {
    pub amount: f64,
    pub terms: String,
}

/// Body for `PUT /api/v1/disputes/:id/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDisputeStatusRequest {
    pub status: DisputeStatus,
}
