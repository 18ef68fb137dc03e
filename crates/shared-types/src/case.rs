use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{LawyerProfile, Participant};

/// Legal category a case is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseType {
    #[serde(rename = "civil")]
    Civil,
    #[serde(rename = "criminal")]
    Criminal,
    #[serde(rename = "family")]
    Family,
    #[serde(rename = "property")]
    Property,
    #[serde(rename = "consumer")]
    Consumer,
    #[serde(rename = "others")]
    Others,
}

impl CaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Civil => "civil",
            Self::Criminal => "criminal",
            Self::Family => "family",
            Self::Property => "property",
            Self::Consumer => "consumer",
            Self::Others => "others",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "civil" => Some(Self::Civil),
            "criminal" => Some(Self::Criminal),
            "family" => Some(Self::Family),
            "property" => Some(Self::Property),
            "consumer" => Some(Self::Consumer),
            "others" => Some(Self::Others),
            _ => None,
        }
    }
}

/// Lifecycle status of a case. Transitions are server-authoritative; the
/// client only ever sends an explicit target value, never computes the next
/// status itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "resolved")]
    Resolved,
    #[serde(rename = "closed")]
    Closed,
    #[serde(rename = "rejected")]
    Rejected,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
            Self::Rejected => "rejected",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "in progress" => Some(Self::InProgress),
            "resolved" => Some(Self::Resolved),
            "closed" => Some(Self::Closed),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// A case as the backend returns it. The client's copy is transient: created
/// on fetch, patched from mutation responses, discarded on navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    pub title: String,
    pub description: String,
    pub case_type: CaseType,
    pub status: CaseStatus,
    pub citizen: Participant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lawyer: Option<LawyerProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_hearing: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update to a case. Absent fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateCaseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<CaseStatus>,
    pub next_hearing: Option<DateTime<Utc>>,
}

/// Lawyer's decision on a case assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentAction {
    #[serde(rename = "accept")]
    Accept,
    #[serde(rename = "reject")]
    Reject,
}

/// Body for `PUT /api/v1/cases/:id/assign`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignCaseRequest {
    pub action: AssignmentAction,
}
