use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::LawyerProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Draft,
    Final,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Final => "final",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    CaseSummary,
    LegalOpinion,
    Settlement,
    Progress,
    Closure,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CaseSummary => "case_summary",
            Self::LegalOpinion => "legal_opinion",
            Self::Settlement => "settlement",
            Self::Progress => "progress",
            Self::Closure => "closure",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "case_summary" => Some(Self::CaseSummary),
            "legal_opinion" => Some(Self::LegalOpinion),
            "settlement" => Some(Self::Settlement),
            "progress" => Some(Self::Progress),
            "closure" => Some(Self::Closure),
            _ => None,
        }
    }
}

/// A report authored by a lawyer. Draft reports are editable; finalized
/// reports are read-only and shareable with the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    pub content: String,
    pub status: ReportStatus,
    pub report_type: ReportType,
    pub lawyer_info: LawyerProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for `POST /api/v1/reports`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateReportRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, message = "Title is required"))
    )]
    pub title: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Report content is required"))
    )]
    pub content: String,
    pub report_type: ReportType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
}
