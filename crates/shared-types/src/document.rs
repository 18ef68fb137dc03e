use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    Evidence,
    Contract,
    Identity,
    CourtFiling,
    Correspondence,
    Other,
}

impl DocumentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Evidence => "evidence",
            Self::Contract => "contract",
            Self::Identity => "identity",
            Self::CourtFiling => "court_filing",
            Self::Correspondence => "correspondence",
            Self::Other => "other",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "evidence" => Some(Self::Evidence),
            "contract" => Some(Self::Contract),
            "identity" => Some(Self::Identity),
            "court_filing" => Some(Self::CourtFiling),
            "correspondence" => Some(Self::Correspondence),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Review status assigned by the backend after upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// Who a document is visible to beyond its owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareSettings {
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub shared_with: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shareable_link: Option<String>,
}

/// A document vault record. File bytes live behind the download endpoint;
/// the client only ever holds this metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: DocumentCategory,
    pub file_name: String,
    pub file_path: String,
    pub file_type: String,
    pub file_size: u64,
    pub status: DocumentStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    pub uploaded_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    #[serde(default)]
    pub share_settings: ShareSettings,
    pub uploaded_at: DateTime<Utc>,
}

/// Metadata half of a multipart upload; the file part rides alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDocumentRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: DocumentCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
}

/// Short-lived download URL handed out by `GET /api/v1/documents/:id/download`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadLink {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}
