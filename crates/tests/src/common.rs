use chrono::{DateTime, TimeZone, Utc};
use client::{ApiClient, ClientConfig, SessionStore};
use shared_types::{
    AssignmentStatus, AuthUser, Case, CaseStatus, CaseType, Dispute, DisputeCategory,
    DisputeParty, DisputePriority, DisputeStatus, Document, DocumentCategory, DocumentStatus,
    LawyerProfile, Participant, Reminder, ReminderPriority, Report, ReportStatus, ReportType,
    Session, ShareSettings,
};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "tok-test";

/// Mock backend plus an authenticated client pointed at it.
pub async fn test_client() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let session = SessionStore::new();
    session.set(test_session(TEST_TOKEN, "citizen"));
    let client = ApiClient::new(&ClientConfig::new(server.uri()), session).unwrap();
    (server, client)
}

/// Mock backend plus a signed-out client (for auth flows).
pub async fn anon_client() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&ClientConfig::new(server.uri()), SessionStore::new()).unwrap();
    (server, client)
}

pub fn test_session(token: &str, role: &str) -> Session {
    Session {
        token: token.to_string(),
        role: role.to_string(),
        user: AuthUser {
            id: "u-test".to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            role: role.to_string(),
            phone: None,
        },
    }
}

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, day, hour, 0, 0).unwrap()
}

/// `{success: true, data: ...}` body.
pub fn envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({"success": true, "data": data})
}

/// `{success: false, message: ...}` body.
pub fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({"success": false, "message": message})
}

pub fn fresh_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

// --- Entity builders -------------------------------------------------

pub fn sample_case(id: &str, title: &str, citizen_name: &str, status: CaseStatus) -> Case {
    Case {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("description of {}", title),
        case_type: CaseType::Civil,
        status,
        citizen: Participant {
            id: "u1".to_string(),
            name: citizen_name.to_string(),
            email: "citizen@example.com".to_string(),
            phone: None,
        },
        lawyer: None,
        next_hearing: None,
        created_at: at(1, 8),
        updated_at: at(1, 8),
    }
}

pub fn sample_reminder(id: &str, title: &str, due: DateTime<Utc>) -> Reminder {
    Reminder {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        due_date: due,
        priority: ReminderPriority::High,
        completed: false,
        completed_at: None,
        case_id: None,
        case_name: None,
    }
}

pub fn sample_dispute(id: &str, title: &str, status: DisputeStatus) -> Dispute {
    Dispute {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("description of {}", title),
        plaintiff: DisputeParty {
            id: "p1".to_string(),
            name: "Acme Ltd".to_string(),
            party_type: "organization".to_string(),
            contact_email: "legal@acme.example".to_string(),
        },
        defendant: DisputeParty {
            id: "p2".to_string(),
            name: "John Smith".to_string(),
            party_type: "individual".to_string(),
            contact_email: "john@example.com".to_string(),
        },
        status,
        category: DisputeCategory::Commercial,
        priority: DisputePriority::High,
        assigned_lawyer: None,
        assignment_status: AssignmentStatus::Unassigned,
        can_create_case: false,
        related_case_id: None,
        next_hearing: None,
        hearing_location: None,
        hearing_type: None,
        messages: Vec::new(),
        settlement_offers: Vec::new(),
        documents: Vec::new(),
        deadlines: Vec::new(),
        last_activity: at(2, 12),
    }
}

pub fn sample_document(id: &str, title: &str) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        category: DocumentCategory::Evidence,
        file_name: format!("{}.pdf", id),
        file_path: format!("/uploads/{}.pdf", id),
        file_type: "application/pdf".to_string(),
        file_size: 1024,
        status: DocumentStatus::Pending,
        tags: Vec::new(),
        uploaded_by: "u-test".to_string(),
        case_id: None,
        share_settings: ShareSettings::default(),
        uploaded_at: at(3, 10),
    }
}

pub fn sample_report(id: &str, title: &str, status: ReportStatus) -> Report {
    Report {
        id: id.to_string(),
        title: title.to_string(),
        content: "Findings and recommendation.".to_string(),
        status,
        report_type: ReportType::CaseSummary,
        lawyer_info: LawyerProfile {
            id: "l1".to_string(),
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: None,
            specialization: Some("civil".to_string()),
        },
        case_id: None,
        case_name: None,
        created_at: at(4, 9),
        updated_at: at(4, 9),
    }
}

/// Serialize an entity the way the backend would send it.
pub fn wire<T: serde::Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap()
}
