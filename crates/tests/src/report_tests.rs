use app::views::ReportListView;
use pretty_assertions::assert_eq;
use shared_types::{CreateReportRequest, ReportStatus, ReportType};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::*;

#[tokio::test]
async fn created_report_is_prepended_to_the_authored_list() {
    let (server, client) = test_client().await;
    let existing = sample_report("rep-old", "Progress report", ReportStatus::Draft);

    Mock::given(method("GET"))
        .and(path("/api/v1/reports"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(serde_json::json!([wire(&existing)]))),
        )
        .mount(&server)
        .await;

    let req = CreateReportRequest {
        title: "Opinion on tenancy claim".to_string(),
        content: "The claim is likely to succeed.".to_string(),
        report_type: ReportType::LegalOpinion,
        case_id: None,
    };
    let created = sample_report("rep-new", "Opinion on tenancy claim", ReportStatus::Draft);
    Mock::given(method("POST"))
        .and(path("/api/v1/reports"))
        .and(body_json(wire(&req)))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(wire(&created))))
        .mount(&server)
        .await;

    let mut view = ReportListView::authored();
    view.load(&client).await;
    assert_eq!(view.reports.items.len(), 1);

    let stored = client.create_report(&req).await.unwrap();
    view.apply_created(stored);

    assert_eq!(view.reports.items[0].id, "rep-new");
    assert_eq!(view.reports.items[1].id, "rep-old");
}

#[tokio::test]
async fn finalizing_uses_patch_and_replaces_the_draft() {
    let (server, client) = test_client().await;
    let draft = sample_report("rep-1", "Closure report", ReportStatus::Draft);

    let mut finalized = draft.clone();
    finalized.status = ReportStatus::Final;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/reports/rep-1/finalize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(wire(&finalized))))
        .expect(1)
        .mount(&server)
        .await;

    let mut view = ReportListView::authored();
    view.apply_created(draft);

    let updated = client.finalize_report("rep-1").await.unwrap();
    view.apply_finalized(updated);

    assert_eq!(view.reports.items[0].status, ReportStatus::Final);
}

#[tokio::test]
async fn shared_listing_hits_the_shared_endpoint() {
    let (server, client) = test_client().await;
    let shared = sample_report("rep-s", "Final opinion", ReportStatus::Final);
    Mock::given(method("GET"))
        .and(path("/api/v1/reports/shared/all"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!([wire(&shared)]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut view = ReportListView::shared();
    view.load(&client).await;
    assert_eq!(view.reports.items.len(), 1);
    assert_eq!(view.reports.items[0].status, ReportStatus::Final);
}

#[tokio::test]
async fn deleted_report_is_removed_locally() {
    let (server, client) = test_client().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/reports/rep-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
        )
        .mount(&server)
        .await;

    let mut view = ReportListView::authored();
    view.apply_created(sample_report("rep-1", "a", ReportStatus::Draft));
    view.apply_created(sample_report("rep-2", "b", ReportStatus::Draft));

    client.delete_report("rep-1").await.unwrap();
    view.apply_deleted("rep-1");

    assert_eq!(view.reports.items.len(), 1);
    assert_eq!(view.reports.items[0].id, "rep-2");
}
