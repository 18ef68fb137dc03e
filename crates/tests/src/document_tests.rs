use app::views::DocumentListView;
use pretty_assertions::assert_eq;
use shared_types::{DocumentCategory, UploadDocumentRequest};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::*;

#[tokio::test]
async fn upload_sends_multipart_and_prepends_the_stored_record() {
    let (server, client) = test_client().await;
    let stored = sample_document("doc-new", "Lease agreement");

    Mock::given(method("POST"))
        .and(path("/api/v1/documents"))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(wire(&stored))))
        .expect(1)
        .mount(&server)
        .await;

    let req = UploadDocumentRequest {
        title: "Lease agreement".to_string(),
        description: "Signed copy".to_string(),
        category: DocumentCategory::Contract,
        tags: vec!["tenancy".to_string()],
        case_id: Some("case-1".to_string()),
    };
    let result = client
        .upload_document(&req, "lease.pdf", "application/pdf", b"%PDF-1.7 ...".to_vec())
        .await
        .unwrap();

    let mut view = DocumentListView::new();
    view.apply_uploaded(sample_document("doc-old", "Older upload"));
    view.apply_uploaded(result);
    assert_eq!(view.documents.items[0].id, "doc-new");
    assert_eq!(view.documents.items[1].id, "doc-old");

    let requests = server.received_requests().await.unwrap();
    let upload = &requests[0];
    let content_type = upload
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn invalid_content_type_fails_before_the_request() {
    let (server, client) = test_client().await;

    let req = UploadDocumentRequest {
        title: "Broken".to_string(),
        description: String::new(),
        category: DocumentCategory::Other,
        tags: Vec::new(),
        case_id: None,
    };
    let err = client
        .upload_document(&req, "x.bin", "definitely not a mime type", vec![1, 2, 3])
        .await
        .unwrap_err();
    assert!(matches!(err, shared_types::ClientError::Validation { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleted_document_is_removed_locally() {
    let (server, client) = test_client().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/documents/doc-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
        )
        .mount(&server)
        .await;

    let mut view = DocumentListView::new();
    view.apply_uploaded(sample_document("doc-1", "a"));
    view.apply_uploaded(sample_document("doc-2", "b"));

    client.delete_document("doc-1").await.unwrap();
    view.apply_deleted("doc-1");

    assert_eq!(view.documents.items.len(), 1);
    assert_eq!(view.documents.items[0].id, "doc-2");
}

#[tokio::test]
async fn download_link_is_fetched_per_document() {
    let (server, client) = test_client().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/documents/doc-1/download"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            serde_json::json!({"url": "https://files.lexaid.example/doc-1?sig=abc"}),
        )))
        .mount(&server)
        .await;

    let link = client.document_download_link("doc-1").await.unwrap();
    assert_eq!(link.url, "https://files.lexaid.example/doc-1?sig=abc");
    assert!(link.expires_at.is_none());
}

#[tokio::test]
async fn client_documents_listing_for_lawyers() {
    let (server, client) = test_client().await;
    let shared = sample_document("doc-shared", "Shared evidence");
    Mock::given(method("GET"))
        .and(path("/api/v1/documents/clients/all"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!([wire(&shared)]))),
        )
        .mount(&server)
        .await;

    let docs = client.list_client_documents().await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, "doc-shared");
}
