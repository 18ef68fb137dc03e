use app::views::DisputeListView;
use app::DisputeScope;
use pretty_assertions::assert_eq;
use shared_types::{
    AssignmentStatus, CreateDisputeRequest, DisputeCategory, DisputePriority, DisputeStatus,
    OfferStatus, PostMessageRequest, SettlementOffer, SettlementOfferRequest,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::*;

#[tokio::test]
async fn lawyer_scope_reads_the_lawyer_listing() {
    let (server, client) = test_client().await;
    let assigned = sample_dispute("d1", "Unpaid invoice", DisputeStatus::Assigned);

    Mock::given(method("GET"))
        .and(path("/api/v1/disputes/lawyer"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(serde_json::json!([wire(&assigned)]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut view = DisputeListView::new(DisputeScope::Lawyer);
    view.load(&client).await;
    assert_eq!(view.disputes.items.len(), 1);
    assert!(!view.is_loading());
}

#[tokio::test]
async fn dispute_detail_returns_the_full_record() {
    let (server, client) = test_client().await;
    let detail = sample_dispute("d1", "Unpaid invoice", DisputeStatus::InProgress);
    Mock::given(method("GET"))
        .and(path("/api/v1/disputes/d1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(wire(&detail))))
        .mount(&server)
        .await;

    let fetched = client.get_dispute("d1").await.unwrap();
    assert_eq!(fetched, detail);
}

#[tokio::test]
async fn created_dispute_is_prepended() {
    let (server, client) = test_client().await;

    let req = CreateDisputeRequest {
        title: "Unpaid invoice".to_string(),
        description: "Invoice 442 unpaid for 90 days".to_string(),
        category: DisputeCategory::Commercial,
        priority: DisputePriority::High,
        defendant_name: "John Smith".to_string(),
        defendant_email: "john@example.com".to_string(),
    };
    let new_id = fresh_id("d");
    let created = sample_dispute(&new_id, "Unpaid invoice", DisputeStatus::Submitted);

    Mock::given(method("POST"))
        .and(path("/api/v1/disputes/create"))
        .and(body_json(wire(&req)))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(wire(&created))))
        .mount(&server)
        .await;

    let mut view = DisputeListView::new(DisputeScope::Citizen);
    view.apply_created(sample_dispute("d-old", "Older dispute", DisputeStatus::InProgress));

    let stored = client.create_dispute(&req).await.unwrap();
    view.apply_created(stored);

    assert_eq!(view.disputes.items[0].id, new_id);
    assert_eq!(view.disputes.items[1].id, "d-old");
}

#[tokio::test]
async fn accepting_an_assignment_uses_put_and_patches_in_place() {
    let (server, client) = test_client().await;
    let pending = sample_dispute("d1", "Unpaid invoice", DisputeStatus::UnderReview);

    let mut accepted = pending.clone();
    accepted.status = DisputeStatus::Assigned;
    accepted.assignment_status = AssignmentStatus::Accepted;

    Mock::given(method("PUT"))
        .and(path("/api/v1/disputes/d1/accept"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(wire(&accepted))))
        .expect(1)
        .mount(&server)
        .await;

    let mut view = DisputeListView::new(DisputeScope::Lawyer);
    view.apply_created(pending);

    let updated = client.accept_dispute("d1").await.unwrap();
    view.apply_updated(updated);

    assert_eq!(view.disputes.items[0].assignment_status, AssignmentStatus::Accepted);
    assert_eq!(view.disputes.items[0].status, DisputeStatus::Assigned);
}

#[tokio::test]
async fn withdrawn_dispute_leaves_the_active_list() {
    let (server, client) = test_client().await;
    let open = sample_dispute("d1", "Unpaid invoice", DisputeStatus::Submitted);

    let mut withdrawn = open.clone();
    withdrawn.status = DisputeStatus::Withdrawn;

    Mock::given(method("PUT"))
        .and(path("/api/v1/disputes/d1/withdraw"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(wire(&withdrawn))))
        .mount(&server)
        .await;

    let mut view = DisputeListView::new(DisputeScope::Citizen);
    view.apply_created(open);
    view.apply_created(sample_dispute("d2", "Other dispute", DisputeStatus::InProgress));

    let result = client.withdraw_dispute("d1").await.unwrap();
    assert_eq!(result.status, DisputeStatus::Withdrawn);
    view.apply_withdrawn(&result.id);

    assert_eq!(view.disputes.items.len(), 1);
    assert_eq!(view.disputes.items[0].id, "d2");
}

#[tokio::test]
async fn accepted_settlement_offer_comes_back_on_the_updated_dispute() {
    let (server, client) = test_client().await;

    let mut with_offer = sample_dispute("d1", "Unpaid invoice", DisputeStatus::SettlementPending);
    with_offer.settlement_offers.push(SettlementOffer {
        id: "offer-1".to_string(),
        offered_by: "p2".to_string(),
        amount: 2500.0,
        terms: "Full and final settlement".to_string(),
        status: OfferStatus::Pending,
        created_at: at(6, 11),
    });

    let mut settled = with_offer.clone();
    settled.settlement_offers[0].status = OfferStatus::Accepted;
    settled.status = DisputeStatus::Resolved;

    Mock::given(method("PUT"))
        .and(path("/api/v1/disputes/d1/settlement-offers/offer-1/accept"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(wire(&settled))))
        .mount(&server)
        .await;

    let mut view = DisputeListView::new(DisputeScope::Citizen);
    view.apply_created(with_offer);

    let updated = client.accept_settlement_offer("d1", "offer-1").await.unwrap();
    view.apply_updated(updated);

    assert_eq!(
        view.disputes.items[0].settlement_offers[0].status,
        OfferStatus::Accepted
    );
    assert_eq!(view.disputes.items[0].status, DisputeStatus::Resolved);
}

#[tokio::test]
async fn posting_a_message_returns_the_dispute_with_it_appended() {
    let (server, client) = test_client().await;
    let before = sample_dispute("d1", "Unpaid invoice", DisputeStatus::InProgress);

    let mut after = before.clone();
    after.messages.push(shared_types::DisputeMessage {
        id: "m1".to_string(),
        content: "Please confirm receipt".to_string(),
        sender: "u-test".to_string(),
        message_type: "text".to_string(),
        created_at: at(7, 15),
    });

    let req = PostMessageRequest {
        content: "Please confirm receipt".to_string(),
        message_type: "text".to_string(),
    };
    Mock::given(method("POST"))
        .and(path("/api/v1/disputes/d1/messages"))
        .and(body_json(wire(&req)))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(wire(&after))))
        .mount(&server)
        .await;

    let updated = client.post_dispute_message("d1", &req).await.unwrap();
    assert_eq!(updated.messages.len(), 1);
    assert_eq!(updated.messages[0].content, "Please confirm receipt");
}

#[tokio::test]
async fn settlement_offer_request_round_trip() {
    let (server, client) = test_client().await;
    let before = sample_dispute("d1", "Unpaid invoice", DisputeStatus::InProgress);

    let mut after = before.clone();
    after.status = DisputeStatus::SettlementPending;
    after.settlement_offers.push(SettlementOffer {
        id: "offer-9".to_string(),
        offered_by: "u-test".to_string(),
        amount: 1800.0,
        terms: "Paid in two installments".to_string(),
        status: OfferStatus::Pending,
        created_at: at(8, 10),
    });

    let req = SettlementOfferRequest {
        amount: 1800.0,
        terms: "Paid in two installments".to_string(),
    };
    Mock::given(method("POST"))
        .and(path("/api/v1/disputes/d1/settlement-offer"))
        .and(body_json(wire(&req)))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(wire(&after))))
        .mount(&server)
        .await;

    let updated = client.make_settlement_offer("d1", &req).await.unwrap();
    assert_eq!(updated.settlement_offers[0].id, "offer-9");
    assert_eq!(updated.status, DisputeStatus::SettlementPending);
}
