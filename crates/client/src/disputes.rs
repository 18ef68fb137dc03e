use reqwest::Method;
use shared_types::{
    Case, ClientError, CreateDisputeRequest, Dispute, DisputeStatus, PostMessageRequest,
    SettlementOfferRequest, UpdateDisputeStatusRequest,
};
use validator::Validate;

use crate::http::ApiClient;

// Accept/decline/withdraw/status all go over PUT. Some callers of the
// original system used POST for the same actions; the canonical contract
// is PUT and that is what we speak everywhere.

impl ApiClient {
    /// Disputes visible to the signed-in citizen.
    pub async fn list_disputes(&self) -> Result<Vec<Dispute>, ClientError> {
        self.get_list("/api/v1/disputes").await
    }

    /// Disputes assigned to (or pending acceptance by) the signed-in lawyer.
    pub async fn list_lawyer_disputes(&self) -> Result<Vec<Dispute>, ClientError> {
        self.get_list("/api/v1/disputes/lawyer").await
    }

    pub async fn get_dispute(&self, id: &str) -> Result<Dispute, ClientError> {
        self.get_one(&format!("/api/v1/disputes/{}", id)).await
    }

    #[tracing::instrument(skip(self, req), fields(title = %req.title))]
    pub async fn create_dispute(&self, req: &CreateDisputeRequest) -> Result<Dispute, ClientError> {
        req.validate()?;
        self.send_json(Method::POST, "/api/v1/disputes/create", req)
            .await
    }

    pub async fn accept_dispute(&self, id: &str) -> Result<Dispute, ClientError> {
        self.send_empty(Method::PUT, &format!("/api/v1/disputes/{}/accept", id))
            .await
    }

    pub async fn decline_dispute(&self, id: &str) -> Result<Dispute, ClientError> {
        self.send_empty(Method::PUT, &format!("/api/v1/disputes/{}/decline", id))
            .await
    }

    pub async fn withdraw_dispute(&self, id: &str) -> Result<Dispute, ClientError> {
        self.send_empty(Method::PUT, &format!("/api/v1/disputes/{}/withdraw", id))
            .await
    }

    pub async fn update_dispute_status(
        &self,
        id: &str,
        status: DisputeStatus,
    ) -> Result<Dispute, ClientError> {
        self.send_json(
            Method::PUT,
            &format!("/api/v1/disputes/{}/status", id),
            &UpdateDisputeStatusRequest { status },
        )
        .await
    }

    /// Post a message to the dispute thread; returns the dispute with the
    /// message appended.
    pub async fn post_dispute_message(
        &self,
        id: &str,
        req: &PostMessageRequest,
    ) -> Result<Dispute, ClientError> {
        self.send_json(Method::POST, &format!("/api/v1/disputes/{}/messages", id), req)
            .await
    }

    /// Make a settlement offer; returns the dispute with the offer recorded.
    pub async fn make_settlement_offer(
        &self,
        id: &str,
        req: &SettlementOfferRequest,
    ) -> Result<Dispute, ClientError> {
        self.send_json(
            Method::POST,
            &format!("/api/v1/disputes/{}/settlement-offer", id),
            req,
        )
        .await
    }

    /// Escalate a dispute into a formal case. Returns the newly created
    /// case; the dispute's `related_case_id` is set server-side.
    pub async fn create_case_from_dispute(&self, id: &str) -> Result<Case, ClientError> {
        self.send_empty(Method::POST, &format!("/api/v1/disputes/{}/create-case", id))
            .await
    }

    pub async fn accept_settlement_offer(
        &self,
        dispute_id: &str,
        offer_id: &str,
    ) -> Result<Dispute, ClientError> {
        self.send_empty(
            Method::PUT,
            &format!(
                "/api/v1/disputes/{}/settlement-offers/{}/accept",
                dispute_id, offer_id
            ),
        )
        .await
    }

    pub async fn reject_settlement_offer(
        &self,
        dispute_id: &str,
        offer_id: &str,
    ) -> Result<Dispute, ClientError> {
        self.send_empty(
            Method::PUT,
            &format!(
                "/api/v1/disputes/{}/settlement-offers/{}/reject",
                dispute_id, offer_id
            ),
        )
        .await
    }
}
