use reqwest::Method;
use shared_types::{AssignCaseRequest, AssignmentAction, Case, ClientError, UpdateCaseRequest};

use crate::http::ApiClient;

impl ApiClient {
    pub async fn list_cases(&self) -> Result<Vec<Case>, ClientError> {
        self.get_list("/api/v1/cases").await
    }

    pub async fn get_case(&self, id: &str) -> Result<Case, ClientError> {
        self.get_one(&format!("/api/v1/cases/{}", id)).await
    }

    /// Partial update; the server returns the full updated case.
    pub async fn update_case(
        &self,
        id: &str,
        req: &UpdateCaseRequest,
    ) -> Result<Case, ClientError> {
        self.send_json(Method::PUT, &format!("/api/v1/cases/{}", id), req)
            .await
    }

    /// Lawyer accepts or rejects an assignment. The server owns the status
    /// transition; the returned case carries whatever it decided.
    pub async fn assign_case(
        &self,
        id: &str,
        action: AssignmentAction,
    ) -> Result<Case, ClientError> {
        self.send_json(
            Method::PUT,
            &format!("/api/v1/cases/{}/assign", id),
            &AssignCaseRequest { action },
        )
        .await
    }
}
