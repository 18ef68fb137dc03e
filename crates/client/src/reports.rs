use reqwest::Method;
use shared_types::{ClientError, CreateReportRequest, Report};
use validator::Validate;

use crate::http::ApiClient;

impl ApiClient {
    /// Reports authored by the signed-in lawyer.
    pub async fn list_reports(&self) -> Result<Vec<Report>, ClientError> {
        self.get_list("/api/v1/reports").await
    }

    /// Citizen view: finalized reports shared with the signed-in client.
    pub async fn list_shared_reports(&self) -> Result<Vec<Report>, ClientError> {
        self.get_list("/api/v1/reports/shared/all").await
    }

    pub async fn create_report(&self, req: &CreateReportRequest) -> Result<Report, ClientError> {
        req.validate()?;
        self.send_json(Method::POST, "/api/v1/reports", req).await
    }

    /// Mark a draft final. Finalized reports become read-only and visible
    /// to the client; the server returns the updated report.
    pub async fn finalize_report(&self, id: &str) -> Result<Report, ClientError> {
        self.send_empty(Method::PATCH, &format!("/api/v1/reports/{}/finalize", id))
            .await
    }

    pub async fn delete_report(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/api/v1/reports/{}", id)).await
    }
}
