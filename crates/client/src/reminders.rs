use reqwest::Method;
use shared_types::{ClientError, CreateReminderRequest, Reminder, UpdateReminderRequest};
use validator::Validate;

use crate::http::ApiClient;

impl ApiClient {
    pub async fn list_reminders(&self) -> Result<Vec<Reminder>, ClientError> {
        self.get_list("/api/v1/reminders").await
    }

    pub async fn create_reminder(
        &self,
        req: &CreateReminderRequest,
    ) -> Result<Reminder, ClientError> {
        req.validate()?;
        self.send_json(Method::POST, "/api/v1/reminders", req).await
    }

    /// Partial update (including completion toggles); the server returns
    /// the full updated reminder.
    pub async fn update_reminder(
        &self,
        id: &str,
        req: &UpdateReminderRequest,
    ) -> Result<Reminder, ClientError> {
        self.send_json(Method::PUT, &format!("/api/v1/reminders/{}", id), req)
            .await
    }

    pub async fn delete_reminder(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/api/v1/reminders/{}", id)).await
    }
}
