use std::collections::HashMap;

use shared_types::{ClientError, Document, DownloadLink, UploadDocumentRequest};

use crate::http::ApiClient;

impl ApiClient {
    /// The signed-in user's document vault.
    pub async fn list_documents(&self) -> Result<Vec<Document>, ClientError> {
        self.get_list("/api/v1/documents").await
    }

    /// Lawyer view: documents shared by all of the lawyer's clients.
    pub async fn list_client_documents(&self) -> Result<Vec<Document>, ClientError> {
        self.get_list("/api/v1/documents/clients/all").await
    }

    /// Upload file bytes plus metadata as multipart form data. Returns the
    /// stored record.
    #[tracing::instrument(skip(self, req, bytes), fields(file = %file_name, size = bytes.len()))]
    pub async fn upload_document(
        &self,
        req: &UploadDocumentRequest,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<Document, ClientError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|_| {
                let mut fields = HashMap::new();
                fields.insert(
                    "fileType".to_string(),
                    format!("Unrecognized content type: {}", content_type),
                );
                ClientError::validation("Invalid file type", fields)
            })?;

        let mut form = reqwest::multipart::Form::new()
            .text("title", req.title.clone())
            .text("description", req.description.clone())
            .text("category", req.category.as_str().to_string())
            .text("tags", req.tags.join(","))
            .part("file", part);
        if let Some(case_id) = &req.case_id {
            form = form.text("caseId", case_id.clone());
        }

        self.post_multipart("/api/v1/documents", form).await
    }

    pub async fn delete_document(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/api/v1/documents/{}", id)).await
    }

    /// Short-lived download URL for a stored document. The bytes themselves
    /// come from the file store, not from this API.
    pub async fn document_download_link(&self, id: &str) -> Result<DownloadLink, ClientError> {
        self.get_one(&format!("/api/v1/documents/{}/download", id))
            .await
    }
}
