use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{generic_status_message, ApiEnvelope, ClientError};

use crate::config::ClientConfig;
use crate::session::SessionStore;

/// Authenticated HTTP core. One instance per process, cheap to clone; all
/// per-resource endpoint wrappers are `impl ApiClient` blocks in sibling
/// modules.
///
/// Every call attaches `Authorization: Bearer <token>` when a session is
/// present, speaks the `{success, data, message}` envelope, and maps
/// failures onto the `ClientError` taxonomy. No retries, no caching.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: SessionStore) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::network(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send the built request and decode the envelope. The single place the
    /// error taxonomy is produced:
    /// transport failure -> Network; non-2xx -> RequestFailed with the
    /// body's message when parseable; malformed 2xx body -> Protocol;
    /// `success:false` inside a 2xx -> RequestFailed.
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<ApiEnvelope<T>, ClientError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::network(e.to_string()))?;

        if !(200..300).contains(&status) {
            let message = extract_error_message(&body, status);
            tracing::debug!(status, %message, "request failed");
            return Err(ClientError::request_failed(status, message));
        }

        let envelope: ApiEnvelope<T> = serde_json::from_str(&body)
            .map_err(|e| ClientError::protocol(format!("malformed response body: {}", e)))?;

        if !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| generic_status_message(status));
            return Err(ClientError::request_failed(status, message));
        }

        Ok(envelope)
    }

    /// GET a collection endpoint. An absent `data` field is an empty list,
    /// never an error.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, ClientError> {
        let builder = self.authorize(self.http.get(self.url(path)));
        let envelope: ApiEnvelope<Vec<T>> = self.execute(builder).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// GET a single-record endpoint. A 2xx without `data` is a protocol
    /// violation.
    pub(crate) async fn get_one<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let builder = self.authorize(self.http.get(self.url(path)));
        let envelope: ApiEnvelope<T> = self.execute(builder).await?;
        envelope
            .data
            .ok_or_else(|| ClientError::protocol("response missing data field"))
    }

    /// Send a JSON-bodied mutation. Mutating responses are required to
    /// carry the resulting record (the reconciler patches it in place), so
    /// a 2xx without `data` is a protocol violation.
    pub(crate) async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let builder = self
            .authorize(self.http.request(method, self.url(path)))
            .json(body);
        let envelope: ApiEnvelope<T> = self.execute(builder).await?;
        envelope
            .data
            .ok_or_else(|| ClientError::protocol("mutation response missing updated record"))
    }

    /// Send a body-less mutation (accept/decline/withdraw/finalize paths).
    /// The response must still carry the resulting record.
    pub(crate) async fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T, ClientError> {
        let builder = self.authorize(self.http.request(method, self.url(path)));
        let envelope: ApiEnvelope<T> = self.execute(builder).await?;
        envelope
            .data
            .ok_or_else(|| ClientError::protocol("mutation response missing updated record"))
    }

    /// DELETE; success needs no returned record.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let builder = self.authorize(self.http.delete(self.url(path)));
        let _: ApiEnvelope<serde_json::Value> = self.execute(builder).await?;
        Ok(())
    }

    /// POST a multipart form (document upload). The response carries the
    /// stored record.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ClientError> {
        let builder = self
            .authorize(self.http.post(self.url(path)))
            .multipart(form);
        let envelope: ApiEnvelope<T> = self.execute(builder).await?;
        envelope
            .data
            .ok_or_else(|| ClientError::protocol("upload response missing stored record"))
    }

    /// POST without authentication (login/register).
    pub(crate) async fn post_public<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let builder = self.http.post(self.url(path)).json(body);
        let envelope: ApiEnvelope<T> = self.execute(builder).await?;
        envelope
            .data
            .ok_or_else(|| ClientError::protocol("response missing data field"))
    }
}

/// Pull the server's message out of a non-2xx body when it is the standard
/// envelope; otherwise fall back to a generic status-based message.
fn extract_error_message(body: &str, status: u16) -> String {
    match serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body) {
        Ok(envelope) => envelope
            .message
            .unwrap_or_else(|| generic_status_message(status)),
        Err(_) => generic_status_message(status),
    }
}
