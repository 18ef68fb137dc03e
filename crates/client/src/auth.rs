use std::collections::HashMap;

use shared_types::{AuthResponse, AuthUser, ClientError, LoginRequest, RegisterRequest, Session};
use validator::Validate;

use crate::http::ApiClient;

impl ApiClient {
    /// Sign in. On success the session store is populated (subscribers are
    /// notified) and the signed-in user is returned.
    #[tracing::instrument(skip(self, req), fields(email = %req.email))]
    pub async fn login(&self, req: &LoginRequest) -> Result<AuthUser, ClientError> {
        req.validate()?;
        let resp: AuthResponse = self.post_public("/api/v1/auth/login", req).await?;
        let user = resp.user.clone();
        self.session().set(Session::from_auth(resp));
        Ok(user)
    }

    /// Create an account and sign in. The password/confirm match is checked
    /// here, before anything touches the network.
    #[tracing::instrument(skip(self, req), fields(email = %req.email))]
    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthUser, ClientError> {
        req.validate()?;
        if req.password != req.confirm_password {
            let mut fields = HashMap::new();
            fields.insert(
                "confirmPassword".to_string(),
                "Passwords do not match".to_string(),
            );
            return Err(ClientError::validation("Passwords do not match", fields));
        }
        let resp: AuthResponse = self.post_public("/api/v1/auth/register", req).await?;
        let user = resp.user.clone();
        self.session().set(Session::from_auth(resp));
        Ok(user)
    }

    /// Sign out. Purely client-side: the token is discarded and subscribers
    /// are notified.
    pub fn logout(&self) {
        self.session().clear();
    }
}
