use std::collections::HashMap;
use std::fmt;

/// Error raised by the client when talking to the backend, or by local
/// pre-request validation. This is the full failure taxonomy: nothing else
/// crosses a view boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Transport-level failure: DNS, connection refused, timeout.
    Network(String),
    /// The server answered, but the body was not the JSON we expect.
    Protocol(String),
    /// Server-reported failure (non-2xx, or `success:false` in the envelope).
    RequestFailed { status: u16, message: String },
    /// Local pre-request check failed; the request was never sent.
    Validation {
        message: String,
        field_errors: HashMap<String, String>,
    },
}

impl ClientError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    pub fn request_failed(status: u16, message: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self::Validation {
            message: message.into(),
            field_errors,
        }
    }

    /// HTTP status for server-reported failures, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Message suitable for an error panel. Falls back to a generic line
    /// when the variant carries nothing a user can act on.
    pub fn friendly_message(&self) -> String {
        match self {
            Self::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            Self::Protocol(_) => "Something went wrong. Please try again.".to_string(),
            Self::RequestFailed { message, .. } => message.clone(),
            Self::Validation { message, .. } => message.clone(),
        }
    }

    /// Per-field validation errors, empty for every other variant.
    pub fn field_errors(&self) -> HashMap<String, String> {
        match self {
            Self::Validation { field_errors, .. } => field_errors.clone(),
            _ => HashMap::new(),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network: {}", msg),
            Self::Protocol(msg) => write!(f, "Protocol: {}", msg),
            Self::RequestFailed { status, message } => {
                write!(f, "RequestFailed({}): {}", status, message)
            }
            Self::Validation { message, .. } => write!(f, "Validation: {}", message),
        }
    }
}

impl std::error::Error for ClientError {}

/// Generic message for a server status when the error body carried none.
pub fn generic_status_message(status: u16) -> String {
    match status {
        400 => "The request was invalid.".to_string(),
        401 => "You need to sign in to do that.".to_string(),
        403 => "You do not have permission to do that.".to_string(),
        404 => "The requested record was not found.".to_string(),
        409 => "The record was changed by someone else. Reload and retry.".to_string(),
        500..=599 => "The server encountered an error. Try again later.".to_string(),
        _ => format!("Request failed with status {}.", status),
    }
}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        ClientError::validation("Validation failed", field_errors)
    }
}
