pub mod config;
pub mod http;
pub mod session;

// Per-resource endpoint wrappers (all methods live on ApiClient)
mod auth;
mod cases;
mod disputes;
mod documents;
mod reminders;
mod reports;

pub use config::ClientConfig;
pub use http::ApiClient;
pub use session::SessionStore;
