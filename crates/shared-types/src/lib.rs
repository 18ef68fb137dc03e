pub mod error;

// Auth/session types
pub mod models;

// LexAid domain modules (canonical locations for all legal-services types)
pub mod calendar;
pub mod case;
pub mod common;
pub mod dispute;
pub mod document;
pub mod reminder;
pub mod report;

pub use error::*;
pub use models::*;

// Re-export all domain types
pub use calendar::*;
pub use case::*;
pub use common::*;
pub use dispute::*;
pub use document::*;
pub use reminder::*;
pub use report::*;
