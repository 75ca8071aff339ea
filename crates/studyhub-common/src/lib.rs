//! studyhub-common — Shared error type and HTML fragment wrapper used across StudyHub crates.

pub mod error;
pub mod html;

pub use error::{Result, StudyhubError};
pub use html::TrustedHtml;
