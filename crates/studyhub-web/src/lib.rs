//! studyhub-web — Web front-end for StudyHub
//! Serves the study pages:
//!   - Home page with the subject summary cards
//!   - Subject summaries, premium tests, about
//!   - Mathematics hub
//!   - Generic quiz page driven by a test id → quiz JSON lookup

pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;
pub mod summary;
pub mod telemetry;
