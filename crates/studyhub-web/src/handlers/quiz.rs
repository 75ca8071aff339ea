//! Generic quiz page.
//!
//! `/test/{test_id}` looks the id up in the test catalog and hands the quiz
//! JSON path to `test_template.html`; the browser fetches and renders the quiz.

use axum::{extract::{Path, State}, response::Html};
use minijinja::context;
use tracing::debug;
use crate::error::AppError;
use crate::state::SharedState;

pub async fn run_test(
    State(state): State<SharedState>,
    Path(test_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let json_file = state.catalog.resolve(&test_id)?;
    debug!(%test_id, %json_file, "resolved quiz data");

    let html = state.templates.render(
        "test_template.html",
        context! { json_file_path => json_file, test_id => &test_id },
    )?;
    Ok(Html(html))
}
