//! Fixed pages: each route renders one template.

use axum::{extract::State, response::Html};
use minijinja::context;
use crate::error::AppError;
use crate::state::SharedState;
use crate::summary::summary_cards_or_error;

/// Home page. The only page that does work beyond rendering: it embeds the
/// summary cards taken from `summaries.html`.
pub async fn index(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let cards = summary_cards_or_error(state.templates.root());
    let html = state.templates.render(
        "index.html",
        context! { summaries_cards_html => minijinja::Value::from(cards) },
    )?;
    Ok(Html(html))
}

pub async fn summaries(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    render_page(&state, "summaries.html")
}

pub async fn premium_tests(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    render_page(&state, "premium_tests.html")
}

pub async fn about(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    render_page(&state, "about.html")
}

pub async fn mathematics_hub(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    render_page(&state, "mathematics_hub.html")
}

fn render_page(state: &SharedState, name: &str) -> Result<Html<String>, AppError> {
    Ok(Html(state.templates.render(name, context! {})?))
}
