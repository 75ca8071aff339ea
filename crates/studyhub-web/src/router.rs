//! Axum router — maps all URL paths to handlers.

use axum::{
    response::Redirect,
    routing::get,
    Router,
};
use tower_http::{
    services::ServeDir,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    pages::{index, summaries, premium_tests, about, mathematics_hub},
    quiz::run_test,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_root);
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",              get(index))
        .route("/summaries",     get(summaries))
        .route("/premium-tests", get(premium_tests))
        .route("/about",         get(about))
        .route("/mathematics/",  get(mathematics_hub))
        .route("/mathematics",   get(|| async { Redirect::permanent("/mathematics/") }))

        // Quiz pages
        .route("/test/{test_id}", get(run_test))

        // Static files (css, js, quiz JSON)
        .nest_service("/static", static_files)

        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
