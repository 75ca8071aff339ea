//! Shared application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;
use studyhub_config::{Config, TestCatalog};

use crate::render::Templates;

/// Shared state injected into every Axum handler. Read-only after startup.
pub struct AppState {
    pub templates: Templates,
    pub catalog: TestCatalog,
    pub static_root: PathBuf,
}

impl AppState {
    pub fn new(
        templates_root: impl Into<PathBuf>,
        static_root: impl Into<PathBuf>,
        catalog: TestCatalog,
        reload_templates: bool,
    ) -> Self {
        Self {
            templates: Templates::new(templates_root, reload_templates),
            catalog,
            static_root: static_root.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.paths.templates.clone(),
            config.paths.static_dir.clone(),
            config.tests.clone(),
            config.server.debug,
        )
    }
}

pub type SharedState = Arc<AppState>;
