//! Template rendering on top of minijinja.
//!
//! Templates are loaded from a directory on disk. `.html` templates are
//! auto-escaped; only [`studyhub_common::TrustedHtml`] values bypass escaping.

use minijinja::{path_loader, Environment, Value};
use std::path::{Path, PathBuf};
use studyhub_common::Result;

pub struct Templates {
    env: Environment<'static>,
    root: PathBuf,
    /// Re-read templates from disk on every render (development mode).
    reload: bool,
}

impl Templates {
    pub fn new(root: impl Into<PathBuf>, reload: bool) -> Self {
        let root = root.into();
        let env = build_environment(&root, reload);
        Self { env, root, reload }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn render(&self, name: &str, ctx: Value) -> Result<String> {
        if self.reload {
            let env = build_environment(&self.root, true);
            return Ok(env.get_template(name)?.render(ctx)?);
        }
        Ok(self.env.get_template(name)?.render(ctx)?)
    }
}

fn build_environment(root: &Path, debug: bool) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(path_loader(root));
    env.set_debug(debug);
    env.add_function("static_url", static_url);
    env
}

/// `{{ static_url("css/main.css") }}` → `/static/css/main.css`
///
/// Arguments come from templates and the test catalog, both operator-controlled,
/// so the URL is emitted unescaped.
fn static_url(path: &str) -> Value {
    Value::from_safe_string(format!("/static/{}", path.trim_start_matches('/')))
}
