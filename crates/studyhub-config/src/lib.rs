//! studyhub-config — Configuration loading for StudyHub.
//! Reads studyhub.toml from the current directory or the path in STUDYHUB_CONFIG,
//! then applies STUDYHUB_* environment overrides.

pub mod catalog;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use catalog::TestCatalog;

const DEFAULT_CONFIG_FILE: &str = "studyhub.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    /// Test id → quiz JSON path, relative to the static root.
    #[serde(default)]
    pub tests: TestCatalog,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Development mode: template auto-reload and verbose diagnostics.
    #[serde(default)]
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), debug: false }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 5000 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_templates")]
    pub templates: PathBuf,
    #[serde(rename = "static", default = "default_static")]
    pub static_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self { templates: default_templates(), static_dir: default_static() }
    }
}

fn default_templates() -> PathBuf { PathBuf::from("templates") }
fn default_static()    -> PathBuf { PathBuf::from("static") }


impl Config {
    /// Load configuration from studyhub.toml.
    ///
    /// An explicit STUDYHUB_CONFIG path must exist; a missing default file
    /// falls back to built-in defaults. Environment overrides apply either way.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// [`Config::load`] with an arbitrary key lookup in place of the process environment.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE), lookup)
    }

    fn load_from(
        default_path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let explicit = lookup("STUDYHUB_CONFIG").map(PathBuf::from);
        let path = explicit.as_deref().unwrap_or(default_path);

        let mut config = if path.exists() {
            Self::from_file(path)?
        } else if explicit.is_some() {
            anyhow::bail!(
                "Config file not found: {}\n\
                 Unset STUDYHUB_CONFIG or point it at an existing studyhub.toml.",
                path.display()
            );
        } else {
            tracing::debug!("{} not found, using built-in defaults", path.display());
            Self::default()
        };

        config.apply_overrides(&lookup);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("STUDYHUB_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("STUDYHUB_PORT") {
            match port.trim().parse::<u16>() {
                Ok(p) => self.server.port = p,
                Err(e) => tracing::warn!("Ignoring invalid STUDYHUB_PORT {:?}: {}", port, e),
            }
        }
        if let Some(debug) = lookup("STUDYHUB_DEBUG") {
            self.server.debug = is_truthy(&debug);
        }
        if let Some(dir) = lookup("STUDYHUB_TEMPLATES") {
            self.paths.templates = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("STUDYHUB_STATIC") {
            self.paths.static_dir = PathBuf::from(dir);
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
