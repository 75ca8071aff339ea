use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudyhubError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Test not found: {0}")]
    TestNotFound(String),
}

pub type Result<T> = std::result::Result<T, StudyhubError>;
