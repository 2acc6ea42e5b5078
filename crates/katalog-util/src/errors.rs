use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all katalog operations.
#[derive(Debug, Error, Diagnostic)]
pub enum KatalogError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed version catalog document.
    #[error("Catalog error: {message}")]
    #[diagnostic(help("Check the generated libs.versions.toml for syntax errors"))]
    Catalog { message: String },

    /// Invalid run configuration.
    #[error("Config error: {message}")]
    Config { message: String },
}
