//! Export error taxonomy

use thiserror::Error;

/// Errors surfaced by a scene export.
///
/// Parts whose geometry cannot be resolved are not errors; they are
/// skipped during traversal. Inconsistencies between recorded accessors
/// and the byte store indicate encoder bugs and are asserted in debug
/// builds rather than reported here. Nothing is retried.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The scene holds no visible part with polygonal geometry.
    #[error("no visible geometry to export")]
    EmptyScene,

    /// The document could not be serialized to JSON.
    #[error("failed to serialize glTF document")]
    Json(#[from] serde_json::Error),

    /// The destination could not be written.
    #[error("failed to write export output")]
    Io(#[from] std::io::Error),
}
