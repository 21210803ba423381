//! Error types for the SVG export crate.

use thiserror::Error;

/// Errors that can occur while serializing or writing one icon.
///
/// An export error never aborts a batch; the orchestration layer records
/// it as a per-icon failure and continues.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Filesystem write failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// XML assembly failed.
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The icon's data cannot be expressed as a document.
    #[error("invalid icon data: {0}")]
    InvalidIcon(String),
}
