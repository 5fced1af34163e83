use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SortError {
    #[error("failed to {op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to load code set from {path}: {reason}")]
    CodesLoad { path: PathBuf, reason: String },

    #[error("invalid code set: {0}")]
    CodesInvalid(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid upload: {0}")]
    InvalidUpload(String),

    #[error("access denied: missing or incorrect password")]
    AccessDenied,

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SortError {
    /// Wrap an I/O error with the operation and the file it concerned.
    pub fn io(op: &'static str, path: &Path, source: std::io::Error) -> Self {
        SortError::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}
