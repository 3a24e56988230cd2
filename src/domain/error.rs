// src/domain/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Malformed record {file}: {reason}")]
    MalformedRecord { file: String, reason: String },
    #[error("Attachment upload failed for {path}: {reason}")]
    AttachmentUploadFailed { path: String, reason: String },
    #[error("Error {status}: {body}")]
    SubmissionFailed { status: u16, body: String },
    #[error("Request error: {0}")]
    Transport(String),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}
