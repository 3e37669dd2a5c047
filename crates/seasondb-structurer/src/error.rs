use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StructurerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("extraction error: {0}")]
    Extraction(String),

    #[error("normalization error: {0}")]
    Normalization(String),

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
