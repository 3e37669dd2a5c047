//! Persistence of the raw text blob.

use std::fs;
use std::path::{Path, PathBuf};

use crate::client::PageClient;
use crate::error::CollectorError;
use crate::text::visible_text;

/// Writes `text` to `path`, creating parent directories as needed.
///
/// Any prior blob at that location is overwritten; there is no append and no
/// versioning.
///
/// # Errors
///
/// Returns [`CollectorError::Io`] if the directory or file cannot be written.
pub fn write_blob(path: &Path, text: &str) -> Result<(), CollectorError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CollectorError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }
    fs::write(path, text).map_err(|e| CollectorError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Runs the full collection stage: fetch `url`, extract visible text, persist
/// the blob at `out_path`. Returns the blob's location.
///
/// # Errors
///
/// Propagates [`CollectorError`] from the fetch or the write.
pub async fn collect(
    client: &PageClient,
    url: &str,
    out_path: &Path,
) -> Result<PathBuf, CollectorError> {
    let html = client.fetch_page(url).await?;
    let text = visible_text(&html);
    write_blob(out_path, &text)?;
    tracing::info!(
        url,
        bytes = text.len(),
        path = %out_path.display(),
        "wrote raw blob"
    );
    Ok(out_path.to_path_buf())
}
