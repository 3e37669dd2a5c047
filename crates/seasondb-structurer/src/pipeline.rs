//! End-to-end structuring: blob in, structured artifact out.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use seasondb_core::{SeasonRecord, StructuredArtifact};

use crate::client::CompletionClient;
use crate::error::StructurerError;
use crate::extract::{extract_json, require_records};
use crate::normalize::normalize_records;
use crate::prompt::build_prompt;

/// Runs the full structuring stage.
///
/// Reads the blob at `blob_path`, sends one completion, extracts and
/// normalizes the reply, persists `{"records": [...]}` at `out_path`, and
/// returns the records. `now` is the structuring-time instant used for any
/// record the model left without a usable `extracted_at`; callers inject it
/// so tests stay deterministic.
///
/// # Errors
///
/// Propagates [`StructurerError`] from any step; nothing is written when a
/// step fails.
pub async fn run_structurer(
    client: &CompletionClient,
    blob_path: &Path,
    source_url: &str,
    now: DateTime<Utc>,
    max_prompt_chars: usize,
    out_path: &Path,
) -> Result<Vec<SeasonRecord>, StructurerError> {
    let blob = fs::read_to_string(blob_path).map_err(|e| StructurerError::Io {
        path: blob_path.to_path_buf(),
        source: e,
    })?;

    let prompt = build_prompt(&blob, max_prompt_chars);
    let raw = client.complete(&prompt).await?;

    let items = require_records(extract_json(&raw)?)?;
    let records = normalize_records(&items, source_url, now)?;

    let artifact = StructuredArtifact { records };
    write_structured(out_path, &artifact)?;
    tracing::info!(
        records = artifact.records.len(),
        path = %out_path.display(),
        "wrote structured artifact"
    );

    Ok(artifact.records)
}

/// Persists the structured artifact, creating parent directories as needed.
/// The file is replaced wholesale.
///
/// # Errors
///
/// Returns [`StructurerError::Io`] if the directory or file cannot be
/// written.
pub fn write_structured(
    path: &Path,
    artifact: &StructuredArtifact,
) -> Result<(), StructurerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StructurerError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    let json = serde_json::to_string_pretty(artifact)
        .map_err(|e| StructurerError::Extraction(format!("artifact serialization failed: {e}")))?;

    fs::write(path, json).map_err(|e| StructurerError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
