//! Load stage: structured artifact in, upserted rows out.

use std::fs;
use std::path::Path;

use seasondb_core::StructuredArtifact;

use crate::client::SupabaseClient;
use crate::error::StoreError;

/// Reads and parses the structured artifact at `path`.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the file cannot be read or
/// [`StoreError::Deserialize`] if it is not a valid artifact.
pub fn read_artifact(path: &Path) -> Result<StructuredArtifact, StoreError> {
    let raw = fs::read_to_string(path).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&raw).map_err(|e| StoreError::Deserialize {
        context: format!("structured artifact at {}", path.display()),
        source: e,
    })
}

/// Upserts every record in the artifact at `path` into `table`.
///
/// An empty record collection is a logged no-op, not an error: zero requests
/// are made and 0 is returned. Otherwise the advisory schema hint is logged
/// and the whole set goes up in one upsert. Returns the written row count.
///
/// # Errors
///
/// Propagates [`StoreError`] from the artifact read or the upsert.
pub async fn load_artifact(
    client: &SupabaseClient,
    table: &str,
    path: &Path,
) -> Result<usize, StoreError> {
    let artifact = read_artifact(path)?;

    if artifact.records.is_empty() {
        tracing::info!(table, path = %path.display(), "no records to upsert");
        return Ok(0);
    }

    tracing::info!(
        table,
        "if the table is missing, create it with:\n{}",
        schema_hint(table)
    );

    let rows = client.upsert_seasons(table, &artifact.records).await?;
    tracing::info!(table, rows = rows.len(), "upserted season records");
    Ok(rows.len())
}

/// DDL for the expected table shape, for operators bootstrapping a project.
/// Advisory only — nothing in the load path enforces it; a genuinely missing
/// table surfaces as a store-side error from the upsert itself.
#[must_use]
pub fn schema_hint(table: &str) -> String {
    format!(
        "create table if not exists {table} (
  season int primary key,
  team text not null,
  wins int not null,
  losses int not null,
  ties int not null,
  points_for int not null,
  points_against int not null,
  division_place text,
  coach text,
  playoffs text,
  source_url text,
  extracted_at timestamptz not null,
  updated_at timestamptz not null default now()
);"
    )
}
