//! Structuring stage: turn the collected text blob into normalized season
//! records via one model completion.
//!
//! The model's free-form reply is reduced to its first JSON-shaped region,
//! parsed, and normalized field by field. Normalization either yields a fully
//! populated [`seasondb_core::SeasonRecord`] for every element or aborts the
//! batch — no partial or guessed records.

pub mod client;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod pipeline;
pub mod prompt;

pub use client::CompletionClient;
pub use error::StructurerError;
pub use extract::{extract_json, require_records};
pub use normalize::{normalize_record, normalize_records};
pub use pipeline::{run_structurer, write_structured};
pub use prompt::build_prompt;
