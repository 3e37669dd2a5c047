//! Hosted-table access over Supabase's PostgREST API.
//!
//! The loader performs a single upsert keyed on `season`; the dashboard
//! reads the same table back. Rows are created or overwritten, never
//! deleted, and the store maintains `updated_at` on every write.

pub mod client;
pub mod error;
pub mod loader;
pub mod types;

pub use client::SupabaseClient;
pub use error::StoreError;
pub use loader::{load_artifact, read_artifact, schema_hint};
pub use types::SeasonRow;
