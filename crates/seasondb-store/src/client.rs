//! HTTP client for the Supabase PostgREST endpoint.

use std::time::Duration;

use reqwest::{Client, Url};

use seasondb_core::{SeasonRecord, StoreConfig};

use crate::error::StoreError;
use crate::types::SeasonRow;

/// Client for the `/rest/v1` table API of a Supabase project.
///
/// Sends the project key as both `apikey` and bearer token, the way
/// Supabase's own clients do. Use [`SupabaseClient::new`] with a project URL,
/// or point it at a wiremock server in tests. Store calls carry only a
/// connect timeout.
pub struct SupabaseClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl SupabaseClient {
    /// Creates a client for the given project URL and key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StoreError::InvalidUrl`] if `base_url`
    /// does not parse.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, StoreError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends to the path rather than replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| StoreError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_owned(),
        })
    }

    /// Creates a client from the store config value object.
    ///
    /// # Errors
    ///
    /// Same as [`SupabaseClient::new`].
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        Self::new(&config.base_url, &config.api_key)
    }

    /// Upserts all `records` into `table` in a single request, conflicting on
    /// `season`: matching rows are overwritten in place, new seasons insert.
    /// Returns the representation of the written rows.
    ///
    /// # Errors
    ///
    /// - [`StoreError::UnexpectedStatus`] — store-side rejection (missing
    ///   table, schema mismatch), with the response body.
    /// - [`StoreError::Http`] — network failure.
    /// - [`StoreError::Deserialize`] — unexpected response shape.
    pub async fn upsert_seasons(
        &self,
        table: &str,
        records: &[SeasonRecord],
    ) -> Result<Vec<SeasonRow>, StoreError> {
        let mut url = self.table_url(table)?;
        url.query_pairs_mut().append_pair("on_conflict", "season");

        let response = self
            .client
            .post(url.clone())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(
                "Prefer",
                "resolution=merge-duplicates,return=representation",
            )
            .json(records)
            .send()
            .await?;

        let body = Self::check_status(url, response).await?;
        serde_json::from_str(&body).map_err(|e| StoreError::Deserialize {
            context: format!("upsert representation from {table}"),
            source: e,
        })
    }

    /// Reads up to `limit` rows from `table`, most recent season first.
    ///
    /// # Errors
    ///
    /// - [`StoreError::UnexpectedStatus`] — store-side rejection, with body.
    /// - [`StoreError::Http`] — network failure.
    /// - [`StoreError::Deserialize`] — unexpected response shape.
    pub async fn select_seasons(
        &self,
        table: &str,
        limit: u32,
    ) -> Result<Vec<SeasonRow>, StoreError> {
        let mut url = self.table_url(table)?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", "season.desc")
            .append_pair("limit", &limit.to_string());

        let response = self
            .client
            .get(url.clone())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let body = Self::check_status(url, response).await?;
        serde_json::from_str(&body).map_err(|e| StoreError::Deserialize {
            context: format!("season rows from {table}"),
            source: e,
        })
    }

    fn table_url(&self, table: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(&format!("rest/v1/{table}"))
            .map_err(|e| StoreError::InvalidUrl {
                url: format!("{}rest/v1/{table}", self.base_url),
                reason: e.to_string(),
            })
    }

    async fn check_status(url: Url, response: reqwest::Response) -> Result<String, StoreError> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }
        Ok(body)
    }
}
