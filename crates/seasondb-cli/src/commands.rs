//! The pipeline stages as CLI commands. Each stage is independently runnable
//! and idempotent against its own artifact or table; `run` chains all three.

use chrono::Utc;

use seasondb_collector::PageClient;
use seasondb_core::AppConfig;
use seasondb_store::SupabaseClient;
use seasondb_structurer::CompletionClient;

/// Fetch the source page and persist the visible-text blob.
pub async fn collect(config: &AppConfig) -> anyhow::Result<()> {
    let collector = config.collector()?;
    let client = PageClient::new(collector.fetch_timeout_secs, &collector.user_agent)?;

    let path =
        seasondb_collector::collect(&client, &collector.source_url, &collector.raw_blob_path)
            .await?;

    println!(
        "Saved blob to {} from {}",
        path.display(),
        collector.source_url
    );
    Ok(())
}

/// Run the model over the blob and persist the structured artifact.
pub async fn structure(config: &AppConfig) -> anyhow::Result<()> {
    let structurer = config.structurer()?;
    let client = CompletionClient::with_base_url(
        &structurer.api_key,
        &structurer.model,
        &structurer.base_url,
    )?;

    let records = seasondb_structurer::run_structurer(
        &client,
        &structurer.raw_blob_path,
        &structurer.source_url,
        Utc::now(),
        structurer.prompt_max_chars,
        &structurer.structured_path,
    )
    .await?;

    println!(
        "Wrote {} with {} records.",
        structurer.structured_path.display(),
        records.len()
    );
    Ok(())
}

/// Upsert the structured artifact into the hosted table.
pub async fn load(config: &AppConfig) -> anyhow::Result<()> {
    let store = config.store()?;
    let client = SupabaseClient::from_config(&store)?;

    let count =
        seasondb_store::load_artifact(&client, &store.table_name, &config.structured_path).await?;

    if count == 0 {
        println!("No records to upsert.");
    } else {
        println!("Upserted {count} rows into {}.", store.table_name);
    }
    Ok(())
}

/// The full pipeline: collect → structure → load, strictly in sequence.
pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    collect(config).await?;
    structure(config).await?;
    load(config).await
}
