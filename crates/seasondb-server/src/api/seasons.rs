use axum::{extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use seasondb_store::SeasonRow;

use crate::middleware::RequestId;

use super::{map_store_error, ApiError, ApiResponse, AppState, ResponseMeta};

/// One season as presented by the dashboard: the stored fields with read-side
/// defaults applied, plus the derived `games` and `win_pct` metrics.
#[derive(Debug, Serialize)]
pub(super) struct SeasonSummary {
    season: i32,
    team: String,
    wins: i32,
    losses: i32,
    ties: i32,
    points_for: i32,
    points_against: i32,
    games: i32,
    win_pct: f64,
    division_place: String,
    coach: String,
    playoffs: String,
    source_url: Option<String>,
    extracted_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

pub(super) async fn list_seasons(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<SeasonSummary>>>, ApiError> {
    let rows = match state.cache.get().await {
        Some(rows) => rows,
        None => {
            let rows = state
                .store
                .select_seasons(&state.table, state.max_rows)
                .await
                .map_err(|e| map_store_error(req_id.0.clone(), &e))?;
            state.cache.put(rows.clone()).await;
            rows
        }
    };

    let data = rows.iter().map(summarize).collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn summarize(row: &SeasonRow) -> SeasonSummary {
    let wins = row.wins.unwrap_or(0);
    let losses = row.losses.unwrap_or(0);
    let ties = row.ties.unwrap_or(0);
    let games = wins + losses + ties;
    let win_pct = if games > 0 {
        f64::from(wins) / f64::from(games)
    } else {
        0.0
    };

    SeasonSummary {
        season: row.season,
        team: string_or_unknown(row.team.as_deref()),
        wins,
        losses,
        ties,
        points_for: row.points_for.unwrap_or(0),
        points_against: row.points_against.unwrap_or(0),
        games,
        win_pct,
        division_place: string_or_unknown(row.division_place.as_deref()),
        coach: string_or_unknown(row.coach.as_deref()),
        playoffs: string_or_unknown(row.playoffs.as_deref()),
        source_url: row.source_url.clone(),
        extracted_at: row.extracted_at,
        updated_at: row.updated_at,
    }
}

fn string_or_unknown(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => "Unknown".to_string(),
    }
}
