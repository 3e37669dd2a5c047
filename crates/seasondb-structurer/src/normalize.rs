//! Field-level normalization from loosely-shaped model output to
//! [`SeasonRecord`].

use chrono::{DateTime, Utc};
use serde_json::Value;

use seasondb_core::{SeasonRecord, DEFAULT_TEAM, UNKNOWN};

use crate::error::StructurerError;

/// Normalizes every parsed element, aborting the batch on the first failure.
///
/// # Errors
///
/// Returns [`StructurerError::Normalization`] from the first element that
/// cannot be normalized. A non-numeric `season` anywhere fails the whole
/// batch; no subset of records is emitted.
pub fn normalize_records(
    items: &[Value],
    source_url: &str,
    now: DateTime<Utc>,
) -> Result<Vec<SeasonRecord>, StructurerError> {
    items
        .iter()
        .map(|item| normalize_record(item, source_url, now))
        .collect()
}

/// Normalizes one model-emitted record.
///
/// Defaults: numeric fields treat absent, null, `0`, and empty string as 0
/// ("blank means zero"); string fields fall back to `"Unknown"`, the team to
/// `"Dallas Cowboys"`, and `source_url` to the originating page. A model
/// `extracted_at` is kept when it parses as RFC 3339; otherwise the injected
/// `now` is used. The result always has every field populated, so running
/// normalization on an already-normalized record is the identity.
///
/// # Errors
///
/// Returns [`StructurerError::Normalization`] if the element is not an
/// object, `season` is absent or non-numeric, or a numeric field holds a
/// non-numeric non-blank value.
pub fn normalize_record(
    value: &Value,
    source_url: &str,
    now: DateTime<Utc>,
) -> Result<SeasonRecord, StructurerError> {
    let Some(obj) = value.as_object() else {
        return Err(StructurerError::Normalization(
            "season record is not a JSON object".to_string(),
        ));
    };

    let season = coerce_int(obj.get("season")).ok_or_else(|| {
        StructurerError::Normalization(format!(
            "season is absent or non-numeric: {}",
            obj.get("season").cloned().unwrap_or(Value::Null)
        ))
    })?;
    let season = to_i32("season", season)?;

    Ok(SeasonRecord {
        season,
        team: string_or(obj.get("team"), DEFAULT_TEAM),
        wins: int_or_zero(obj, "wins")?,
        losses: int_or_zero(obj, "losses")?,
        ties: int_or_zero(obj, "ties")?,
        points_for: int_or_zero(obj, "points_for")?,
        points_against: int_or_zero(obj, "points_against")?,
        division_place: string_or(obj.get("division_place"), UNKNOWN),
        coach: string_or(obj.get("coach"), UNKNOWN),
        playoffs: string_or(obj.get("playoffs"), UNKNOWN),
        source_url: string_or(obj.get("source_url"), source_url),
        extracted_at: timestamp_or(obj.get("extracted_at"), now),
    })
}

/// Blank-means-zero coercion for the counting fields: absent, null, and empty
/// string all become 0. A present non-blank value must be numeric.
fn int_or_zero(
    obj: &serde_json::Map<String, Value>,
    field: &str,
) -> Result<i32, StructurerError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(0),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(0),
        Some(value) => {
            let n = coerce_int(Some(value)).ok_or_else(|| {
                StructurerError::Normalization(format!("{field} is not numeric: {value}"))
            })?;
            to_i32(field, n)
        }
    }
}

/// Accepts JSON numbers (floats truncate) and numeric strings.
fn coerce_int(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}

fn to_i32(field: &str, n: i64) -> Result<i32, StructurerError> {
    i32::try_from(n).map_err(|_| {
        StructurerError::Normalization(format!("{field} is out of range: {n}"))
    })
}

fn string_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        None | Some(Value::Null) | Some(Value::String(_)) => default.to_string(),
        // Scalars like a bare 1 for division_place keep their text form
        // rather than being silently replaced.
        Some(other) => other.to_string(),
    }
}

fn timestamp_or(value: Option<&Value>, now: DateTime<Utc>) -> DateTime<Utc> {
    value
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map_or(now, |dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0).unwrap()
    }

    const SRC: &str = "https://example.com/cowboys";

    #[test]
    fn normalize_record_fills_every_default() {
        let record = normalize_record(&json!({"season": 1995}), SRC, test_now()).unwrap();
        assert_eq!(record.season, 1995);
        assert_eq!(record.team, "Dallas Cowboys");
        assert_eq!(record.wins, 0);
        assert_eq!(record.losses, 0);
        assert_eq!(record.ties, 0);
        assert_eq!(record.points_for, 0);
        assert_eq!(record.points_against, 0);
        assert_eq!(record.division_place, "Unknown");
        assert_eq!(record.coach, "Unknown");
        assert_eq!(record.playoffs, "Unknown");
        assert_eq!(record.source_url, SRC);
        assert_eq!(record.extracted_at, test_now());
    }

    #[test]
    fn normalize_record_blank_numeric_means_zero() {
        let record = normalize_record(
            &json!({"season": 2001, "wins": null, "losses": "", "ties": 0, "points_for": "  "}),
            SRC,
            test_now(),
        )
        .unwrap();
        assert_eq!(record.wins, 0);
        assert_eq!(record.losses, 0);
        assert_eq!(record.ties, 0);
        assert_eq!(record.points_for, 0);
    }

    #[test]
    fn normalize_record_coerces_numeric_strings() {
        let record = normalize_record(
            &json!({"season": "1995", "wins": "12", "losses": 4.0}),
            SRC,
            test_now(),
        )
        .unwrap();
        assert_eq!(record.season, 1995);
        assert_eq!(record.wins, 12);
        assert_eq!(record.losses, 4);
    }

    #[test]
    fn normalize_record_rejects_missing_season() {
        let err = normalize_record(&json!({"wins": 12}), SRC, test_now()).unwrap_err();
        assert!(matches!(err, StructurerError::Normalization(_)));
    }

    #[test]
    fn normalize_record_rejects_non_numeric_season() {
        let err =
            normalize_record(&json!({"season": "nineteen-95"}), SRC, test_now()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("season"), "got: {message}");
    }

    #[test]
    fn normalize_record_rejects_garbage_numeric_field() {
        let err = normalize_record(&json!({"season": 1995, "wins": "twelve"}), SRC, test_now())
            .unwrap_err();
        assert!(matches!(err, StructurerError::Normalization(_)));
    }

    #[test]
    fn normalize_record_empty_strings_become_unknown() {
        let record = normalize_record(
            &json!({"season": 1988, "coach": "", "playoffs": null}),
            SRC,
            test_now(),
        )
        .unwrap();
        assert_eq!(record.coach, "Unknown");
        assert_eq!(record.playoffs, "Unknown");
    }

    #[test]
    fn normalize_record_keeps_model_extracted_at_when_valid() {
        let record = normalize_record(
            &json!({"season": 1992, "extracted_at": "2024-01-02T03:04:05Z"}),
            SRC,
            test_now(),
        )
        .unwrap();
        assert_eq!(
            record.extracted_at,
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
        );
    }

    #[test]
    fn normalize_record_replaces_unparseable_extracted_at() {
        let record = normalize_record(
            &json!({"season": 1992, "extracted_at": "yesterday"}),
            SRC,
            test_now(),
        )
        .unwrap();
        assert_eq!(record.extracted_at, test_now());
    }

    #[test]
    fn normalize_is_idempotent() {
        let first = normalize_record(
            &json!({"season": 1995, "wins": 12, "losses": 4, "playoffs": "Won Super Bowl"}),
            SRC,
            test_now(),
        )
        .unwrap();

        let reserialized = serde_json::to_value(&first).unwrap();
        let second = normalize_record(&reserialized, SRC, test_now()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn normalize_records_aborts_batch_on_single_bad_season() {
        let items = vec![
            json!({"season": 1995, "wins": 12}),
            json!({"season": "??", "wins": 3}),
        ];
        let err = normalize_records(&items, SRC, test_now()).unwrap_err();
        assert!(matches!(err, StructurerError::Normalization(_)));
    }
}
