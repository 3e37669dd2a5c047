//! The fixed extraction prompt sent with every completion.

/// Instructional template. `{blob}` is replaced with the (truncated) page
/// text; everything else is constant so runs stay comparable.
const PROMPT_TEMPLATE: &str = "\
You are given raw text scraped from a Dallas Cowboys seasons page (may be Wikipedia or a stats site).
Extract a JSON ARRAY where each element is ONE SEASON record with EXACT keys:

season (integer),
team (string, 'Dallas Cowboys'),
wins (integer),
losses (integer),
ties (integer, 0 if none),
points_for (integer),
points_against (integer),
division_place (short string like '1st NFC East'),
coach (string or 'Unknown'),
playoffs (string summary like 'Missed Playoffs', 'Lost Wild Card', 'Won Super Bowl'),
source_url (string),
extracted_at (UTC ISO 8601 timestamp).

Rules:
- Parse as many seasons as clearly present (recent decades are enough).
- Integers for numeric fields; fill missing numeric with 0 and missing strings with 'Unknown'.
- Output ONLY valid JSON (no markdown, no commentary).

Text:
---
{blob}
---
";

/// Builds the completion prompt from the raw blob.
///
/// Oversized blobs are truncated from the tail to `max_chars` characters —
/// truncation, not rejection, so a huge page still yields its leading
/// seasons. The cut is on a `char` boundary.
#[must_use]
pub fn build_prompt(blob: &str, max_chars: usize) -> String {
    let truncated: String = blob.chars().take(max_chars).collect();
    PROMPT_TEMPLATE.replace("{blob}", &truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_prompt_embeds_blob() {
        let prompt = build_prompt("1995 season: 12-4", 12_000);
        assert!(prompt.contains("1995 season: 12-4"));
        assert!(prompt.contains("Output ONLY valid JSON"));
        assert!(!prompt.contains("{blob}"));
    }

    #[test]
    fn build_prompt_truncates_from_the_tail() {
        let blob = "a".repeat(50) + "TAIL";
        let prompt = build_prompt(&blob, 50);
        assert!(!prompt.contains("TAIL"));
        assert!(prompt.contains(&"a".repeat(50)));
    }

    #[test]
    fn build_prompt_truncates_on_char_boundary() {
        let blob = "é".repeat(10);
        let prompt = build_prompt(&blob, 5);
        assert!(prompt.contains(&"é".repeat(5)));
        assert!(!prompt.contains(&"é".repeat(6)));
    }
}
