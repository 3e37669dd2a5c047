//! Visible-text extraction from raw HTML.

use regex::Regex;

/// Reduces an HTML document to the text a reader would see.
///
/// Comments and the contents of `<head>`, `<script>`, `<style>`,
/// `<noscript>`, and `<template>` are removed before tag stripping, so
/// inline JavaScript and CSS never reach the blob. Remaining text nodes are
/// joined with single spaces and redundant whitespace is collapsed.
#[must_use]
pub fn visible_text(html: &str) -> String {
    let mut cleaned = strip_pattern(html, r"(?s)<!--.*?-->");
    cleaned = strip_pattern(&cleaned, r"(?is)<head\b[^>]*>.*?</head>");
    cleaned = strip_pattern(&cleaned, r"(?is)<script\b[^>]*>.*?</script>");
    cleaned = strip_pattern(&cleaned, r"(?is)<style\b[^>]*>.*?</style>");
    cleaned = strip_pattern(&cleaned, r"(?is)<noscript\b[^>]*>.*?</noscript>");
    cleaned = strip_pattern(&cleaned, r"(?is)<template\b[^>]*>.*?</template>");

    let tags = Regex::new(r"(?s)<[^>]+>").expect("valid tags regex");
    let no_tags = tags.replace_all(&cleaned, " ");

    let decoded = decode_entities(&no_tags);

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_pattern(input: &str, pattern: &str) -> String {
    let re = Regex::new(pattern).expect("valid strip regex");
    re.replace_all(input, " ").into_owned()
}

/// Decodes the named and decimal entities that show up in practice on stats
/// pages. Unknown entities are left as-is.
fn decode_entities(input: &str) -> String {
    let named = input
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'");

    let numeric = Regex::new(r"&#(\d+);").expect("valid numeric entity regex");
    let decoded = numeric.replace_all(&named, |caps: &regex::Captures<'_>| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map_or_else(|| caps[0].to_string(), String::from)
    });

    // &amp; last, so "&amp;lt;" decodes to the literal "&lt;".
    decoded.replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_text_drops_script_contents() {
        let html = r#"<html><body><p>1995 season</p><script>var wins = 12;</script></body></html>"#;
        let text = visible_text(html);
        assert!(text.contains("1995 season"));
        assert!(!text.contains("var wins"));
    }

    #[test]
    fn visible_text_drops_style_contents() {
        let html = "<body><style>.row { color: red; }</style><td>12-4</td></body>";
        let text = visible_text(html);
        assert!(text.contains("12-4"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn visible_text_drops_head_and_noscript() {
        let html = "<html><head><title>Stats</title><meta name=\"x\"></head>\
                    <body><noscript>Enable JS</noscript>Season table</body></html>";
        let text = visible_text(html);
        assert_eq!(text, "Season table");
    }

    #[test]
    fn visible_text_drops_commented_markup() {
        let html = "<body>before<!-- <p>hidden wins: 99</p> -->after</body>";
        let text = visible_text(html);
        assert_eq!(text, "before after");
        assert!(!text.contains("99"));
    }

    #[test]
    fn visible_text_joins_nodes_with_single_spaces() {
        let html = "<table><tr><td>1995</td>\n\n  <td>12</td><td>4</td></tr></table>";
        assert_eq!(visible_text(html), "1995 12 4");
    }

    #[test]
    fn visible_text_decodes_common_entities() {
        let html = "<td>Cowboys&nbsp;&amp;&nbsp;Texans &#8212; 1st</td>";
        assert_eq!(visible_text(html), "Cowboys & Texans — 1st");
    }

    #[test]
    fn visible_text_survives_multiline_scripts() {
        let html = "<script type=\"text/javascript\">\nfunction f() {\n  return 1;\n}\n</script>ok";
        assert_eq!(visible_text(html), "ok");
    }
}
