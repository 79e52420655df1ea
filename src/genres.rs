// src/genres.rs - Decoding of the stringified genre list column
//
// TMDB exports store genres as `[{"id": 28, "name": "Action"}, ...]`, but
// hand-edited or re-exported files often carry Python-style single quotes or
// bare words. Strict JSON is tried first, then a regex repair pass.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::GenreParseError;

const ECHO_LIMIT: usize = 100;

static BARE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\{\s,])(\w+)(:)").expect("bare key pattern is valid"));

static BARE_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#":\s*([^\s\{\}\[\]",]+?)([,\}\]]|$)"#).expect("bare value pattern is valid")
});

/// Names of the genres in `raw`, in order. Never fails: anything that cannot
/// be decoded yields an empty list.
pub fn parse_genre_names(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "[]" {
        return Vec::new();
    }

    match decode_nested(trimmed) {
        Ok(value) => names_from(&value),
        Err(e) => {
            warn!(
                field = %truncate(trimmed, ECHO_LIMIT),
                error = %e,
                "Could not parse genre field"
            );
            Vec::new()
        }
    }
}

/// Strict JSON first, repaired JSON second.
fn decode_nested(raw: &str) -> Result<Value, GenreParseError> {
    if let Ok(value) = serde_json::from_str(raw) {
        return Ok(value);
    }

    let repaired = repair_quasi_json(raw);
    debug!(original = %truncate(raw, ECHO_LIMIT), repaired = %truncate(&repaired, ECHO_LIMIT), "Retrying genre field after repair");
    Ok(serde_json::from_str(&repaired)?)
}

/// Best-effort rewrite of a Python-ish literal into JSON. Can both under- and
/// over-correct; callers must tolerate a still-invalid result.
pub fn repair_quasi_json(raw: &str) -> String {
    let quoted = raw.replace('\'', "\"");
    let keyed = BARE_KEY.replace_all(&quoted, r#"${1}"${2}"${3}"#);
    BARE_VALUE
        .replace_all(&keyed, r#":"${1}"${2}"#)
        .into_owned()
}

fn names_from(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("name").and_then(Value::as_str))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_json() {
        let raw = r#"[{"id": 28, "name": "Action"}, {"id": 12, "name": "Adventure"}]"#;
        assert_eq!(parse_genre_names(raw), vec!["Action", "Adventure"]);
    }

    #[test]
    fn test_single_quoted_key_bare_value() {
        assert_eq!(parse_genre_names("[{'name': Action}]"), vec!["Action"]);
    }

    #[test]
    fn test_python_style_literal() {
        let raw = "[{'id': 18, 'name': 'Drama'}, {'id': 35, 'name': 'Comedy'}]";
        assert_eq!(parse_genre_names(raw), vec!["Drama", "Comedy"]);
    }

    #[test]
    fn test_bare_keys() {
        assert_eq!(
            parse_genre_names("[{id: 10, name: Horror}]"),
            vec!["Horror"]
        );
    }

    #[test]
    fn test_short_circuits() {
        assert!(parse_genre_names("").is_empty());
        assert!(parse_genre_names("   ").is_empty());
        assert!(parse_genre_names("[]").is_empty());
        assert!(parse_genre_names(" [] ").is_empty());
    }

    #[test]
    fn test_garbage_never_panics() {
        for raw in [
            "not json at all",
            "[{",
            "}}}{{{",
            "[{'name': }]",
            "\"",
            "'''",
            "[{\"name\": \"Dr\u{e9}ma\"",
            "null",
            "42",
            "{\"name\": \"Action\"}",
            "ünïcödé ☃ garbage that is definitely longer than one hundred characters so the echo gets truncated at a char boundary ☃☃☃",
        ] {
            let _ = parse_genre_names(raw);
        }
    }

    #[test]
    fn test_non_array_and_odd_elements() {
        assert!(parse_genre_names("{\"name\": \"Action\"}").is_empty());
        assert_eq!(
            parse_genre_names(r#"[{"name": ""}, 5, {"id": 1}, {"name": "War"}]"#),
            vec!["War"]
        );
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let raw = r#"[{"name": "Drama"}, {"name": "Action"}, {"name": "Drama"}]"#;
        assert_eq!(parse_genre_names(raw), vec!["Drama", "Action", "Drama"]);
    }

    #[test]
    fn test_repair_output() {
        assert_eq!(repair_quasi_json("[{'name': Action}]"), r#"[{"name":"Action"}]"#);
        assert_eq!(repair_quasi_json("{name: War}"), r#"{"name":"War"}"#);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("ééé", 2), "éé");
        assert_eq!(truncate("abc", 10), "abc");
    }
}
