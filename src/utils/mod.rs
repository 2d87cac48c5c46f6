use std::collections::BTreeSet;

use chrono::Utc;

/// Reduce raw input to the username character class: ASCII letters, digits,
/// `.`, `_`, `-`. Everything else (including surrounding whitespace) is
/// dropped, never rejected. Empty input yields empty output.
pub fn sanitize_username(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}

/// Date stamp used in export headers and metadata.
pub fn today_stamp() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Parse a comma-separated set of platform ids, trimmed and deduplicated.
/// Ordering is normalized so the selection compares stably.
pub fn parse_id_set_csv(value: &str) -> Result<BTreeSet<String>, String> {
    let raw = value.trim();
    if raw.is_empty() {
        return Err("platform id list is empty".to_string());
    }
    let mut out = BTreeSet::new();
    for part in raw.split(',') {
        let item = part.trim();
        if item.is_empty() {
            continue;
        }
        out.insert(item.to_lowercase());
    }
    if out.is_empty() {
        return Err("platform id list is empty".to_string());
    }
    Ok(out)
}
