use serde::Serialize;
use thiserror::Error;

use crate::generator::GeneratedLink;

pub const TOOL_NAME: &str = "linkforge";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

/// Default export filename for a username, e.g. `linkforge-john_doe.json`.
pub fn default_filename(username: &str, format: OutputFormat) -> String {
    format!("{}-{}.{}", TOOL_NAME, username, format.extension())
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export (no username set)")]
    NoData,
}

#[derive(Clone, Debug, Serialize)]
struct ExportMeta<'a> {
    tool: &'static str,
    username: &'a str,
    date: &'a str,
    count: usize,
}

#[derive(Clone, Debug, Serialize)]
struct ExportDocument<'a> {
    meta: ExportMeta<'a>,
    links: &'a [GeneratedLink],
}

/// Plain-text export: header block, then one block per link with the
/// uppercased category tag, name, and URL. Pure in (links, username, date);
/// a missing username is refused before anything is rendered.
pub fn render_text(
    links: &[GeneratedLink],
    username: &str,
    date: &str,
) -> Result<Vec<u8>, ExportError> {
    if username.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut out = String::new();
    out.push_str("LINKFORGE IDENTITY EXPORT\n");
    out.push_str(&format!("Target Username: {}\n", username));
    out.push_str(&format!("Date: {}\n", date));
    out.push_str("----------------------------\n\n");

    for link in links.iter() {
        out.push_str(&format!(
            "[{}] {}\n",
            link.category.as_str().to_uppercase(),
            link.name
        ));
        out.push_str(&format!("{}\n\n", link.generated_url));
    }

    out.push_str("Generated by linkforge\n");
    Ok(out.into_bytes())
}

/// JSON export: metadata object plus the full link list, pretty printed
/// with key order following struct declaration order.
pub fn render_json(
    links: &[GeneratedLink],
    username: &str,
    date: &str,
) -> Result<Vec<u8>, ExportError> {
    if username.is_empty() {
        return Err(ExportError::NoData);
    }
    let doc = ExportDocument {
        meta: ExportMeta {
            tool: TOOL_NAME,
            username,
            date,
            count: links.len(),
        },
        links,
    };
    let mut bytes = serde_json::to_vec_pretty(&doc).unwrap_or_else(|_| b"{}".to_vec());
    bytes.push(b'\n');
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator;
    use crate::platforms;

    #[test]
    fn infer_format_recognizes_extensions() {
        assert_eq!(infer_format_from_path("out.TXT"), Some(OutputFormat::Text));
        assert_eq!(infer_format_from_path("out.json"), Some(OutputFormat::Json));
        assert_eq!(infer_format_from_path("out.html"), None);
    }

    #[test]
    fn default_filename_carries_username_and_extension() {
        assert_eq!(
            default_filename("john_doe", OutputFormat::Json),
            "linkforge-john_doe.json"
        );
    }

    #[test]
    fn render_refuses_missing_username() {
        assert!(matches!(
            render_text(&[], "", "2026-01-01"),
            Err(ExportError::NoData)
        ));
        assert!(matches!(
            render_json(&[], "", "2026-01-01"),
            Err(ExportError::NoData)
        ));
    }

    #[test]
    fn empty_link_list_with_username_exports_zero_count() {
        let bytes = render_json(&[], "john_doe", "2026-01-01").unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(doc["meta"]["username"], "john_doe");
        assert_eq!(doc["meta"]["count"], 0);
        assert!(doc["links"].as_array().unwrap().is_empty());

        let text =
            String::from_utf8(render_text(&[], "john_doe", "2026-01-01").unwrap()).unwrap();
        assert!(text.contains("Target Username: john_doe"));
    }

    #[test]
    fn text_export_contains_header_and_every_url() {
        let links = generator::generate_all("john_doe", platforms::all());
        let bytes = render_text(&links, "john_doe", "2026-08-30").unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("LINKFORGE IDENTITY EXPORT"));
        assert!(text.contains("Target Username: john_doe"));
        assert!(text.contains("Date: 2026-08-30"));
        for link in links.iter() {
            assert!(text.contains(&link.generated_url));
        }
    }

    #[test]
    fn json_export_meta_matches_link_list() {
        let links = generator::generate_all("john_doe", platforms::all());
        let bytes = render_json(&links, "john_doe", "2026-08-30").unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(doc["meta"]["tool"], "linkforge");
        assert_eq!(doc["meta"]["username"], "john_doe");
        assert_eq!(doc["meta"]["count"], links.len());
        assert_eq!(doc["links"].as_array().unwrap().len(), links.len());
    }
}
