use std::collections::BTreeSet;

use serde::Serialize;

use crate::platforms::{Category, CategoryFilter, PlatformTemplate, PLACEHOLDER};
use crate::utils;

/// A platform row with the username substituted in. Derived on every pass,
/// never stored; the link-to-template relation is re-derived each time.
#[derive(Clone, Debug, Serialize)]
pub struct GeneratedLink {
    pub id: &'static str,
    pub name: &'static str,
    pub pattern: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub generated_url: String,
    pub username: String,
}

/// Generate one link per platform by substituting the sanitized username
/// into the first placeholder occurrence of each pattern. Output order
/// matches table order. Pure; an empty username yields an empty list.
pub fn generate_all(username: &str, table: &'static [PlatformTemplate]) -> Vec<GeneratedLink> {
    let sanitized = utils::sanitize_username(username);
    if sanitized.is_empty() {
        return vec![];
    }

    table
        .iter()
        .map(|platform| GeneratedLink {
            id: platform.id,
            name: platform.name,
            pattern: platform.pattern,
            category: platform.category,
            description: platform.description,
            generated_url: platform.pattern.replacen(PLACEHOLDER, &sanitized, 1),
            username: sanitized.clone(),
        })
        .collect()
}

/// Keep links whose category matches the selector (or the `all` wildcard)
/// AND whose name or category tag contains the query, case-insensitively.
/// Both predicates are conjunctive; input order is preserved.
pub fn filter_links(
    links: &[GeneratedLink],
    category: CategoryFilter,
    query: &str,
) -> Vec<GeneratedLink> {
    let needle = query.trim().to_lowercase();
    links
        .iter()
        .filter(|link| category.matches(link.category))
        .filter(|link| {
            needle.is_empty()
                || link.name.to_lowercase().contains(&needle)
                || link.category.as_str().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Restrict links to an explicit id selection. An empty selection means no
/// restriction was requested and passes everything through.
pub fn select_links(links: &[GeneratedLink], selected: &BTreeSet<String>) -> Vec<GeneratedLink> {
    if selected.is_empty() {
        return links.to_vec();
    }
    links
        .iter()
        .filter(|link| selected.contains(link.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platforms;

    #[test]
    fn generate_all_substitutes_first_placeholder_only() {
        let links = generate_all("john_doe", platforms::all());
        assert_eq!(links.len(), platforms::all().len());
        for link in links.iter() {
            assert_eq!(link.generated_url.matches("john_doe").count(), 1);
            assert_eq!(
                link.generated_url,
                link.pattern.replacen(PLACEHOLDER, "john_doe", 1)
            );
        }
    }

    #[test]
    fn generate_all_sanitizes_before_substituting() {
        let links = generate_all("  John Doe!! ", platforms::all());
        assert!(links.iter().all(|l| l.username == "JohnDoe"));
    }

    #[test]
    fn generate_all_with_empty_username_yields_nothing() {
        assert!(generate_all("", platforms::all()).is_empty());
        assert!(generate_all("  !!  ", platforms::all()).is_empty());
    }

    #[test]
    fn filter_wildcard_and_empty_query_is_identity() {
        let links = generate_all("alice", platforms::all());
        let filtered = filter_links(&links, CategoryFilter::All, "");
        let ids: Vec<_> = filtered.iter().map(|l| l.id).collect();
        let expected: Vec<_> = links.iter().map(|l| l.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn filter_by_category_returns_only_that_category() {
        let links = generate_all("alice", platforms::all());
        let filtered = filter_links(&links, CategoryFilter::One(Category::Dev), "");
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|l| l.category == Category::Dev));
    }

    #[test]
    fn filter_query_matches_name_or_tag_case_insensitively() {
        let links = generate_all("alice", platforms::all());
        let by_name = filter_links(&links, CategoryFilter::All, "GITHUB");
        assert!(by_name.iter().any(|l| l.id == "github"));

        let by_tag = filter_links(&links, CategoryFilter::All, "gaming");
        assert!(by_tag.iter().all(|l| l.category == Category::Gaming));
    }

    #[test]
    fn select_links_with_empty_selection_passes_through() {
        let links = generate_all("alice", platforms::all());
        let selected = select_links(&links, &BTreeSet::new());
        assert_eq!(selected.len(), links.len());
    }

    #[test]
    fn select_links_restricts_to_requested_ids() {
        let links = generate_all("alice", platforms::all());
        let wanted: BTreeSet<String> = ["github", "npm"].iter().map(|s| s.to_string()).collect();
        let selected = select_links(&links, &wanted);
        let ids: Vec<_> = selected.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["github", "npm"]);
    }
}
