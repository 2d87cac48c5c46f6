use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::generator;
use crate::output;
use crate::platforms::{self, Category, CategoryFilter, PlatformTemplate};
use crate::state::debounce::Debouncer;
use crate::state::{Action, AppState, Store};

static TWO_PLATFORM_TABLE: &[PlatformTemplate] = &[
    PlatformTemplate {
        id: "x",
        name: "X",
        pattern: "https://x.com/%s",
        category: Category::Social,
        description: "Test platform with a bare path.",
    },
    PlatformTemplate {
        id: "y",
        name: "Y",
        pattern: "https://y.com/@%s",
        category: Category::Dev,
        description: "Test platform with an at-prefixed path.",
    },
];

#[test]
fn john_doe_two_template_scenario() {
    let links = generator::generate_all("john_doe", TWO_PLATFORM_TABLE);
    let urls: Vec<_> = links.iter().map(|l| l.generated_url.as_str()).collect();
    assert_eq!(urls, ["https://x.com/john_doe", "https://y.com/@john_doe"]);
}

#[test]
fn dirty_input_yields_same_links_as_clean_input() {
    let clean = generator::generate_all("JohnDoe", platforms::all());
    let dirty = generator::generate_all("  John Doe!! ", platforms::all());
    assert_eq!(clean.len(), dirty.len());
    for (a, b) in clean.iter().zip(dirty.iter()) {
        assert_eq!(a.generated_url, b.generated_url);
    }
}

#[test]
fn empty_username_produces_no_links_anywhere() {
    assert!(generator::generate_all("", platforms::all()).is_empty());
    assert!(generator::generate_all("@#!", platforms::all()).is_empty());
    assert!(generator::generate_all("   ", TWO_PLATFORM_TABLE).is_empty());
}

#[test]
fn category_and_search_filters_are_conjunctive() {
    let links = generator::generate_all("alice", platforms::all());
    let dev_git = generator::filter_links(&links, CategoryFilter::One(Category::Dev), "git");
    assert!(!dev_git.is_empty());
    for link in dev_git.iter() {
        assert_eq!(link.category, Category::Dev);
        assert!(link.name.to_lowercase().contains("git"));
    }
}

#[test]
fn selection_restricts_to_named_ids() {
    let links = generator::generate_all("alice", platforms::all());
    let selected: BTreeSet<String> = ["github".to_string(), "twitter".to_string()].into();
    let kept = generator::select_links(&links, &selected);
    assert_eq!(kept.len(), 2);
    assert!(kept.iter().all(|l| selected.contains(l.id)));
}

#[test]
fn text_and_json_exports_agree_on_username_and_urls() {
    let links = generator::generate_all("john_doe", platforms::all());
    let text =
        String::from_utf8(output::render_text(&links, "john_doe", "2026-08-30").unwrap())
            .unwrap();
    let json: serde_json::Value =
        serde_json::from_slice(&output::render_json(&links, "john_doe", "2026-08-30").unwrap())
            .unwrap();

    assert_eq!(json["meta"]["username"], "john_doe");
    assert!(text.contains("Target Username: john_doe"));
    for entry in json["links"].as_array().unwrap() {
        let url = entry["generated_url"].as_str().unwrap();
        assert!(text.contains(url));
    }
}

#[test]
fn export_covers_full_table_regardless_of_active_filter() {
    let mut store = Store::new(AppState::default());
    store.dispatch(Action::SetUsername("john_doe".to_string()));
    store.dispatch(Action::SetFilter(CategoryFilter::One(Category::Dev)));

    let state = store.state();
    let view = generator::filter_links(
        &generator::generate_all(&state.username, platforms::all()),
        state.filter,
        &state.search,
    );
    assert!(view.len() < platforms::all().len());

    // the export payload is regenerated from the username alone
    let full = generator::generate_all(&state.username, platforms::all());
    let json: serde_json::Value =
        serde_json::from_slice(&output::render_json(&full, &state.username, "2026-08-30").unwrap())
            .unwrap();
    assert_eq!(
        json["meta"]["count"].as_u64().unwrap() as usize,
        platforms::all().len()
    );
}

#[test]
fn store_pipeline_matches_direct_generation() {
    let mut store = Store::new(AppState::default());
    store.dispatch(Action::SetUsername("john_doe".to_string()));
    store.dispatch(Action::SetFilter(CategoryFilter::One(Category::Social)));
    store.dispatch(Action::SetSearch("insta".to_string()));

    let state = store.state();
    let links = generator::generate_all(&state.username, platforms::all());
    let links = generator::filter_links(&links, state.filter, &state.search);
    assert!(links.iter().any(|l| l.id == "instagram"));
    assert!(links
        .iter()
        .all(|l| l.category == Category::Social && l.name.to_lowercase().contains("insta")));
}

#[tokio::test]
async fn debounced_search_applies_only_the_last_query() {
    let store = Arc::new(Mutex::new(Store::new(AppState::default())));
    {
        let mut guard = store.lock().unwrap();
        guard.dispatch(Action::SetUsername("alice".to_string()));
    }

    let mut debouncer = Debouncer::new(Duration::from_millis(20));
    for query in ["g", "gi", "git"] {
        let store_for_update = store.clone();
        let query = query.to_string();
        debouncer.call(move || {
            store_for_update
                .lock()
                .unwrap()
                .dispatch(Action::SetSearch(query));
        });
    }
    debouncer.flush().await;

    assert_eq!(store.lock().unwrap().state().search, "git");
}
