pub mod debounce;

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::platforms::CategoryFilter;
use crate::storage;
use crate::utils;

/// The one piece of session state. Created at startup (optionally hydrated
/// from the persisted username), mutated only through [`reduce`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub username: String,
    pub filter: CategoryFilter,
    pub search: String,
    pub selected: BTreeSet<String>,
}

#[derive(Clone, Debug)]
pub enum Action {
    SetUsername(String),
    SetFilter(CategoryFilter),
    SetSearch(String),
    TogglePlatform(String),
}

/// Pure reducer: builds the next state without touching the current one.
/// Usernames are sanitized on the way in so downstream views never see the
/// raw input.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::SetUsername(raw) => next.username = utils::sanitize_username(raw),
        Action::SetFilter(filter) => next.filter = *filter,
        Action::SetSearch(query) => next.search = query.trim().to_string(),
        Action::TogglePlatform(id) => {
            if !next.selected.remove(id) {
                next.selected.insert(id.clone());
            }
        }
    }
    next
}

type Listener = Box<dyn Fn(&AppState) + Send>;

/// Holds the state and a listener list. Dispatch is synchronous: every
/// listener runs to completion before the mutator returns. Listeners are
/// `Send` only because debounced dispatches run on the tokio runtime.
pub struct Store {
    state: AppState,
    listeners: Vec<Listener>,
    store_path: Option<PathBuf>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("store_path", &self.store_path)
            .finish()
    }
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            store_path: None,
        }
    }

    /// Enable the storage-backed username path: `dispatch_persistent` will
    /// write to this store before notifying listeners.
    pub fn with_store_path(mut self, path: Option<PathBuf>) -> Self {
        self.store_path = path;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&AppState) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(&self.state, &action);
        self.notify();
    }

    /// Username mutation with the persistence side effect: the new value is
    /// written to the single-key store before listeners run, so a reload can
    /// restore it. Storage failures are reported but never fatal.
    pub fn dispatch_persistent(&mut self, action: Action) -> Result<(), storage::StorageError> {
        self.state = reduce(&self.state, &action);
        let result = match (&self.store_path, self.state.username.is_empty()) {
            (Some(path), false) => storage::save_last_username(path, &self.state.username),
            _ => Ok(()),
        };
        self.notify();
        result
    }

    fn notify(&self) {
        for listener in self.listeners.iter() {
            listener(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platforms::{Category, CategoryFilter};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn reduce_leaves_input_state_untouched() {
        let state = AppState::default();
        let next = reduce(&state, &Action::SetUsername("john_doe".to_string()));
        assert_eq!(state, AppState::default());
        assert_eq!(next.username, "john_doe");
    }

    #[test]
    fn reduce_sanitizes_username() {
        let next = reduce(
            &AppState::default(),
            &Action::SetUsername("  John Doe!! ".to_string()),
        );
        assert_eq!(next.username, "JohnDoe");
    }

    #[test]
    fn reduce_toggles_platform_selection() {
        let state = AppState::default();
        let on = reduce(&state, &Action::TogglePlatform("github".to_string()));
        assert!(on.selected.contains("github"));
        let off = reduce(&on, &Action::TogglePlatform("github".to_string()));
        assert!(!off.selected.contains("github"));
    }

    #[test]
    fn dispatch_notifies_listeners_synchronously() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut store = Store::new(AppState::default());
        let seen = counter.clone();
        store.subscribe(move |state| {
            assert_eq!(state.filter, CategoryFilter::One(Category::Dev));
            seen.fetch_add(1, Ordering::SeqCst);
        });
        store.dispatch(Action::SetFilter(CategoryFilter::One(Category::Dev)));
        // listener has already run by the time dispatch returns
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dispatch_persistent_writes_store_before_notifying() {
        let dir = std::env::temp_dir().join(format!(
            "linkforge-state-test-{}",
            std::process::id()
        ));
        let path = dir.join("last_username");
        let mut store = Store::new(AppState::default()).with_store_path(Some(path.clone()));

        let path_for_listener = path.clone();
        store.subscribe(move |state| {
            let persisted = crate::storage::load_last_username(&path_for_listener);
            assert_eq!(persisted.as_deref(), Some(state.username.as_str()));
        });
        store
            .dispatch_persistent(Action::SetUsername("john_doe".to_string()))
            .unwrap();
        let _ = std::fs::remove_dir_all(dir);
    }
}
