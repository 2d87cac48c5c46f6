use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config;

/// Well-known single-key store holding the last-used username. Read once at
/// startup, written on every successful generation.
pub fn default_store_path() -> Option<PathBuf> {
    Some(config::dot_dir()?.join("last_username"))
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("store path unavailable (no home directory)")]
    NoStorePath,

    #[error("failed to create store directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write store '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Restore the persisted username, if any. A missing or unreadable store is
/// treated the same as no saved value.
pub fn load_last_username(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn save_last_username(path: &Path, username: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StorageError::CreateDir {
            path: parent.display().to_string(),
            source: e,
        })?;
    }
    std::fs::write(path, username).map_err(|e| StorageError::Write {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("linkforge-storage-test-{}-{}", std::process::id(), name))
            .join("last_username")
    }

    #[test]
    fn round_trips_username_through_store_file() {
        let path = temp_store("roundtrip");
        save_last_username(&path, "john_doe").unwrap();
        assert_eq!(load_last_username(&path), Some("john_doe".to_string()));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_store_reads_as_none() {
        let path = temp_store("missing");
        assert_eq!(load_last_username(&path), None);
    }

    #[test]
    fn blank_store_reads_as_none() {
        let path = temp_store("blank");
        save_last_username(&path, "   ").unwrap();
        assert_eq!(load_last_username(&path), None);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
