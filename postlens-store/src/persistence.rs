//! File persistence helpers.
//!
//! Handles loading and saving the history file with restrictive
//! permissions, since stored posts may contain non-public drafts.

use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::StoreError;

// ============================================================================
// Default Paths
// ============================================================================

/// Returns the default configuration directory.
///
/// - macOS: `~/Library/Application Support/PostLens`
/// - Linux: `~/.config/postlens`
/// - Windows: `%APPDATA%\PostLens`
pub fn default_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support").join("PostLens"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    #[cfg(not(target_os = "macos"))]
    {
        dirs::config_dir()
            .map(|c| c.join("postlens"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Returns the default history file path.
pub fn default_history_path() -> PathBuf {
    default_config_dir().join("history.json")
}

// ============================================================================
// Security: File Permissions
// ============================================================================

/// Sets restrictive file permissions (0o600) on Unix systems.
#[cfg(unix)]
async fn set_restrictive_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = tokio::fs::metadata(path).await?;
    let mut perms = metadata.permissions();
    perms.set_mode(0o600); // Owner read/write only
    tokio::fs::set_permissions(path, perms).await?;

    debug!(path = %path.display(), mode = "0600", "Set restrictive permissions");
    Ok(())
}

/// No-op for non-Unix systems.
#[cfg(not(unix))]
async fn set_restrictive_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

// ============================================================================
// File Operations
// ============================================================================

/// Loads a JSON value from disk, returning `None` when the file is absent.
pub async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => {
            debug!(path = %path.display(), "Loaded state file");
            Ok(Some(serde_json::from_str(&contents)?))
        }
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error.into()),
    }
}

/// Saves a JSON value to disk, creating parent directories as needed.
pub async fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            debug!(path = %parent.display(), "Creating state directory");
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let contents = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, contents).await?;
    set_restrictive_permissions(path).await?;

    debug!(path = %path.display(), "Saved state file");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::InsightHistory;

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let loaded: Option<InsightHistory> = load_json(&path).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");

        let history = InsightHistory::new();
        save_json(&path, &history).await.unwrap();

        let loaded: Option<InsightHistory> = load_json(&path).await.unwrap();
        assert!(loaded.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        tokio::fs::write(&path, "not json at all").await.unwrap();

        let loaded: Result<Option<InsightHistory>, _> = load_json(&path).await;
        assert!(matches!(loaded, Err(StoreError::Serialization(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        save_json(&path, &InsightHistory::new()).await.unwrap();

        let mode = tokio::fs::metadata(&path).await.unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
