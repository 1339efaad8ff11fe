// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Preference storage backends.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::PreferenceError;

/// On-disk preference file format.
pub type PersistedPreferences = BTreeMap<String, String>;

/// Trait for preference storage backends.
#[async_trait]
pub trait PreferenceStore: Send + Sync + std::fmt::Debug {
	/// Read the value stored under `key`.
	async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

	/// Store `value` under `key`, replacing any previous value.
	async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// File-based preference store with JSON format.
///
/// Writes go through a temporary file and a rename, so readers never observe a
/// half-written file. Writes from one process are serialized.
#[derive(Debug)]
pub struct FilePreferenceStore {
	path: PathBuf,
	write_lock: Mutex<()>,
}

impl FilePreferenceStore {
	/// Create a new file preference store at the given path.
	///
	/// The file and its parent directories are created on first write.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			write_lock: Mutex::new(()),
		}
	}

	/// Get the path to the preference file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Read every stored preference.
	pub async fn read_all(&self) -> Result<PersistedPreferences, PreferenceError> {
		if !fs::try_exists(&self.path).await? {
			return Ok(PersistedPreferences::new());
		}

		let contents = fs::read_to_string(&self.path).await?;
		if contents.trim().is_empty() {
			return Ok(PersistedPreferences::new());
		}

		Ok(serde_json::from_str(&contents)?)
	}

	async fn write_all(&self, prefs: &PersistedPreferences) -> Result<(), PreferenceError> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent).await?;
		}

		let contents = serde_json::to_string_pretty(prefs)?;

		let temp_path = self.path.with_extension("tmp");
		let mut file = fs::File::create(&temp_path).await?;
		file.write_all(contents.as_bytes()).await?;
		file.sync_all().await?;
		drop(file);

		fs::rename(&temp_path, &self.path).await?;

		debug!(path = ?self.path, "Preference file written");
		Ok(())
	}
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
	async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
		let prefs = self.read_all().await?;
		Ok(prefs.get(key).cloned())
	}

	async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
		let _guard = self.write_lock.lock().await;
		let mut prefs = self.read_all().await?;
		prefs.insert(key.to_string(), value.to_string());
		self.write_all(&prefs).await
	}
}

/// In-memory preference store.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
	values: tokio::sync::RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
	/// Create a new empty in-memory store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a store pre-populated with one value.
	pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
		let mut values = HashMap::new();
		values.insert(key.into(), value.into());
		Self {
			values: tokio::sync::RwLock::new(values),
		}
	}
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
	async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
		let values = self.values.read().await;
		Ok(values.get(key).cloned())
	}

	async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
		let mut values = self.values.write().await;
		values.insert(key.to_string(), value.to_string());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_memory_store_roundtrip() {
		let store = MemoryPreferenceStore::new();
		assert!(store.get("pancakeswap_lang").await.unwrap().is_none());

		store.set("pancakeswap_lang", "ja").await.unwrap();
		assert_eq!(
			store.get("pancakeswap_lang").await.unwrap().as_deref(),
			Some("ja")
		);
	}

	#[tokio::test]
	async fn test_memory_store_with_value() {
		let store = MemoryPreferenceStore::with_value("pancakeswap_lang", "fr");
		assert_eq!(
			store.get("pancakeswap_lang").await.unwrap().as_deref(),
			Some("fr")
		);
	}

	#[tokio::test]
	async fn test_file_store_missing_file_reads_empty() {
		let temp_dir = tempfile::tempdir().unwrap();
		let store = FilePreferenceStore::new(temp_dir.path().join("prefs.json"));

		assert!(store.get("pancakeswap_lang").await.unwrap().is_none());
		assert!(store.read_all().await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_file_store_roundtrip_creates_parents() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("nested/dir/prefs.json");
		let store = FilePreferenceStore::new(&path);

		store.set("pancakeswap_lang", "de").await.unwrap();
		assert!(path.exists());
		assert!(!path.with_extension("tmp").exists());

		let reopened = FilePreferenceStore::new(&path);
		assert_eq!(
			reopened.get("pancakeswap_lang").await.unwrap().as_deref(),
			Some("de")
		);
	}

	#[tokio::test]
	async fn test_file_store_keeps_other_keys() {
		let temp_dir = tempfile::tempdir().unwrap();
		let store = FilePreferenceStore::new(temp_dir.path().join("prefs.json"));

		store.set("theme", "dark").await.unwrap();
		store.set("pancakeswap_lang", "ko").await.unwrap();
		store.set("pancakeswap_lang", "vi").await.unwrap();

		let all = store.read_all().await.unwrap();
		assert_eq!(all.len(), 2);
		assert_eq!(all.get("theme").map(String::as_str), Some("dark"));
		assert_eq!(all.get("pancakeswap_lang").map(String::as_str), Some("vi"));
	}

	#[tokio::test]
	async fn test_file_store_corrupt_file_is_error() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("prefs.json");
		std::fs::write(&path, "{not json").unwrap();

		let store = FilePreferenceStore::new(&path);
		let err = store.get("pancakeswap_lang").await.unwrap_err();
		assert!(matches!(err, PreferenceError::Serde(_)));
	}
}
