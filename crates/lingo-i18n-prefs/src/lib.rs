// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Persisted key-value storage for user preferences such as the selected language.
//!
//! # Features
//!
//! - **PreferenceStore trait**: string keys to string values, async get/set
//! - **FilePreferenceStore**: JSON file written atomically
//! - **MemoryPreferenceStore**: in-memory storage for tests and throwaway sessions
//!
//! # Example
//!
//! ```rust,no_run
//! use lingo_i18n_prefs::{FilePreferenceStore, PreferenceStore};
//!
//! # tokio_test::block_on(async {
//! let store = FilePreferenceStore::new("/tmp/lingo/preferences.json");
//!
//! store.set("pancakeswap_lang", "fr").await.unwrap();
//! assert_eq!(store.get("pancakeswap_lang").await.unwrap().as_deref(), Some("fr"));
//! # });
//! ```

mod error;
mod store;

pub use error::PreferenceError;
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PersistedPreferences, PreferenceStore};
