// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime localization for Lingo.
//!
//! [`LocalizationStore`] is created once at the application root and shared by
//! cloning. It tracks the selected language, fetches that language's strings
//! from a [`TranslationSource`], persists the selection in a
//! [`PreferenceStore`] and answers lookups synchronously.
//!
//! # Features
//!
//! - **Never-failing lookups**: `t` falls back to the last shown text, then to
//!   the caller's fallback
//! - **Persisted selection**: the language code survives restarts
//! - **Observable state**: [`LocalizationStore::subscribe`] yields every transition
//! - **Fetch hook**: successes and failures are reported through [`FetchHook`]
//!
//! # Example
//!
//! ```ignore
//! use lingo_crowdin::CrowdinClient;
//! use lingo_i18n::{InterpolationData, LocalizationStore};
//! use lingo_i18n_prefs::FilePreferenceStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = LocalizationStore::builder()
//!         .source(CrowdinClient::new("token")?)
//!         .preferences(FilePreferenceStore::new("/tmp/lingo/preferences.json"))
//!         .project_id(12)
//!         .file_id(34)
//!         .build()
//!         .await?;
//!
//!     store.settle().await;
//!     println!("{}", store.t(1, "Connect Wallet"));
//!
//!     store.set_language_by_code("fr").await;
//!     let data = InterpolationData::new().with("amount", 3);
//!     println!("{}", store.t_with(2, "Swap %amount% tokens", &data));
//!
//!     store.close();
//!     Ok(())
//! }
//! ```
//!
//! [`TranslationSource`]: lingo_i18n_core::TranslationSource
//! [`PreferenceStore`]: lingo_i18n_prefs::PreferenceStore

mod error;
mod hook;
mod store;

pub use error::{Result, StoreError};
pub use hook::{FetchFailure, FetchHook, FetchOutcome, NoOpFetchHook, SharedFetchHook};
pub use store::{LocalizationStore, LocalizationStoreBuilder};

// Re-export core types for convenience
pub use lingo_i18n_core::{
	InterpolationData, Language, LanguageCode, LocalizationState, StringId, TranslationRecord,
	TranslationSet, LANGUAGES,
};
