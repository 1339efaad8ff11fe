// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core localization model for Lingo.
//!
//! This crate holds everything about runtime localization that does not touch
//! the network or the disk:
//!
//! - the static registry of supported languages ([`LANGUAGES`])
//! - translation records and per-language sets ([`TranslationSet`])
//! - the localization state machine ([`LocalizationState`], [`Action`])
//! - the interim cache used while a language switch is in flight
//! - `%key%` interpolation and the lookup policy ([`translate`])
//! - the [`TranslationSource`] seam implemented by remote backends
//!
//! # Example
//!
//! ```
//! use lingo_i18n_core::{translate, InterimCache, InterpolationData, TranslationRecord, TranslationSet};
//!
//! let set = TranslationSet::from_records(vec![
//!     TranslationRecord::new(1, "Hello"),
//!     TranslationRecord::new(2, "Hi %name%"),
//! ]);
//! let interim = InterimCache::new();
//!
//! assert_eq!(translate(Some(&set), &interim, 1, "fallback", None), "Hello");
//! assert_eq!(translate(Some(&set), &interim, 3, "fallback", None), "fallback");
//!
//! let data = InterpolationData::new().with("name", "Sam");
//! assert_eq!(translate(Some(&set), &interim, 2, "fb", Some(&data)), "Hi Sam");
//! ```

mod interim;
mod interpolate;
mod language;
mod record;
mod source;
mod state;
mod translate;

pub use interim::InterimCache;
pub use interpolate::{interpolate, InterpolationData, TEMPLATE_DELIMITER};
pub use language::{
	find_language, language_for, LanguageCode, Language, UnknownLanguageCode, DEFAULT_LANGUAGE,
	EN, LANGUAGES,
};
pub use record::{StringId, TranslationRecord, TranslationSet};
pub use source::{SourceError, TranslationQuery, TranslationSource};
pub use state::{Action, LocalizationState};
pub use translate::translate;

/// Upper bound on the number of records requested per language fetch.
pub const MAX_RECORDS_TO_FETCH: u32 = 300;

/// Key under which the selected language code is persisted.
pub const LANGUAGE_PREFERENCE_KEY: &str = "pancakeswap_lang";
