// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localization state and the transitions that mutate it.
//!
//! State only changes through [`LocalizationState::reduce`]. The store feeds it
//! one [`Action`] at a time, so transitions are applied in dispatch order.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::language::{find_language, language_for, Language, LanguageCode};
use crate::record::TranslationSet;

/// A state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
	/// The user picked a different language.
	SetLanguage(&'static Language),
	/// A fetch for some language has started.
	FetchStart,
	/// A fetch completed; its set replaces whatever was held for `code`.
	FetchSucceeded {
		code: LanguageCode,
		translations: Arc<TranslationSet>,
	},
}

/// Canonical localization state.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizationState {
	pub is_fetching: bool,
	pub current_language: &'static Language,
	pub translations: HashMap<LanguageCode, Arc<TranslationSet>>,
}

impl LocalizationState {
	/// Resolves the state a store starts with.
	///
	/// A persisted code is adopted only when it names a registered language;
	/// anything else (missing, empty, unknown) yields `default`.
	pub fn initial(default: LanguageCode, persisted: Option<&str>) -> Self {
		let current_language = match persisted.map(|code| (code, find_language(code))) {
			Some((_, Some(language))) => language,
			Some((code, None)) => {
				debug!(persisted = code, default = %default, "Ignoring unsupported persisted language");
				language_for(default)
			}
			None => language_for(default),
		};

		Self {
			is_fetching: true,
			current_language,
			translations: HashMap::new(),
		}
	}

	/// Applies one transition.
	pub fn reduce(&mut self, action: Action) {
		match action {
			Action::SetLanguage(language) => {
				self.current_language = language;
			}
			Action::FetchStart => {
				self.is_fetching = true;
			}
			Action::FetchSucceeded { code, translations } => {
				self.translations.insert(code, translations);
				self.is_fetching = false;
			}
		}
	}

	/// The set for the current language, if it has been fetched.
	pub fn current_translations(&self) -> Option<&TranslationSet> {
		self
			.translations
			.get(&self.current_language.code)
			.map(Arc::as_ref)
	}

	pub fn translations_for(&self, code: LanguageCode) -> Option<&Arc<TranslationSet>> {
		self.translations.get(&code)
	}
}
