// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The localization store: current language, fetched translations and lookup.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use lingo_i18n_core::{
	find_language, translate, Action, InterimCache, InterpolationData, Language,
	LanguageCode, LocalizationState, SourceError, StringId, TranslationQuery, TranslationSet,
	TranslationSource, DEFAULT_LANGUAGE, LANGUAGES, LANGUAGE_PREFERENCE_KEY, MAX_RECORDS_TO_FETCH,
};
use lingo_i18n_prefs::PreferenceStore;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use crate::error::{Result, StoreError};
use crate::hook::{FetchFailure, FetchHook, FetchOutcome, NoOpFetchHook, SharedFetchHook};

/// Builder for constructing a [`LocalizationStore`].
pub struct LocalizationStoreBuilder {
	source: Option<Arc<dyn TranslationSource>>,
	preferences: Option<Arc<dyn PreferenceStore>>,
	project_id: Option<u64>,
	file_id: Option<u64>,
	initial_language: LanguageCode,
	fetch_hook: Option<SharedFetchHook>,
}

impl LocalizationStoreBuilder {
	pub fn new() -> Self {
		Self {
			source: None,
			preferences: None,
			project_id: None,
			file_id: None,
			initial_language: DEFAULT_LANGUAGE,
			fetch_hook: None,
		}
	}

	/// Sets the backend translations are fetched from.
	pub fn source<S: TranslationSource>(mut self, source: S) -> Self {
		self.source = Some(Arc::new(source));
		self
	}

	pub fn shared_source(mut self, source: Arc<dyn TranslationSource>) -> Self {
		self.source = Some(source);
		self
	}

	/// Sets where the selected language is persisted.
	pub fn preferences<P: PreferenceStore + 'static>(mut self, preferences: P) -> Self {
		self.preferences = Some(Arc::new(preferences));
		self
	}

	pub fn shared_preferences(mut self, preferences: Arc<dyn PreferenceStore>) -> Self {
		self.preferences = Some(preferences);
		self
	}

	pub fn project_id(mut self, project_id: u64) -> Self {
		self.project_id = Some(project_id);
		self
	}

	pub fn file_id(mut self, file_id: u64) -> Self {
		self.file_id = Some(file_id);
		self
	}

	/// Language used when nothing valid has been persisted. Defaults to English.
	pub fn initial_language(mut self, code: LanguageCode) -> Self {
		self.initial_language = code;
		self
	}

	pub fn fetch_hook<H: FetchHook>(mut self, hook: H) -> Self {
		self.fetch_hook = Some(Arc::new(hook));
		self
	}

	pub fn shared_fetch_hook(mut self, hook: SharedFetchHook) -> Self {
		self.fetch_hook = Some(hook);
		self
	}

	/// Builds the store and starts fetching the initial language.
	///
	/// Must be called from within a tokio runtime. The persisted language is
	/// read first; an unreadable or unknown value falls back to the initial
	/// language.
	pub async fn build(self) -> Result<LocalizationStore> {
		let source = self.source.ok_or(StoreError::MissingSource)?;
		let preferences = self.preferences.ok_or(StoreError::MissingPreferences)?;
		let project_id = self
			.project_id
			.filter(|id| *id != 0)
			.ok_or(StoreError::InvalidProjectId)?;
		let file_id = self
			.file_id
			.filter(|id| *id != 0)
			.ok_or(StoreError::InvalidFileId)?;

		let persisted = match preferences.get(LANGUAGE_PREFERENCE_KEY).await {
			Ok(value) => value,
			Err(e) => {
				warn!(error = %e, "Failed to read language preference, using default");
				None
			}
		};

		let state = LocalizationState::initial(self.initial_language, persisted.as_deref());
		let language = state.current_language.code;
		let (state_tx, _) = watch::channel(state);

		let store = LocalizationStore {
			inner: Arc::new(Inner {
				state: state_tx,
				interim: InterimCache::new(),
				source,
				preferences,
				project_id,
				file_id,
				fetch_hook: self
					.fetch_hook
					.unwrap_or_else(|| Arc::new(NoOpFetchHook)),
				tasks: Mutex::new(Vec::new()),
				closed: AtomicBool::new(false),
			}),
		};

		info!(
			language = %language,
			persisted = ?persisted,
			project_id,
			file_id,
			"Localization store initialized"
		);

		store.spawn_fetch(language);

		Ok(store)
	}
}

impl Default for LocalizationStoreBuilder {
	fn default() -> Self {
		Self::new()
	}
}

struct Inner {
	state: watch::Sender<LocalizationState>,
	interim: InterimCache,
	source: Arc<dyn TranslationSource>,
	preferences: Arc<dyn PreferenceStore>,
	project_id: u64,
	file_id: u64,
	fetch_hook: SharedFetchHook,
	tasks: Mutex<Vec<JoinHandle<()>>>,
	closed: AtomicBool,
}

/// Runtime localization for one application.
///
/// Holds the current language and every translation set fetched so far, and
/// answers `t` lookups against them. Cloning is cheap; clones share state.
///
/// Lookups never fail. Until the current language's set arrives, `t` returns
/// the text last shown for the same string (in any language) or the caller's
/// fallback.
#[derive(Clone)]
pub struct LocalizationStore {
	inner: Arc<Inner>,
}

impl LocalizationStore {
	pub fn builder() -> LocalizationStoreBuilder {
		LocalizationStoreBuilder::new()
	}

	/// Looks up `string_id` in the current language.
	pub fn t(&self, string_id: StringId, fallback: &str) -> String {
		self.lookup(string_id, fallback, None)
	}

	/// Looks up `string_id` and substitutes `%key%` placeholders from `data`.
	pub fn t_with(&self, string_id: StringId, fallback: &str, data: &InterpolationData) -> String {
		self.lookup(string_id, fallback, Some(data))
	}

	fn lookup(&self, string_id: StringId, fallback: &str, data: Option<&InterpolationData>) -> String {
		let state = self.inner.state.borrow();
		translate(
			state.current_translations(),
			&self.inner.interim,
			string_id,
			fallback,
			data,
		)
	}

	/// Switches the current language and persists the choice.
	///
	/// A fetch for the new language starts when the language actually changed,
	/// even if a set for it is already held. Persistence failures are logged.
	pub async fn set_language(&self, language: &'static Language) {
		let mut changed = false;
		self.inner.state.send_modify(|state| {
			changed = state.current_language.code != language.code;
			state.reduce(Action::SetLanguage(language));
		});

		if let Err(e) = self
			.inner
			.preferences
			.set(LANGUAGE_PREFERENCE_KEY, language.code.as_str())
			.await
		{
			warn!(language = %language.code, error = %e, "Failed to persist language preference");
		}

		if changed {
			info!(language = %language.code, "Language changed");
			self.spawn_fetch(language.code);
		} else {
			debug!(language = %language.code, "Language unchanged, skipping fetch");
		}
	}

	/// Switches language by its service id. Unknown ids are ignored.
	pub async fn set_language_by_code(&self, code: &str) {
		match find_language(code) {
			Some(language) => self.set_language(language).await,
			None => debug!(code, "Ignoring unknown language code"),
		}
	}

	/// Fetches the set for `language` and stores it.
	///
	/// On failure nothing past `FetchStart` is applied, so `is_fetching` stays
	/// set and held translations are kept. The fetch hook is notified either
	/// way. No retry is attempted.
	#[instrument(skip(self), fields(project_id = self.inner.project_id, file_id = self.inner.file_id))]
	pub async fn fetch_translations(&self, language: LanguageCode) {
		self.dispatch(Action::FetchStart);

		let query = TranslationQuery {
			project_id: self.inner.project_id,
			language,
			file_id: self.inner.file_id,
			limit: MAX_RECORDS_TO_FETCH,
		};

		match self.inner.source.list_translations(&query).await {
			Ok(records) => {
				let translations = Arc::new(TranslationSet::from_records(records));
				let record_count = translations.len();

				if self.current_language().code != language {
					debug!(
						current = %self.current_language().code,
						"Applying translations for a language that is no longer current"
					);
				}

				self.dispatch(Action::FetchSucceeded {
					code: language,
					translations,
				});
				info!(record_count, "Translations fetched");

				self
					.inner
					.fetch_hook
					.on_fetch_succeeded(FetchOutcome::new(language, record_count))
					.await;
			}
			Err(e) => {
				log_fetch_error(language, &e);
				self
					.inner
					.fetch_hook
					.on_fetch_failed(FetchFailure::new(language, e.to_string()))
					.await;
			}
		}
	}

	pub fn current_language(&self) -> &'static Language {
		self.inner.state.borrow().current_language
	}

	/// Every set fetched so far, keyed by language.
	pub fn translations(&self) -> HashMap<LanguageCode, Arc<TranslationSet>> {
		self.inner.state.borrow().translations.clone()
	}

	pub fn translations_for(&self, language: LanguageCode) -> Option<Arc<TranslationSet>> {
		self.inner.state.borrow().translations_for(language).cloned()
	}

	pub fn is_fetching(&self) -> bool {
		self.inner.state.borrow().is_fetching
	}

	/// The registry of supported languages.
	pub fn languages(&self) -> &'static [Language] {
		&LANGUAGES
	}

	/// Snapshot of the current state.
	pub fn state(&self) -> LocalizationState {
		self.inner.state.borrow().clone()
	}

	/// Receiver that observes every state transition.
	pub fn subscribe(&self) -> watch::Receiver<LocalizationState> {
		self.inner.state.subscribe()
	}

	/// Waits for every fetch started so far, including any started while waiting.
	pub async fn settle(&self) {
		loop {
			let pending = std::mem::take(&mut *self.tasks());
			if pending.is_empty() {
				return;
			}
			for handle in pending {
				if let Err(e) = handle.await {
					if e.is_panic() {
						error!(error = %e, "Translation fetch task panicked");
					}
				}
			}
		}
	}

	/// Aborts in-flight fetches. Later language changes no longer fetch.
	pub fn close(&self) {
		self.inner.closed.store(true, Ordering::SeqCst);
		let pending = std::mem::take(&mut *self.tasks());
		let aborted = pending.len();
		for handle in pending {
			handle.abort();
		}
		info!(aborted, "Localization store closed");
	}

	pub fn is_closed(&self) -> bool {
		self.inner.closed.load(Ordering::SeqCst)
	}

	fn dispatch(&self, action: Action) {
		self.inner.state.send_modify(|state| state.reduce(action));
	}

	fn spawn_fetch(&self, language: LanguageCode) {
		if self.is_closed() {
			debug!(language = %language, "Store closed, not fetching");
			return;
		}

		let store = self.clone();
		let handle = tokio::spawn(async move { store.fetch_translations(language).await });

		let mut tasks = self.tasks();
		tasks.retain(|task| !task.is_finished());
		tasks.push(handle);
	}

	fn tasks(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
		// Handles carry no invariants, so a poisoned lock is still usable.
		self
			.inner
			.tasks
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
	}
}

impl fmt::Debug for LocalizationStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.inner.state.borrow();
		f.debug_struct("LocalizationStore")
			.field("current_language", &state.current_language.code)
			.field("is_fetching", &state.is_fetching)
			.field("languages_loaded", &state.translations.len())
			.field("project_id", &self.inner.project_id)
			.field("file_id", &self.inner.file_id)
			.field("preferences", &self.inner.preferences)
			.finish()
	}
}

fn log_fetch_error(language: LanguageCode, e: &SourceError) {
	match e {
		SourceError::RateLimited { retry_after_secs } => {
			error!(language = %language, retry_after_secs = ?retry_after_secs, "Translation fetch rate limited");
		}
		_ => error!(language = %language, error = %e, "Failed to fetch translations"),
	}
}
