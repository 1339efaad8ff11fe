// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Fetch outcome notifications.
//!
//! The store never surfaces fetch errors to callers of [`t`](crate::LocalizationStore::t).
//! A [`FetchHook`] is how an application observes them anyway: every completed
//! fetch reports either a [`FetchOutcome`] or a [`FetchFailure`].
//!
//! # Example
//!
//! ```ignore
//! use lingo_i18n::{FetchFailure, FetchHook, FetchOutcome, LocalizationStore};
//! use async_trait::async_trait;
//!
//! struct Metrics;
//!
//! #[async_trait]
//! impl FetchHook for Metrics {
//!     async fn on_fetch_succeeded(&self, outcome: FetchOutcome) {
//!         println!("{} strings for {}", outcome.record_count, outcome.language);
//!     }
//!
//!     async fn on_fetch_failed(&self, failure: FetchFailure) {
//!         eprintln!("fetch for {} failed: {}", failure.language, failure.error);
//!     }
//! }
//!
//! let store = LocalizationStore::builder()
//!     .source(client)
//!     .preferences(prefs)
//!     .project_id(12)
//!     .file_id(34)
//!     .fetch_hook(Metrics)
//!     .build()
//!     .await?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lingo_i18n_core::LanguageCode;
use serde::{Deserialize, Serialize};

/// A fetch that completed and was applied to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchOutcome {
	/// Language the set was fetched for.
	pub language: LanguageCode,

	/// Number of distinct strings in the applied set.
	pub record_count: usize,

	pub timestamp: DateTime<Utc>,
}

impl FetchOutcome {
	pub fn new(language: LanguageCode, record_count: usize) -> Self {
		Self {
			language,
			record_count,
			timestamp: Utc::now(),
		}
	}
}

/// A fetch that failed; the store state was left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
	pub language: LanguageCode,

	/// Rendered source error.
	pub error: String,

	pub timestamp: DateTime<Utc>,
}

impl FetchFailure {
	pub fn new(language: LanguageCode, error: impl Into<String>) -> Self {
		Self {
			language,
			error: error.into(),
			timestamp: Utc::now(),
		}
	}
}

/// Receives the result of every translation fetch.
///
/// Called on the fetch task after the state has been updated. Keep
/// implementations fast; queue anything expensive.
#[async_trait]
pub trait FetchHook: Send + Sync + 'static {
	async fn on_fetch_succeeded(&self, outcome: FetchOutcome);

	async fn on_fetch_failed(&self, failure: FetchFailure);
}

/// Type alias for a shared fetch hook.
pub type SharedFetchHook = Arc<dyn FetchHook>;

/// Discards every notification. Used when no hook is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpFetchHook;

#[async_trait]
impl FetchHook for NoOpFetchHook {
	async fn on_fetch_succeeded(&self, _outcome: FetchOutcome) {}

	async fn on_fetch_failed(&self, _failure: FetchFailure) {}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[test]
	fn fetch_outcome_new_stamps_time() {
		let before = Utc::now();
		let outcome = FetchOutcome::new(LanguageCode::Fr, 42);
		assert_eq!(outcome.language, LanguageCode::Fr);
		assert_eq!(outcome.record_count, 42);
		assert!(outcome.timestamp >= before);
	}

	#[test]
	fn fetch_failure_serializes_language_id() {
		let failure = FetchFailure::new(LanguageCode::ZhCn, "unauthorized");
		let json = serde_json::to_value(&failure).unwrap();
		assert_eq!(json["language"], "zh-CN");
		assert_eq!(json["error"], "unauthorized");
		assert!(json["timestamp"].is_string());
	}

	#[test]
	fn noop_hook_accepts_everything() {
		tokio_test::block_on(async {
			let hook = NoOpFetchHook;
			hook.on_fetch_succeeded(FetchOutcome::new(LanguageCode::En, 1))
				.await;
			hook.on_fetch_failed(FetchFailure::new(LanguageCode::En, "boom"))
				.await;
		});
	}

	struct CountingHook {
		succeeded: AtomicUsize,
		failed: AtomicUsize,
	}

	#[async_trait]
	impl FetchHook for CountingHook {
		async fn on_fetch_succeeded(&self, _outcome: FetchOutcome) {
			self.succeeded.fetch_add(1, Ordering::SeqCst);
		}

		async fn on_fetch_failed(&self, _failure: FetchFailure) {
			self.failed.fetch_add(1, Ordering::SeqCst);
		}
	}

	#[test]
	fn shared_hook_dispatches_dynamically() {
		let counting = Arc::new(CountingHook {
			succeeded: AtomicUsize::new(0),
			failed: AtomicUsize::new(0),
		});
		let shared: SharedFetchHook = counting.clone();

		tokio_test::block_on(async {
			shared
				.on_fetch_succeeded(FetchOutcome::new(LanguageCode::De, 3))
				.await;
			shared
				.on_fetch_failed(FetchFailure::new(LanguageCode::De, "timeout"))
				.await;
			shared
				.on_fetch_failed(FetchFailure::new(LanguageCode::It, "timeout"))
				.await;
		});

		assert_eq!(counting.succeeded.load(Ordering::SeqCst), 1);
		assert_eq!(counting.failed.load(Ordering::SeqCst), 2);
	}
}
