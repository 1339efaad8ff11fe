// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Last-known-good text per string id.
//!
//! While a newly selected language is being fetched there is no translation
//! set to read from. Rather than flashing the fallback literal, lookups show the
//! text last resolved for the same string id, whatever language it was in.
//!
//! This cache is not part of [`LocalizationState`](crate::LocalizationState):
//! it is written directly by [`translate`](crate::translate) and never goes
//! through the state dispatcher. Nothing should treat it as authoritative.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::record::StringId;

#[derive(Debug, Default)]
pub struct InterimCache {
	entries: Mutex<HashMap<StringId, String>>,
}

impl InterimCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the last resolved text for `string_id`.
	///
	/// An empty string counts as nothing cached.
	pub fn get(&self, string_id: StringId) -> Option<String> {
		self
			.lock()
			.get(&string_id)
			.filter(|text| !text.is_empty())
			.cloned()
	}

	pub fn record(&self, string_id: StringId, text: &str) {
		let mut entries = self.lock();
		match entries.get_mut(&string_id) {
			Some(existing) if existing == text => {}
			Some(existing) => text.clone_into(existing),
			None => {
				entries.insert(string_id, text.to_string());
			}
		}
	}

	/// Returns the cached text, or `fallback` when nothing usable is cached.
	pub fn get_or(&self, string_id: StringId, fallback: &str) -> String {
		self.get(string_id).unwrap_or_else(|| fallback.to_string())
	}

	fn lock(&self) -> MutexGuard<'_, HashMap<StringId, String>> {
		// Entries are independent strings, so a poisoned lock is still usable.
		self
			.entries
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_or_falls_back_when_empty() {
		let cache = InterimCache::new();
		assert_eq!(cache.get_or(1, "fallback"), "fallback");

		cache.record(1, "Hello");
		assert_eq!(cache.get_or(1, "fallback"), "Hello");
	}

	#[test]
	fn test_record_overwrites() {
		let cache = InterimCache::new();
		cache.record(1, "Hello");
		cache.record(1, "Bonjour");
		assert_eq!(cache.get(1).as_deref(), Some("Bonjour"));
	}

	#[test]
	fn test_empty_text_counts_as_missing() {
		let cache = InterimCache::new();
		cache.record(5, "");
		assert!(cache.get(5).is_none());
		assert_eq!(cache.get_or(5, "fb"), "fb");
	}

	#[test]
	fn test_entries_are_independent() {
		let cache = InterimCache::new();
		cache.record(1, "a");
		cache.record(2, "b");
		assert_eq!(cache.get_or(1, "fb"), "a");
		assert_eq!(cache.get_or(2, "fb"), "b");
		assert_eq!(cache.get_or(3, "fb"), "fb");
	}
}
