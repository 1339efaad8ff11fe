// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The lookup policy behind `t()`.

use crate::interim::InterimCache;
use crate::interpolate::{interpolate, InterpolationData, TEMPLATE_DELIMITER};
use crate::record::{StringId, TranslationSet};

/// Resolves the text to display for `string_id`.
///
/// `set` is the translation set of the current language, `None` while it has
/// not been fetched. Resolution order:
///
/// 1. No set yet: the interim text for `string_id`, else `fallback`.
/// 2. Set without an entry for `string_id`: `fallback`. The interim text is
///    deliberately not consulted here.
/// 3. Entry containing `%`: without `data`, same as case 1; with `data`, every
///    `%key%` is substituted and unknown placeholders are left in place.
/// 4. Plain entry: recorded as the interim text and returned.
pub fn translate(
	set: Option<&TranslationSet>,
	interim: &InterimCache,
	string_id: StringId,
	fallback: &str,
	data: Option<&InterpolationData>,
) -> String {
	let Some(set) = set else {
		return interim.get_or(string_id, fallback);
	};

	let Some(record) = set.get(string_id) else {
		return fallback.to_string();
	};

	let text = record.text.as_str();

	if text.contains(TEMPLATE_DELIMITER) {
		return match data {
			Some(data) => interpolate(text, data),
			None => interim.get_or(string_id, fallback),
		};
	}

	interim.record(string_id, text);
	text.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::record::TranslationRecord;

	fn set_of(records: &[(u64, &str)]) -> TranslationSet {
		records
			.iter()
			.map(|(id, text)| TranslationRecord::new(*id, *text))
			.collect()
	}

	#[test]
	fn test_no_set_returns_fallback() {
		let interim = InterimCache::new();
		assert_eq!(translate(None, &interim, 1, "fallback", None), "fallback");
	}

	#[test]
	fn test_no_set_prefers_interim() {
		let interim = InterimCache::new();
		interim.record(1, "Hello");
		assert_eq!(translate(None, &interim, 1, "fallback", None), "Hello");
	}

	#[test]
	fn test_found_and_missing() {
		let set = set_of(&[(1, "Hello")]);
		let interim = InterimCache::new();

		assert_eq!(translate(Some(&set), &interim, 1, "fallback", None), "Hello");
		assert_eq!(translate(Some(&set), &interim, 2, "fallback", None), "fallback");
	}

	#[test]
	fn test_missing_entry_ignores_interim() {
		let set = set_of(&[(1, "Hola")]);
		let interim = InterimCache::new();
		interim.record(2, "Stale");

		assert_eq!(translate(Some(&set), &interim, 2, "fallback", None), "fallback");
	}

	#[test]
	fn test_plain_text_is_recorded_as_interim() {
		let set = set_of(&[(1, "Hello")]);
		let interim = InterimCache::new();

		translate(Some(&set), &interim, 1, "fallback", None);
		assert_eq!(interim.get(1).as_deref(), Some("Hello"));

		// After switching to a language that is still loading.
		assert_eq!(translate(None, &interim, 1, "fallback", None), "Hello");
	}

	#[test]
	fn test_template_with_data() {
		let set = set_of(&[(1, "Hi %name%")]);
		let interim = InterimCache::new();
		let data = InterpolationData::new().with("name", "Sam");

		assert_eq!(translate(Some(&set), &interim, 1, "fb", Some(&data)), "Hi Sam");
	}

	#[test]
	fn test_template_without_data_degrades() {
		let set = set_of(&[(1, "Hi %name%")]);
		let interim = InterimCache::new();

		assert_eq!(translate(Some(&set), &interim, 1, "fb", None), "fb");

		interim.record(1, "Hello");
		assert_eq!(translate(Some(&set), &interim, 1, "fb", None), "Hello");
	}

	#[test]
	fn test_template_is_never_recorded_as_interim() {
		let set = set_of(&[(1, "Hi %name%")]);
		let interim = InterimCache::new();
		let data = InterpolationData::new().with("name", "Sam");

		translate(Some(&set), &interim, 1, "fb", Some(&data));
		assert!(interim.get(1).is_none());
	}

	#[test]
	fn test_residual_placeholders_kept() {
		let set = set_of(&[(1, "%amount% %symbol% staked")]);
		let interim = InterimCache::new();
		let data = InterpolationData::new().with("amount", 10);

		assert_eq!(
			translate(Some(&set), &interim, 1, "fb", Some(&data)),
			"10 %symbol% staked"
		);
	}

	#[test]
	fn test_lone_percent_is_treated_as_template() {
		let set = set_of(&[(1, "100%")]);
		let interim = InterimCache::new();

		assert_eq!(translate(Some(&set), &interim, 1, "fb", None), "fb");
		assert_eq!(
			translate(Some(&set), &interim, 1, "fb", Some(&InterpolationData::new())),
			"100%"
		);
	}
}
