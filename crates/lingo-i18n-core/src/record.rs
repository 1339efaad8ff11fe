// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation records and per-language translation sets.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a source string in the translation project.
pub type StringId = u64;

/// A single translated string as returned by the translation service.
///
/// Only the fields the lookup needs are kept; other remote metadata is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
	pub string_id: StringId,
	pub text: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub translation_id: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub content_type: Option<String>,
}

impl TranslationRecord {
	pub fn new(string_id: StringId, text: impl Into<String>) -> Self {
		Self {
			string_id,
			text: text.into(),
			translation_id: None,
			content_type: None,
		}
	}
}

/// All translations fetched for one language, keyed by string id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationSet {
	records: HashMap<StringId, TranslationRecord>,
}

impl TranslationSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a set from records in response order.
	///
	/// When a string id appears more than once the last record wins.
	pub fn from_records(records: impl IntoIterator<Item = TranslationRecord>) -> Self {
		let mut set = Self::new();
		for record in records {
			set.records.insert(record.string_id, record);
		}
		set
	}

	pub fn get(&self, string_id: StringId) -> Option<&TranslationRecord> {
		self.records.get(&string_id)
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl FromIterator<TranslationRecord> for TranslationSet {
	fn from_iter<I: IntoIterator<Item = TranslationRecord>>(iter: I) -> Self {
		Self::from_records(iter)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_last_record_wins_on_duplicate_id() {
		let set = TranslationSet::from_records(vec![
			TranslationRecord::new(7, "first"),
			TranslationRecord::new(8, "other"),
			TranslationRecord::new(7, "second"),
		]);

		assert_eq!(set.len(), 2);
		assert_eq!(set.get(7).map(|r| r.text.as_str()), Some("second"));
		assert_eq!(set.get(8).map(|r| r.text.as_str()), Some("other"));
	}

	#[test]
	fn test_empty_set() {
		let set = TranslationSet::from_records(Vec::new());
		assert!(set.is_empty());
		assert!(set.get(1).is_none());
	}

	#[test]
	fn test_record_ignores_unknown_metadata() {
		let json = r#"{
			"stringId": 42,
			"contentType": "text/plain",
			"translationId": 190695,
			"text": "Bonjour",
			"user": { "id": 19, "username": "john_smith" },
			"createdAt": "2023-09-20T11:05:24+00:00"
		}"#;

		let record: TranslationRecord = serde_json::from_str(json).unwrap();
		assert_eq!(record.string_id, 42);
		assert_eq!(record.text, "Bonjour");
		assert_eq!(record.translation_id, Some(190695));
		assert_eq!(record.content_type.as_deref(), Some("text/plain"));
	}
}

#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn set_keeps_last_text_per_id(
			records in prop::collection::vec((0u64..20, "[a-zA-Z ]{0,12}"), 0..60)
		) {
			let set: TranslationSet = records
				.iter()
				.map(|(id, text)| TranslationRecord::new(*id, text.clone()))
				.collect();

			let mut expected: HashMap<u64, &str> = HashMap::new();
			for (id, text) in &records {
				expected.insert(*id, text.as_str());
			}

			prop_assert_eq!(set.len(), expected.len());
			for (id, text) in expected {
				prop_assert_eq!(set.get(id).map(|r| r.text.as_str()), Some(text));
			}
		}
	}
}
