// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Wire types of the Crowdin "list language translations" endpoint.

use lingo_i18n_core::{StringId, TranslationRecord};
use serde::Deserialize;

/// Response envelope: `{ "data": [ { "data": { ... } } ], "pagination": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct ListTranslationsResponse {
	#[serde(default)]
	pub data: Vec<DataWrapper>,
	#[serde(default)]
	pub pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
pub struct DataWrapper {
	pub data: LanguageTranslation,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct Pagination {
	pub offset: u32,
	pub limit: u32,
}

/// One translation as Crowdin describes it.
///
/// Plural strings carry `plurals` instead of `text`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageTranslation {
	pub string_id: StringId,
	#[serde(default)]
	pub content_type: Option<String>,
	#[serde(default)]
	pub translation_id: Option<u64>,
	#[serde(default)]
	pub text: Option<String>,
}

impl LanguageTranslation {
	/// Converts to a lookup record; `None` for entries without plain text.
	pub fn into_record(self) -> Option<TranslationRecord> {
		let text = self.text?;
		Some(TranslationRecord {
			string_id: self.string_id,
			text,
			translation_id: self.translation_id,
			content_type: self.content_type,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_envelope() {
		let body = r#"{
			"data": [
				{ "data": { "stringId": 1, "contentType": "text/plain", "translationId": 10, "text": "Bonjour", "user": { "id": 12 } } },
				{ "data": { "stringId": 2, "contentType": "application/vnd.crowdin.text+plural", "plurals": [] } }
			],
			"pagination": { "offset": 0, "limit": 300 }
		}"#;

		let response: ListTranslationsResponse = serde_json::from_str(body).unwrap();
		assert_eq!(response.data.len(), 2);
		assert_eq!(
			response.pagination,
			Some(Pagination {
				offset: 0,
				limit: 300
			})
		);

		let records: Vec<_> = response
			.data
			.into_iter()
			.filter_map(|w| w.data.into_record())
			.collect();
		assert_eq!(records.len(), 1);
		assert_eq!(records[0].string_id, 1);
		assert_eq!(records[0].text, "Bonjour");
		assert_eq!(records[0].translation_id, Some(10));
	}

	#[test]
	fn test_parse_empty_envelope() {
		let response: ListTranslationsResponse = serde_json::from_str("{}").unwrap();
		assert!(response.data.is_empty());
		assert!(response.pagination.is_none());
	}
}
