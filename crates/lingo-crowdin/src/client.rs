// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Crowdin API client implementation.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use lingo_i18n_core::{SourceError, TranslationQuery, TranslationRecord, TranslationSource};
use reqwest::{Client, StatusCode};
use tracing::{debug, error, instrument, trace};
use zeroize::Zeroizing;

use crate::error::CrowdinError;
use crate::types::ListTranslationsResponse;

pub const DEFAULT_BASE_URL: &str = "https://api.crowdin.com/api/v2";

/// Client for the Crowdin string translations API.
#[derive(Clone)]
pub struct CrowdinClient {
	http_client: Client,
	access_token: Zeroizing<String>,
	base_url: String,
}

impl fmt::Debug for CrowdinClient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CrowdinClient")
			.field("base_url", &self.base_url)
			.field("access_token", &"[REDACTED]")
			.finish()
	}
}

impl CrowdinClient {
	/// Creates a client that relies on the transport's default timeouts.
	pub fn new(access_token: impl Into<String>) -> Result<Self, CrowdinError> {
		Self::from_builder(access_token, crate::http::builder())
	}

	/// Creates a client whose requests give up after `timeout`.
	pub fn with_timeout(
		access_token: impl Into<String>,
		timeout: Duration,
	) -> Result<Self, CrowdinError> {
		Self::from_builder(access_token, crate::http::builder().timeout(timeout))
	}

	fn from_builder(
		access_token: impl Into<String>,
		builder: reqwest::ClientBuilder,
	) -> Result<Self, CrowdinError> {
		Ok(Self {
			http_client: builder.build()?,
			access_token: Zeroizing::new(access_token.into()),
			base_url: DEFAULT_BASE_URL.to_string(),
		})
	}

	/// Sets a custom base URL for the API (useful for testing and enterprise hosts).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into().trim_end_matches('/').to_string();
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Lists the translations of `file_id` in `language_id`, at most `limit` records.
	///
	/// Records are returned in response order. Plural entries, which carry no
	/// plain text, are skipped.
	#[instrument(skip(self), fields(base_url = %self.base_url))]
	pub async fn list_language_translations(
		&self,
		project_id: u64,
		language_id: &str,
		file_id: u64,
		limit: u32,
	) -> Result<Vec<TranslationRecord>, CrowdinError> {
		let url = format!(
			"{}/projects/{}/languages/{}/translations",
			self.base_url, project_id, language_id
		);

		debug!(url = %url, "Requesting language translations from Crowdin");

		let response = self
			.http_client
			.get(&url)
			.bearer_auth(self.access_token.as_str())
			.query(&[("fileId", file_id.to_string()), ("limit", limit.to_string())])
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return CrowdinError::Timeout;
				}
				error!(error = %e, "Network error during Crowdin request");
				CrowdinError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from Crowdin");

		if !status.is_success() {
			return Err(Self::status_error(response).await);
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			CrowdinError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let parsed: ListTranslationsResponse = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse Crowdin response");
			CrowdinError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		let mut records = Vec::with_capacity(parsed.data.len());
		for wrapper in parsed.data {
			let string_id = wrapper.data.string_id;
			match wrapper.data.into_record() {
				Some(record) => records.push(record),
				None => debug!(string_id, "Skipping translation without plain text"),
			}
		}

		debug!(record_count = records.len(), "Listed language translations");

		Ok(records)
	}

	async fn status_error(response: reqwest::Response) -> CrowdinError {
		let status = response.status();
		let retry_after = response
			.headers()
			.get(reqwest::header::RETRY_AFTER)
			.and_then(|v| v.to_str().ok())
			.and_then(|s| s.parse().ok());
		let body = response.text().await.unwrap_or_default();

		match status {
			StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
				error!(status = status.as_u16(), "Unauthorized request");
				CrowdinError::Unauthorized
			}
			StatusCode::NOT_FOUND => {
				error!(status = status.as_u16(), body = %body, "Crowdin resource not found");
				CrowdinError::NotFound(body)
			}
			StatusCode::TOO_MANY_REQUESTS => {
				error!(status = status.as_u16(), "Rate limit exceeded");
				CrowdinError::RateLimited {
					retry_after_secs: retry_after,
				}
			}
			_ => {
				error!(status = status.as_u16(), body = %body, "Crowdin API error");
				CrowdinError::ApiError {
					status: status.as_u16(),
					message: body,
				}
			}
		}
	}
}

#[async_trait]
impl TranslationSource for CrowdinClient {
	async fn list_translations(
		&self,
		query: &TranslationQuery,
	) -> Result<Vec<TranslationRecord>, SourceError> {
		self
			.list_language_translations(
				query.project_id,
				query.language.as_str(),
				query.file_id,
				query.limit,
			)
			.await
			.map_err(SourceError::from)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_client_creation() {
		let client = CrowdinClient::new("test-token").unwrap();
		assert_eq!(client.access_token.as_str(), "test-token");
		assert_eq!(client.base_url, DEFAULT_BASE_URL);
	}

	#[test]
	fn test_with_base_url_trims_trailing_slash() {
		let client = CrowdinClient::new("token")
			.unwrap()
			.with_base_url("https://acme.api.crowdin.com/api/v2/");
		assert_eq!(client.base_url(), "https://acme.api.crowdin.com/api/v2");
	}

	#[test]
	fn test_debug_redacts_token() {
		let client = CrowdinClient::with_timeout("very-secret", Duration::from_secs(3)).unwrap();
		let debug = format!("{client:?}");
		assert!(!debug.contains("very-secret"));
		assert!(debug.contains("[REDACTED]"));
	}

	#[test]
	fn test_clones_share_token_value() {
		let client = CrowdinClient::new(String::from("pat-123")).unwrap();
		let cloned = client.clone();
		drop(client);
		assert_eq!(cloned.access_token.as_str(), "pat-123");
	}
}

#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn base_url_never_ends_with_slash(
			protocol in prop_oneof![Just("http"), Just("https")],
			domain in "[a-z]{3,10}\\.[a-z]{2,4}",
			slashes in 0usize..3,
		) {
			let url = format!("{}://{}/api/v2{}", protocol, domain, "/".repeat(slashes));
			let client = CrowdinClient::new("token").unwrap().with_base_url(url);
			prop_assert!(!client.base_url().ends_with('/'));
		}
	}
}
