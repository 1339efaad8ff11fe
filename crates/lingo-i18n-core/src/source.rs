// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The remote source translations are fetched from.

use async_trait::async_trait;
use thiserror::Error;

use crate::language::LanguageCode;
use crate::record::TranslationRecord;

/// Parameters of a "list translations for project/file/language" call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationQuery {
	pub project_id: u64,
	pub language: LanguageCode,
	pub file_id: u64,
	/// Maximum number of records to return.
	pub limit: u32,
}

/// Errors a translation source can report.
#[derive(Debug, Error)]
pub enum SourceError {
	/// The access token was rejected.
	#[error("translation source rejected the access token")]
	Unauthorized,

	/// The project, file or language does not exist.
	#[error("translation source has no such resource: {0}")]
	NotFound(String),

	/// Rate limited.
	#[error("rate limited by translation source (retry after {retry_after_secs:?}s)")]
	RateLimited { retry_after_secs: Option<u64> },

	/// Non-success response not covered above.
	#[error("translation source error: {status} - {message}")]
	Server { status: u16, message: String },

	/// The request never produced a response.
	#[error("transport error: {0}")]
	Transport(String),

	/// The response could not be understood.
	#[error("invalid response from translation source: {0}")]
	InvalidResponse(String),
}

/// A remote provider of translation records.
///
/// Implementations return records in the order the provider sent them;
/// callers rely on that order to resolve duplicate string ids.
#[async_trait]
pub trait TranslationSource: Send + Sync + 'static {
	async fn list_translations(
		&self,
		query: &TranslationQuery,
	) -> Result<Vec<TranslationRecord>, SourceError>;
}
