// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Crowdin API client.

use lingo_i18n_core::SourceError;
use thiserror::Error;

/// Errors that can occur when talking to Crowdin.
#[derive(Debug, Error)]
pub enum CrowdinError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Access token missing, invalid or lacking scope.
	#[error("Invalid access token")]
	Unauthorized,

	/// Project, file or language not found.
	#[error("Not found: {0}")]
	NotFound(String),

	/// Rate limit exceeded.
	#[error("Rate limit exceeded")]
	RateLimited { retry_after_secs: Option<u64> },

	/// Invalid or unparseable response from Crowdin.
	#[error("Invalid response from Crowdin: {0}")]
	InvalidResponse(String),

	/// Crowdin returned an error status.
	#[error("Crowdin API error: {status} - {message}")]
	ApiError { status: u16, message: String },
}

impl From<CrowdinError> for SourceError {
	fn from(err: CrowdinError) -> Self {
		match err {
			CrowdinError::Network(e) => SourceError::Transport(e.to_string()),
			CrowdinError::Timeout => SourceError::Transport("request timed out".to_string()),
			CrowdinError::Unauthorized => SourceError::Unauthorized,
			CrowdinError::NotFound(what) => SourceError::NotFound(what),
			CrowdinError::RateLimited { retry_after_secs } => {
				SourceError::RateLimited { retry_after_secs }
			}
			CrowdinError::InvalidResponse(message) => SourceError::InvalidResponse(message),
			CrowdinError::ApiError { status, message } => SourceError::Server { status, message },
		}
	}
}
