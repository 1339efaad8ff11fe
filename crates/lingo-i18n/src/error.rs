// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for building a localization store.

use thiserror::Error;

/// Result type alias for store construction.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by [`LocalizationStoreBuilder::build`](crate::LocalizationStoreBuilder::build).
///
/// Once built, the store does not fail: fetch and persistence problems are
/// logged and reported through the fetch hook.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
	#[error("No translation source configured")]
	MissingSource,

	#[error("No preference store configured")]
	MissingPreferences,

	#[error("Missing or zero project id")]
	InvalidProjectId,

	#[error("Missing or zero file id")]
	InvalidFileId,
}
