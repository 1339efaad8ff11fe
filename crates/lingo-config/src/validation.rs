// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration validation rules.

use tracing::warn;

use crate::runtime::LingoConfig;
use crate::ConfigError;

/// Validate the configuration.
pub fn validate_config(config: &LingoConfig) -> Result<(), ConfigError> {
	let crowdin = &config.crowdin;

	if crowdin.project_id == 0 {
		return Err(ConfigError::invalid_value(
			"crowdin.project_id",
			"must be non-zero",
		));
	}

	if crowdin.file_id == 0 {
		return Err(ConfigError::invalid_value(
			"crowdin.file_id",
			"must be non-zero",
		));
	}

	if crowdin.access_token.is_empty() {
		return Err(ConfigError::invalid_value(
			"crowdin.access_token",
			"cannot be empty",
		));
	}

	if !(crowdin.base_url.starts_with("https://") || crowdin.base_url.starts_with("http://")) {
		return Err(ConfigError::invalid_value(
			"crowdin.base_url",
			"must be an http(s) URL",
		));
	}

	if crowdin.base_url.starts_with("http://") {
		warn!(base_url = %crowdin.base_url, "translation service configured without TLS");
	}

	if crowdin.request_timeout == Some(std::time::Duration::ZERO) {
		return Err(ConfigError::invalid_value(
			"crowdin.request_timeout_secs",
			"must be at least 1",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::paths::PathsConfig;
	use crate::runtime::{CrowdinConfig, I18nConfig, StorageConfig, DEFAULT_BASE_URL};
	use crate::token::AccessToken;
	use lingo_i18n_core::LanguageCode;
	use std::path::PathBuf;
	use std::time::Duration;

	fn valid() -> LingoConfig {
		LingoConfig {
			crowdin: CrowdinConfig {
				base_url: DEFAULT_BASE_URL.to_string(),
				project_id: 12,
				file_id: 34,
				access_token: AccessToken::new("pat"),
				request_timeout: None,
			},
			i18n: I18nConfig {
				initial_language: LanguageCode::En,
			},
			storage: StorageConfig {
				preferences_file: PathBuf::from("/tmp/prefs.json"),
			},
			paths: PathsConfig {
				user_config_file: PathBuf::from("/tmp/config.toml"),
				state_dir: PathBuf::from("/tmp"),
			},
		}
	}

	#[test]
	fn test_valid_config_passes() {
		assert!(validate_config(&valid()).is_ok());
	}

	#[test]
	fn test_zero_ids_are_rejected() {
		let mut config = valid();
		config.crowdin.project_id = 0;
		assert!(validate_config(&config).is_err());

		let mut config = valid();
		config.crowdin.file_id = 0;
		assert!(validate_config(&config).is_err());
	}

	#[test]
	fn test_blank_token_is_rejected() {
		let mut config = valid();
		config.crowdin.access_token = AccessToken::new("  ");
		let err = validate_config(&config).unwrap_err();
		assert!(
			matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "crowdin.access_token")
		);
	}

	#[test]
	fn test_base_url_must_be_http() {
		let mut config = valid();
		config.crowdin.base_url = "ftp://example.com".to_string();
		assert!(validate_config(&config).is_err());

		config.crowdin.base_url = "http://localhost:8080".to_string();
		assert!(validate_config(&config).is_ok());
	}

	#[test]
	fn test_zero_timeout_is_rejected() {
		let mut config = valid();
		config.crowdin.request_timeout = Some(Duration::ZERO);
		assert!(validate_config(&config).is_err());
	}
}
