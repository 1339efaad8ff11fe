// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime configuration types with resolved defaults.

use std::path::PathBuf;
use std::time::Duration;

use lingo_i18n_core::{LanguageCode, DEFAULT_LANGUAGE};

use crate::layer::ConfigLayer;
use crate::paths::PathsConfig;
use crate::token::AccessToken;
use crate::ConfigError;

/// Public Crowdin API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.crowdin.com/api/v2";

/// The final, validated configuration for Lingo.
#[derive(Debug, Clone)]
pub struct LingoConfig {
	pub crowdin: CrowdinConfig,
	pub i18n: I18nConfig,
	pub storage: StorageConfig,

	/// Resolved XDG paths
	pub paths: PathsConfig,
}

#[derive(Debug, Clone)]
pub struct CrowdinConfig {
	pub base_url: String,
	pub project_id: u64,
	pub file_id: u64,
	pub access_token: AccessToken,
	pub request_timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
	pub initial_language: LanguageCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
	pub preferences_file: PathBuf,
}

impl LingoConfig {
	/// Build runtime config from a merged layer and paths.
	pub fn from_layer(layer: ConfigLayer, paths: PathsConfig) -> Result<Self, ConfigError> {
		let crowdin = layer.crowdin.unwrap_or_default();
		let crowdin = CrowdinConfig {
			base_url: crowdin
				.base_url
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			project_id: crowdin
				.project_id
				.ok_or_else(|| ConfigError::missing_field("crowdin.project_id"))?,
			file_id: crowdin
				.file_id
				.ok_or_else(|| ConfigError::missing_field("crowdin.file_id"))?,
			access_token: crowdin
				.access_token
				.ok_or_else(|| ConfigError::missing_field("crowdin.access_token"))?,
			request_timeout: crowdin.request_timeout_secs.map(Duration::from_secs),
		};

		let initial_language = match layer.i18n.and_then(|i18n| i18n.initial_language) {
			Some(code) => code
				.parse::<LanguageCode>()
				.map_err(|e| ConfigError::invalid_value("i18n.initial_language", e.to_string()))?,
			None => DEFAULT_LANGUAGE,
		};

		let preferences_file = layer
			.storage
			.and_then(|storage| storage.preferences_file)
			.unwrap_or_else(|| paths.preferences_file());

		Ok(Self {
			crowdin,
			i18n: I18nConfig { initial_language },
			storage: StorageConfig { preferences_file },
			paths,
		})
	}
}
