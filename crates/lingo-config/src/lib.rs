// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for Lingo.
//!
//! This crate provides:
//! - XDG Base Directory compliant path resolution
//! - Layered configuration (user file, explicit file, environment)
//! - Access token handling with redaction
//! - Configuration validation

pub mod error;
pub mod layer;
pub mod paths;
pub mod runtime;
pub mod sources;
pub mod token;
pub mod validation;

use std::path::Path;

pub use error::ConfigError;
pub use layer::ConfigLayer;
pub use paths::PathsConfig;
pub use runtime::{CrowdinConfig, I18nConfig, LingoConfig, StorageConfig, DEFAULT_BASE_URL};
pub use token::AccessToken;

/// Load configuration from all sources with default precedence.
///
/// Precedence, lowest first: the user config file, `explicit` (which must
/// exist when given), then `LINGO_*` environment variables.
pub fn load_config(explicit: Option<&Path>) -> Result<LingoConfig, ConfigError> {
	let paths = paths::resolve_xdg_paths()?;
	load_config_with(explicit, paths, sources::process_env)
}

/// Like [`load_config`] with injected paths and environment lookup.
pub fn load_config_with<F>(
	explicit: Option<&Path>,
	paths: PathsConfig,
	lookup: F,
) -> Result<LingoConfig, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let mut layer = sources::file_layer(&paths.user_config_file, false)?;
	if let Some(path) = explicit {
		layer.merge(sources::file_layer(path, true)?);
	}
	layer.merge(sources::env_layer(lookup)?);

	let config = LingoConfig::from_layer(layer, paths)?;
	validation::validate_config(&config)?;

	tracing::debug!(
		project_id = config.crowdin.project_id,
		file_id = config.crowdin.file_id,
		initial_language = %config.i18n.initial_language,
		"configuration loaded"
	);

	Ok(config)
}
