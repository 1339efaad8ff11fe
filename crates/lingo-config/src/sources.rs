// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: TOML files and the environment.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::layer::{ConfigLayer, CrowdinLayer, I18nLayer, StorageLayer};
use crate::token::AccessToken;
use crate::ConfigError;

pub const ENV_BASE_URL: &str = "LINGO_CROWDIN_BASE_URL";
pub const ENV_PROJECT_ID: &str = "LINGO_CROWDIN_PROJECT_ID";
pub const ENV_FILE_ID: &str = "LINGO_CROWDIN_FILE_ID";
pub const ENV_TOKEN: &str = "LINGO_CROWDIN_TOKEN";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "LINGO_CROWDIN_REQUEST_TIMEOUT_SECS";
pub const ENV_INITIAL_LANGUAGE: &str = "LINGO_INITIAL_LANGUAGE";
pub const ENV_PREFERENCES_FILE: &str = "LINGO_PREFERENCES_FILE";

/// Loads a TOML layer from `path`.
///
/// A missing file yields an empty layer unless `required` is set.
pub fn file_layer(path: &Path, required: bool) -> Result<ConfigLayer, ConfigError> {
	if !path.exists() {
		if required {
			return Err(ConfigError::Io(std::io::Error::new(
				std::io::ErrorKind::NotFound,
				format!("config file not found: {}", path.display()),
			)));
		}
		trace!(path = %path.display(), "config file absent, skipping");
		return Ok(ConfigLayer::default());
	}

	debug!(path = %path.display(), "loading config file");
	let contents = std::fs::read_to_string(path)?;
	toml::from_str(&contents).map_err(|source| ConfigError::TomlParse {
		path: path.to_path_buf(),
		source,
	})
}

/// Builds a layer from environment variables looked up through `lookup`.
///
/// The token may be given directly (`LINGO_CROWDIN_TOKEN`) or as a file path
/// (`LINGO_CROWDIN_TOKEN_FILE`); the file form wins when both are set.
pub fn env_layer<F>(lookup: F) -> Result<ConfigLayer, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let crowdin = CrowdinLayer {
		base_url: lookup(ENV_BASE_URL),
		project_id: parse_env(&lookup, ENV_PROJECT_ID)?,
		file_id: parse_env(&lookup, ENV_FILE_ID)?,
		access_token: token_from_env(&lookup)?,
		request_timeout_secs: parse_env(&lookup, ENV_REQUEST_TIMEOUT_SECS)?,
	};

	let i18n = I18nLayer {
		initial_language: lookup(ENV_INITIAL_LANGUAGE),
	};

	let storage = StorageLayer {
		preferences_file: lookup(ENV_PREFERENCES_FILE).map(PathBuf::from),
	};

	Ok(ConfigLayer {
		crowdin: Some(crowdin),
		i18n: Some(i18n),
		storage: Some(storage),
	})
}

/// Process environment lookup for [`env_layer`].
pub fn process_env(var: &str) -> Option<String> {
	std::env::var(var).ok()
}

fn parse_env<F, T>(lookup: &F, var: &str) -> Result<Option<T>, ConfigError>
where
	F: Fn(&str) -> Option<String>,
	T: std::str::FromStr,
	T::Err: std::fmt::Display,
{
	match lookup(var) {
		None => Ok(None),
		Some(raw) => raw
			.trim()
			.parse()
			.map(Some)
			.map_err(|e| ConfigError::Env(format!("{var}: {e}"))),
	}
}

fn token_from_env<F>(lookup: &F) -> Result<Option<AccessToken>, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let file_var = format!("{ENV_TOKEN}_FILE");

	if let Some(path) = lookup(&file_var) {
		if path.is_empty() {
			return Err(ConfigError::Env(format!("{file_var} is empty")));
		}
		let path = PathBuf::from(path);
		let mut contents =
			std::fs::read_to_string(&path).map_err(|source| ConfigError::SecretFile {
				path: path.clone(),
				source,
			})?;
		if contents.ends_with('\n') {
			contents.pop();
			if contents.ends_with('\r') {
				contents.pop();
			}
		}
		debug!(path = %path.display(), "loaded access token from file");
		return Ok(Some(AccessToken::new(contents)));
	}

	Ok(lookup(ENV_TOKEN).map(AccessToken::new))
}
