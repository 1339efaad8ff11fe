// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG Base Directory compliant path resolution.

use std::path::PathBuf;

use crate::ConfigError;

/// Resolved XDG paths for Lingo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsConfig {
	/// User config file: ~/.config/lingo/config.toml
	pub user_config_file: PathBuf,
	/// State directory: ~/.local/state/lingo/
	pub state_dir: PathBuf,
}

impl PathsConfig {
	/// Default location of the persisted preference file.
	pub fn preferences_file(&self) -> PathBuf {
		self.state_dir.join("preferences.json")
	}
}

/// Resolve XDG paths according to the Base Directory Specification.
///
/// Uses environment variables if set, otherwise falls back to defaults:
/// - XDG_CONFIG_HOME or ~/.config
/// - XDG_STATE_HOME or ~/.local/state
pub fn resolve_xdg_paths() -> Result<PathsConfig, ConfigError> {
	let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

	let config_home = std::env::var_os("XDG_CONFIG_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".config"));

	let state_home = std::env::var_os("XDG_STATE_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".local/state"));

	tracing::debug!(
			config_home = %config_home.display(),
			state_home = %state_home.display(),
			"resolved XDG paths"
	);

	Ok(PathsConfig {
		user_config_file: config_home.join("lingo/config.toml"),
		state_dir: state_home.join("lingo"),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_resolve_xdg_paths_succeeds() {
		let paths = resolve_xdg_paths().unwrap();
		assert!(paths.user_config_file.ends_with("lingo/config.toml"));
		assert!(paths.state_dir.ends_with("lingo"));
	}

	#[test]
	fn test_preferences_file_lives_in_state_dir() {
		let paths = PathsConfig {
			user_config_file: PathBuf::from("/home/u/.config/lingo/config.toml"),
			state_dir: PathBuf::from("/home/u/.local/state/lingo"),
		};
		assert_eq!(
			paths.preferences_file(),
			PathBuf::from("/home/u/.local/state/lingo/preferences.json")
		);
	}
}
