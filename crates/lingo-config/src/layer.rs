// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer for merging from multiple sources.

use std::path::PathBuf;

use serde::Deserialize;

use crate::token::AccessToken;

/// Partial configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
	#[serde(default)]
	pub crowdin: Option<CrowdinLayer>,
	#[serde(default)]
	pub i18n: Option<I18nLayer>,
	#[serde(default)]
	pub storage: Option<StorageLayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrowdinLayer {
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(default)]
	pub project_id: Option<u64>,
	#[serde(default)]
	pub file_id: Option<u64>,
	#[serde(default)]
	pub access_token: Option<AccessToken>,
	#[serde(default)]
	pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct I18nLayer {
	#[serde(default)]
	pub initial_language: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageLayer {
	#[serde(default)]
	pub preferences_file: Option<PathBuf>,
}

impl ConfigLayer {
	/// Overlays `other` on top of `self`; values set in `other` win.
	pub fn merge(&mut self, other: ConfigLayer) {
		if let Some(crowdin) = other.crowdin {
			self.crowdin.get_or_insert_with(Default::default).merge(crowdin);
		}
		if let Some(i18n) = other.i18n {
			self.i18n.get_or_insert_with(Default::default).merge(i18n);
		}
		if let Some(storage) = other.storage {
			self.storage.get_or_insert_with(Default::default).merge(storage);
		}
	}
}

impl CrowdinLayer {
	fn merge(&mut self, other: CrowdinLayer) {
		overlay(&mut self.base_url, other.base_url);
		overlay(&mut self.project_id, other.project_id);
		overlay(&mut self.file_id, other.file_id);
		overlay(&mut self.access_token, other.access_token);
		overlay(&mut self.request_timeout_secs, other.request_timeout_secs);
	}
}

impl I18nLayer {
	fn merge(&mut self, other: I18nLayer) {
		overlay(&mut self.initial_language, other.initial_language);
	}
}

impl StorageLayer {
	fn merge(&mut self, other: StorageLayer) {
		overlay(&mut self.preferences_file, other.preferences_file);
	}
}

fn overlay<T>(target: &mut Option<T>, value: Option<T>) {
	if value.is_some() {
		*target = value;
	}
}
