// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Percent-delimited variable interpolation.

use std::fmt::Display;

/// Character that marks a translated string as a template.
pub const TEMPLATE_DELIMITER: char = '%';

/// Variables substituted into `%key%` placeholders.
///
/// Keys keep insertion order; substitution runs in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterpolationData {
	entries: Vec<(String, String)>,
}

impl InterpolationData {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a variable, replacing the value of an existing key in place.
	pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
		self.insert(key, value);
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
		let key = key.into();
		let value = value.to_string();
		match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((key, value)),
		}
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self
			.entries
			.iter()
			.find(|(existing, _)| existing == key)
			.map(|(_, value)| value.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for InterpolationData {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut data = Self::new();
		for (key, value) in iter {
			data.insert(key, value);
		}
		data
	}
}

impl From<&[(&str, &str)]> for InterpolationData {
	fn from(args: &[(&str, &str)]) -> Self {
		args.iter().copied().collect()
	}
}

/// Replaces every `%key%` in `template` for every key in `data`.
///
/// Placeholders without a matching key are left as they are.
pub fn interpolate(template: &str, data: &InterpolationData) -> String {
	let mut result = template.to_string();

	for (key, value) in data.iter() {
		let placeholder = format!("{TEMPLATE_DELIMITER}{key}{TEMPLATE_DELIMITER}");
		result = result.replace(&placeholder, value);
	}

	result
}
