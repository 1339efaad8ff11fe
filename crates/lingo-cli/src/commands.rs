// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io::Write;
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use lingo_i18n::{
	FetchFailure, FetchHook, FetchOutcome, InterpolationData, LanguageCode, LocalizationStore,
};
use lingo_i18n_core::find_language;
use serde_json::json;

use crate::args::Command;

/// Keeps the last failure so a one-shot command can report it.
#[derive(Debug, Default)]
pub struct LastFailure(Mutex<Option<FetchFailure>>);

impl LastFailure {
	pub fn take(&self) -> Option<FetchFailure> {
		self.0
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.take()
	}
}

#[async_trait]
impl FetchHook for LastFailure {
	async fn on_fetch_succeeded(&self, _outcome: FetchOutcome) {}

	async fn on_fetch_failed(&self, failure: FetchFailure) {
		*self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(failure);
	}
}

pub async fn run<W: Write>(
	command: Command,
	store: &LocalizationStore,
	failures: &LastFailure,
	json: bool,
	out: &mut W,
) -> Result<()> {
	match command {
		Command::Languages => {
			let current = store.current_language().code;
			if json {
				let languages: Vec<_> = store
					.languages()
					.iter()
					.map(|l| {
						json!({
							"code": l.code,
							"locale": l.locale,
							"display_name": l.display_name,
							"current": l.code == current,
						})
					})
					.collect();
				writeln!(out, "{}", serde_json::to_string_pretty(&languages)?)?;
			} else {
				for language in store.languages() {
					let marker = if language.code == current { '*' } else { ' ' };
					writeln!(
						out,
						"{marker} {:<6} {}",
						language.code.as_str(),
						language.display_name
					)?;
				}
			}
		}
		Command::Current => {
			let language = store.current_language();
			if json {
				writeln!(out, "{}", serde_json::to_string(language)?)?;
			} else {
				writeln!(out, "{} ({})", language.code, language.display_name)?;
			}
		}
		Command::Use { code } => {
			if find_language(&code).is_none() {
				bail!("unknown language code `{code}`; run `lingo languages` for the list");
			}
			store.set_language_by_code(&code).await;
			writeln!(out, "Language set to {}", store.current_language().code)?;
		}
		Command::Translate {
			string_id,
			fallback,
			vars,
		} => {
			store.settle().await;
			if let Some(failure) = failures.take() {
				tracing::warn!(language = %failure.language, error = %failure.error, "Showing fallback text");
			}
			let text = if vars.is_empty() {
				store.t(string_id, &fallback)
			} else {
				let data: InterpolationData = vars.into_iter().collect();
				store.t_with(string_id, &fallback, &data)
			};
			writeln!(out, "{text}")?;
		}
		Command::Fetch { code } => {
			let language = match code {
				Some(code) => code
					.parse::<LanguageCode>()
					.with_context(|| "run `lingo languages` for the list")?,
				None => store.current_language().code,
			};

			store.settle().await;
			failures.take();
			store.fetch_translations(language).await;

			if let Some(failure) = failures.take() {
				bail!("fetching {} failed: {}", failure.language, failure.error);
			}

			let count = store
				.translations_for(language)
				.map(|set| set.len())
				.unwrap_or_default();
			if json {
				writeln!(out, "{}", json!({ "language": language, "record_count": count }))?;
			} else {
				writeln!(out, "Fetched {count} strings for {language}")?;
			}
		}
	}

	Ok(())
}
