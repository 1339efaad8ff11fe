// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod args;
mod commands;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use lingo_crowdin::CrowdinClient;
use lingo_i18n::LocalizationStore;
use lingo_i18n_prefs::FilePreferenceStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use args::Cli;
use commands::LastFailure;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	// Logs go to stderr so command output stays pipeable
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();

	let config =
		lingo_config::load_config(cli.config.as_deref()).context("Failed to load configuration")?;

	let token = config.crowdin.access_token.expose();
	let client = match config.crowdin.request_timeout {
		Some(timeout) => CrowdinClient::with_timeout(token, timeout),
		None => CrowdinClient::new(token),
	}
	.context("Failed to create Crowdin client")?
	.with_base_url(config.crowdin.base_url.as_str());

	debug!(
		preferences = %config.storage.preferences_file.display(),
		base_url = client.base_url(),
		"Starting"
	);

	let failures = Arc::new(LastFailure::default());
	let store = LocalizationStore::builder()
		.source(client)
		.preferences(FilePreferenceStore::new(config.storage.preferences_file.clone()))
		.project_id(config.crowdin.project_id)
		.file_id(config.crowdin.file_id)
		.initial_language(config.i18n.initial_language)
		.shared_fetch_hook(failures.clone())
		.build()
		.await?;

	let mut stdout = std::io::stdout().lock();
	let result = commands::run(cli.command, &store, &failures, cli.json, &mut stdout).await;

	store.close();
	result
}
