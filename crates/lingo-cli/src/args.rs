// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lingo - runtime localization backed by Crowdin
#[derive(Parser, Debug)]
#[command(name = "lingo", version)]
pub struct Cli {
	/// Config file, layered over ~/.config/lingo/config.toml
	#[arg(long, global = true, env = "LINGO_CONFIG")]
	pub config: Option<PathBuf>,

	/// Emit JSON instead of text
	#[arg(long, global = true)]
	pub json: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// List supported languages, marking the current one
	Languages,

	/// Print the current language
	Current,

	/// Switch to a language and remember it
	Use {
		/// Language id, e.g. `fr` or `pt-BR`
		code: String,
	},

	/// Look up a string in the current language
	Translate {
		string_id: u64,

		/// Text shown when no translation is available
		fallback: String,

		/// Interpolation value, repeatable
		#[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
		vars: Vec<(String, String)>,
	},

	/// Fetch translations and print how many strings arrived
	Fetch {
		/// Language id; defaults to the current language
		code: Option<String>,
	},
}

fn parse_var(raw: &str) -> Result<(String, String), String> {
	let (key, value) = raw
		.split_once('=')
		.ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
	if key.is_empty() {
		return Err("empty key".to_string());
	}
	Ok((key.to_string(), value.to_string()))
}
