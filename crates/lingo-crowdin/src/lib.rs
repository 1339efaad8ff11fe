// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Crowdin API v2 client for Lingo.
//!
//! This crate provides a typed client for the one Crowdin operation Lingo
//! needs, listing the translations of a file in a given language, and plugs it
//! into the localization store through
//! [`TranslationSource`](lingo_i18n_core::TranslationSource).

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::CrowdinClient;
pub use error::CrowdinError;
pub use types::{LanguageTranslation, ListTranslationsResponse, Pagination};
