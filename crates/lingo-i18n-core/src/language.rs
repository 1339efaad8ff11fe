// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static registry of supported languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language identifiers understood by the translation service.
///
/// Variant order matches [`LANGUAGES`]; [`language_for`] relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LanguageCode {
	#[serde(rename = "en")]
	En,
	#[serde(rename = "ar")]
	Ar,
	#[serde(rename = "bn")]
	Bn,
	#[serde(rename = "de")]
	De,
	#[serde(rename = "el")]
	El,
	#[serde(rename = "es-ES")]
	EsEs,
	#[serde(rename = "fi")]
	Fi,
	#[serde(rename = "fil")]
	Fil,
	#[serde(rename = "fr")]
	Fr,
	#[serde(rename = "hi")]
	Hi,
	#[serde(rename = "hu")]
	Hu,
	#[serde(rename = "id")]
	Id,
	#[serde(rename = "it")]
	It,
	#[serde(rename = "ja")]
	Ja,
	#[serde(rename = "ko")]
	Ko,
	#[serde(rename = "nl")]
	Nl,
	#[serde(rename = "pl")]
	Pl,
	#[serde(rename = "pt-BR")]
	PtBr,
	#[serde(rename = "pt-PT")]
	PtPt,
	#[serde(rename = "ro")]
	Ro,
	#[serde(rename = "ru")]
	Ru,
	#[serde(rename = "sv-SE")]
	SvSe,
	#[serde(rename = "ta")]
	Ta,
	#[serde(rename = "tr")]
	Tr,
	#[serde(rename = "uk")]
	Uk,
	#[serde(rename = "vi")]
	Vi,
	#[serde(rename = "zh-CN")]
	ZhCn,
	#[serde(rename = "zh-TW")]
	ZhTw,
}

impl LanguageCode {
	/// Returns the language id used by the translation service and for persistence.
	pub fn as_str(&self) -> &'static str {
		match self {
			LanguageCode::En => "en",
			LanguageCode::Ar => "ar",
			LanguageCode::Bn => "bn",
			LanguageCode::De => "de",
			LanguageCode::El => "el",
			LanguageCode::EsEs => "es-ES",
			LanguageCode::Fi => "fi",
			LanguageCode::Fil => "fil",
			LanguageCode::Fr => "fr",
			LanguageCode::Hi => "hi",
			LanguageCode::Hu => "hu",
			LanguageCode::Id => "id",
			LanguageCode::It => "it",
			LanguageCode::Ja => "ja",
			LanguageCode::Ko => "ko",
			LanguageCode::Nl => "nl",
			LanguageCode::Pl => "pl",
			LanguageCode::PtBr => "pt-BR",
			LanguageCode::PtPt => "pt-PT",
			LanguageCode::Ro => "ro",
			LanguageCode::Ru => "ru",
			LanguageCode::SvSe => "sv-SE",
			LanguageCode::Ta => "ta",
			LanguageCode::Tr => "tr",
			LanguageCode::Uk => "uk",
			LanguageCode::Vi => "vi",
			LanguageCode::ZhCn => "zh-CN",
			LanguageCode::ZhTw => "zh-TW",
		}
	}

	/// Returns the registry entry for this code.
	pub fn language(&self) -> &'static Language {
		language_for(*self)
	}
}

impl fmt::Display for LanguageCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Returned when a string does not name a supported language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code: {0:?}")]
pub struct UnknownLanguageCode(pub String);

impl FromStr for LanguageCode {
	type Err = UnknownLanguageCode;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		LANGUAGES
			.iter()
			.map(|language| language.code)
			.find(|code| code.as_str() == s)
			.ok_or_else(|| UnknownLanguageCode(s.to_string()))
	}
}

/// A supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
	/// Translation service language id.
	pub code: LanguageCode,
	/// BCP 47 locale tag used for formatting.
	pub locale: &'static str,
	/// Name of the language in the language itself.
	pub display_name: &'static str,
}

/// English, the built-in default.
pub const EN: Language = Language {
	code: LanguageCode::En,
	locale: "en-US",
	display_name: "English",
};

/// Language used when nothing else has been configured.
pub const DEFAULT_LANGUAGE: LanguageCode = LanguageCode::En;

/// All supported languages, immutable at runtime.
pub static LANGUAGES: [Language; 28] = [
	EN,
	Language {
		code: LanguageCode::Ar,
		locale: "ar-SA",
		display_name: "العربية",
	},
	Language {
		code: LanguageCode::Bn,
		locale: "bn-BD",
		display_name: "বাংলা",
	},
	Language {
		code: LanguageCode::De,
		locale: "de-DE",
		display_name: "Deutsch",
	},
	Language {
		code: LanguageCode::El,
		locale: "el-GR",
		display_name: "Ελληνικά",
	},
	Language {
		code: LanguageCode::EsEs,
		locale: "es-ES",
		display_name: "Español",
	},
	Language {
		code: LanguageCode::Fi,
		locale: "fi-FI",
		display_name: "Suomalainen",
	},
	Language {
		code: LanguageCode::Fil,
		locale: "fil-PH",
		display_name: "Filipino",
	},
	Language {
		code: LanguageCode::Fr,
		locale: "fr-FR",
		display_name: "Français",
	},
	Language {
		code: LanguageCode::Hi,
		locale: "hi-IN",
		display_name: "हिंदी",
	},
	Language {
		code: LanguageCode::Hu,
		locale: "hu-HU",
		display_name: "Magyar",
	},
	Language {
		code: LanguageCode::Id,
		locale: "id-ID",
		display_name: "Bahasa Indonesia",
	},
	Language {
		code: LanguageCode::It,
		locale: "it-IT",
		display_name: "Italiano",
	},
	Language {
		code: LanguageCode::Ja,
		locale: "ja-JP",
		display_name: "日本語",
	},
	Language {
		code: LanguageCode::Ko,
		locale: "ko-KR",
		display_name: "한국어",
	},
	Language {
		code: LanguageCode::Nl,
		locale: "nl-NL",
		display_name: "Nederlands",
	},
	Language {
		code: LanguageCode::Pl,
		locale: "pl-PL",
		display_name: "Polski",
	},
	Language {
		code: LanguageCode::PtBr,
		locale: "pt-BR",
		display_name: "Português (Brazil)",
	},
	Language {
		code: LanguageCode::PtPt,
		locale: "pt-PT",
		display_name: "Português",
	},
	Language {
		code: LanguageCode::Ro,
		locale: "ro-RO",
		display_name: "Română",
	},
	Language {
		code: LanguageCode::Ru,
		locale: "ru-RU",
		display_name: "Русский",
	},
	Language {
		code: LanguageCode::SvSe,
		locale: "sv-SE",
		display_name: "Svenska",
	},
	Language {
		code: LanguageCode::Ta,
		locale: "ta-IN",
		display_name: "தமிழ்",
	},
	Language {
		code: LanguageCode::Tr,
		locale: "tr-TR",
		display_name: "Türkçe",
	},
	Language {
		code: LanguageCode::Uk,
		locale: "uk-UA",
		display_name: "Українська",
	},
	Language {
		code: LanguageCode::Vi,
		locale: "vi-VN",
		display_name: "Tiếng Việt",
	},
	Language {
		code: LanguageCode::ZhCn,
		locale: "zh-CN",
		display_name: "简体中文",
	},
	Language {
		code: LanguageCode::ZhTw,
		locale: "zh-TW",
		display_name: "繁體中文",
	},
];

/// Returns the registry entry for a code.
pub fn language_for(code: LanguageCode) -> &'static Language {
	&LANGUAGES[code as usize]
}

/// Looks up a language by its string id.
///
/// Returns `None` for anything not in [`LANGUAGES`], including the empty string.
pub fn find_language(code: &str) -> Option<&'static Language> {
	code.parse::<LanguageCode>().ok().map(language_for)
}
