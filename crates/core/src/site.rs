//! Supported wiki sites and API endpoint derivation
//!
//! A site is the pair of a [`Language`] subdomain and an [`Engine`] domain.
//! Both sets are closed: anything outside them is rejected at parse time.

use crate::error::WikiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language subdomains the client can talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    #[default]
    En,
    Es,
    Fr,
    It,
    Nl,
    Pl,
    Ru,
    Ceb,
    Sv,
    Vi,
    War,
}

impl Language {
    pub const ALL: [Language; 12] = [
        Language::De,
        Language::En,
        Language::Es,
        Language::Fr,
        Language::It,
        Language::Nl,
        Language::Pl,
        Language::Ru,
        Language::Ceb,
        Language::Sv,
        Language::Vi,
        Language::War,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::It => "it",
            Language::Nl => "nl",
            Language::Pl => "pl",
            Language::Ru => "ru",
            Language::Ceb => "ceb",
            Language::Sv => "sv",
            Language::Vi => "vi",
            Language::War => "war",
        }
    }

    /// Codes of every supported language, in declaration order
    pub fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(Language::code).collect()
    }
}

impl FromStr for Language {
    type Err = WikiError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|lang| lang.code() == code)
            .copied()
            .ok_or_else(|| WikiError::UnsupportedLanguage(code.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Wiki backends: Wikipedia or Wikiquote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Engine {
    #[default]
    #[serde(rename = "encyclopedia", alias = "pedia")]
    Encyclopedia,
    #[serde(rename = "quotes", alias = "quote")]
    Quotes,
}

impl Engine {
    pub const ALL: [Engine; 2] = [Engine::Encyclopedia, Engine::Quotes];

    pub fn name(&self) -> &'static str {
        match self {
            Engine::Encyclopedia => "encyclopedia",
            Engine::Quotes => "quotes",
        }
    }

    pub fn domain(&self) -> &'static str {
        match self {
            Engine::Encyclopedia => "wikipedia.org",
            Engine::Quotes => "wikiquote.org",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Engine::name).collect()
    }
}

impl FromStr for Engine {
    type Err = WikiError;

    /// Accepts the canonical names plus the short `pedia` / `quote` aliases
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "encyclopedia" | "pedia" => Ok(Engine::Encyclopedia),
            "quotes" | "quote" => Ok(Engine::Quotes),
            other => Err(WikiError::UnsupportedEngine(other.to_string())),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Base API URL for a site
///
/// The result ends with `&` so operation parameters can be appended directly.
pub fn endpoint(language: Language, engine: Engine) -> String {
    format!(
        "http://{}.{}/w/api.php?format=json&rawcontinue=1&",
        language.code(),
        engine.domain()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_language_codes_in_order() {
        assert_eq!(
            Language::codes(),
            vec!["de", "en", "es", "fr", "it", "nl", "pl", "ru", "ceb", "sv", "vi", "war"]
        );
    }

    #[test]
    fn test_every_language_parses_from_its_code() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_unsupported_language() {
        let err = "ar".parse::<Language>().unwrap_err();
        assert_eq!(err, WikiError::UnsupportedLanguage("ar".to_string()));
    }

    #[test]
    fn test_language_codes_are_case_sensitive() {
        assert!("EN".parse::<Language>().is_err());
    }

    #[test]
    fn test_engine_names_and_aliases() {
        assert_eq!("encyclopedia".parse::<Engine>().unwrap(), Engine::Encyclopedia);
        assert_eq!("pedia".parse::<Engine>().unwrap(), Engine::Encyclopedia);
        assert_eq!("quotes".parse::<Engine>().unwrap(), Engine::Quotes);
        assert_eq!("quote".parse::<Engine>().unwrap(), Engine::Quotes);
        assert_eq!(Engine::names(), vec!["encyclopedia", "quotes"]);
    }

    #[test]
    fn test_unsupported_engine() {
        let err = "rhyme".parse::<Engine>().unwrap_err();
        assert_eq!(err, WikiError::UnsupportedEngine("rhyme".to_string()));
    }

    #[test]
    fn test_endpoint_encyclopedia() {
        assert_eq!(
            endpoint(Language::En, Engine::Encyclopedia),
            "http://en.wikipedia.org/w/api.php?format=json&rawcontinue=1&"
        );
    }

    #[test]
    fn test_endpoint_quotes() {
        assert_eq!(
            endpoint(Language::Ceb, Engine::Quotes),
            "http://ceb.wikiquote.org/w/api.php?format=json&rawcontinue=1&"
        );
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Language::War).unwrap(), "\"war\"");
        assert_eq!(serde_json::to_string(&Engine::Quotes).unwrap(), "\"quotes\"");
        let engine: Engine = serde_json::from_str("\"pedia\"").unwrap();
        assert_eq!(engine, Engine::Encyclopedia);
    }
}
