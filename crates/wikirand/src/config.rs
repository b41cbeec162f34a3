use serde::{Deserialize, Serialize};
use wikirand_core::site::{endpoint, Engine, Language};
use wikirand_core::WikiError;

/// Client configuration: which wiki to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WikiConfig {
    pub language: Language,
    pub engine: Engine,
}

impl WikiConfig {
    pub const LANGUAGE_VAR: &'static str = "WIKIRAND_LANGUAGE";
    pub const ENGINE_VAR: &'static str = "WIKIRAND_ENGINE";

    /// Parse a configuration from a language code and an engine name
    pub fn new(language: &str, engine: &str) -> Result<Self, WikiError> {
        Ok(Self {
            language: language.parse()?,
            engine: engine.parse()?,
        })
    }

    /// Load configuration from environment variables
    ///
    /// Unset or empty variables keep the defaults (`en`, `encyclopedia`);
    /// unsupported values are an error.
    pub fn from_env() -> Result<Self, WikiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, WikiError> {
        let language = lookup(Self::LANGUAGE_VAR);
        let engine = lookup(Self::ENGINE_VAR);
        Self::default().with_overrides(language.as_deref(), engine.as_deref())
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(
        mut self,
        language: Option<&str>,
        engine: Option<&str>,
    ) -> Result<Self, WikiError> {
        if let Some(code) = language.filter(|code| !code.is_empty()) {
            self.language = code.parse()?;
        }
        if let Some(name) = engine.filter(|name| !name.is_empty()) {
            self.engine = name.parse()?;
        }
        Ok(self)
    }

    pub fn endpoint(&self) -> String {
        endpoint(self.language, self.engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = WikiConfig::default();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.engine, Engine::Encyclopedia);
        assert_eq!(
            config.endpoint(),
            "http://en.wikipedia.org/w/api.php?format=json&rawcontinue=1&"
        );
    }

    #[test]
    fn test_new_config() {
        let config = WikiConfig::new("fr", "quotes").unwrap();
        assert_eq!(config.language, Language::Fr);
        assert_eq!(config.engine, Engine::Quotes);
    }

    #[test]
    fn test_from_lookup_unset_uses_defaults() {
        let config = WikiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, WikiConfig::default());
    }

    #[test]
    fn test_from_lookup_empty_values_use_defaults() {
        let config = WikiConfig::from_lookup(lookup_from(&[
            ("WIKIRAND_LANGUAGE", ""),
            ("WIKIRAND_ENGINE", ""),
        ]))
        .unwrap();
        assert_eq!(config, WikiConfig::default());
    }

    #[test]
    fn test_from_lookup_reads_values() {
        let config = WikiConfig::from_lookup(lookup_from(&[
            ("WIKIRAND_LANGUAGE", "sv"),
            ("WIKIRAND_ENGINE", "quote"),
        ]))
        .unwrap();
        assert_eq!(config.language, Language::Sv);
        assert_eq!(config.engine, Engine::Quotes);
    }

    #[test]
    fn test_from_lookup_rejects_unsupported() {
        let err = WikiConfig::from_lookup(lookup_from(&[("WIKIRAND_LANGUAGE", "ar")])).unwrap_err();
        assert_eq!(err, WikiError::UnsupportedLanguage("ar".to_string()));

        let err = WikiConfig::from_lookup(lookup_from(&[("WIKIRAND_ENGINE", "rhyme")])).unwrap_err();
        assert_eq!(err, WikiError::UnsupportedEngine("rhyme".to_string()));
    }

    #[test]
    fn test_with_overrides_none_keeps_values() {
        let config = WikiConfig::new("de", "quotes")
            .unwrap()
            .with_overrides(None, None)
            .unwrap();
        assert_eq!(config.language, Language::De);
        assert_eq!(config.engine, Engine::Quotes);
    }

    #[test]
    fn test_deserialize_config() {
        let config: WikiConfig =
            serde_json::from_str(r#"{"language": "vi", "engine": "quotes"}"#).unwrap();
        assert_eq!(config.language, Language::Vi);
        assert_eq!(config.engine, Engine::Quotes);
    }
}
