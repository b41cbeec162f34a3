//! Error taxonomy shared by the core and the client

/// Errors raised by wikirand operations
///
/// The first four variants are validation errors raised before (or instead of)
/// any network traffic. Every transport or decoding failure is folded into
/// [`WikiError::Upstream`] so callers can tell the two families apart.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WikiError {
    #[error("Language [{0}] is not supported")]
    UnsupportedLanguage(String),

    #[error("Engine [{0}] is not supported")]
    UnsupportedEngine(String),

    #[error("Empty article set: fetch random articles first")]
    EmptyArticleSet,

    #[error("Article index {index} is out of range ({len} articles loaded)")]
    ArticleIndexOutOfRange { index: usize, len: usize },

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl WikiError {
    /// Whether this error came from the wiki service rather than from input validation
    pub fn is_upstream(&self) -> bool {
        matches!(self, WikiError::Upstream(_))
    }
}

impl From<serde_json::Error> for WikiError {
    fn from(err: serde_json::Error) -> Self {
        WikiError::Upstream(format!("Failed to decode response: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            WikiError::UnsupportedLanguage("ar".to_string()).to_string(),
            "Language [ar] is not supported"
        );
        assert_eq!(
            WikiError::UnsupportedEngine("rhyme".to_string()).to_string(),
            "Engine [rhyme] is not supported"
        );
    }

    #[test]
    fn test_decode_failure_is_upstream() {
        let err: WikiError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(err.is_upstream());
        assert!(err.to_string().starts_with("Upstream error: Failed to decode response"));
    }

    #[test]
    fn test_validation_errors_are_not_upstream() {
        assert!(!WikiError::EmptyArticleSet.is_upstream());
        assert!(!WikiError::ArticleIndexOutOfRange { index: 3, len: 1 }.is_upstream());
    }
}
