//! Request URL construction
//!
//! Pure builders that turn an operation and its arguments into a full API URL.
//! Parameter values are percent-encoded, so `|` separators go out as `%7C`.

use crate::error::WikiError;
use serde::{Deserialize, Serialize};

/// Per-article queries that share the `pageids=` shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageQuery {
    Title,
    Link,
    FirstSentences(u32),
    PlainText,
    ExcerptByChars(u32),
    Categories,
    LangLinks,
}

impl PageQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("action", "query".to_string())];
        match self {
            PageQuery::Title => params.push(("prop", "info".to_string())),
            PageQuery::Link => {
                params.push(("prop", "info".to_string()));
                params.push(("inprop", "url".to_string()));
            }
            PageQuery::FirstSentences(count) => {
                params.push(("prop", "extracts".to_string()));
                params.push(("exsentences", count.to_string()));
                params.push(("explaintext", String::new()));
                params.push(("exsectionformat", "plain".to_string()));
            }
            PageQuery::PlainText => {
                params.push(("prop", "extracts".to_string()));
                params.push(("exlimit", "1".to_string()));
                params.push(("explaintext", String::new()));
                params.push(("exsectionformat", "plain".to_string()));
            }
            PageQuery::ExcerptByChars(chars) => {
                params.push(("prop", "extracts".to_string()));
                params.push(("exchars", chars.to_string()));
            }
            PageQuery::Categories => params.push(("prop", "categories".to_string())),
            PageQuery::LangLinks => {
                params.push(("prop", "langlinks".to_string()));
                params.push(("llprop", "url".to_string()));
            }
        }
        params
    }
}

/// Options for a bulk random fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOptions {
    pub limit: u32,
    /// Sentence limit for extracts; takes priority over `chars` when positive
    pub sentences: u32,
    pub chars: u32,
    pub with_images: bool,
    pub min_image_size: u64,
}

impl Default for BulkOptions {
    fn default() -> Self {
        Self {
            limit: 1,
            sentences: 5,
            chars: 200,
            with_images: false,
            min_image_size: 102_400,
        }
    }
}

/// Append encoded `key=value` pairs to an endpoint that already ends in `&`
pub fn build_url(endpoint: &str, params: &[(&str, String)]) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{endpoint}{query}")
}

/// Join article ids with `|`, failing when there are none
pub fn join_ids(ids: &[u64]) -> Result<String, WikiError> {
    if ids.is_empty() {
        return Err(WikiError::EmptyArticleSet);
    }

    Ok(ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join("|"))
}

pub fn random_url(endpoint: &str, count: u32) -> String {
    build_url(
        endpoint,
        &[
            ("action", "query".to_string()),
            ("list", "random".to_string()),
            ("rnnamespace", "0".to_string()),
            ("rnlimit", count.to_string()),
        ],
    )
}

/// URL for a per-article query over the already joined `ids`
pub fn page_query_url(endpoint: &str, query: PageQuery, ids: &str) -> String {
    let mut params = query.params();
    params.push(("pageids", ids.to_string()));
    build_url(endpoint, &params)
}

pub fn images_url(endpoint: &str, page_id: u64) -> String {
    build_url(
        endpoint,
        &[
            ("action", "query".to_string()),
            ("generator", "images".to_string()),
            ("prop", "imageinfo".to_string()),
            ("iiprop", "url|size".to_string()),
            ("pageids", page_id.to_string()),
        ],
    )
}

pub fn bulk_url(endpoint: &str, options: &BulkOptions) -> String {
    let mut params = vec![
        ("action", "query".to_string()),
        ("generator", "random".to_string()),
        ("grnnamespace", "0".to_string()),
        ("grnlimit", options.limit.to_string()),
        ("prop", "info|extracts".to_string()),
        ("inprop", "url".to_string()),
        ("explaintext", String::new()),
        ("exsectionformat", "plain".to_string()),
    ];

    if options.sentences > 0 {
        params.push(("exsentences", options.sentences.to_string()));
    } else if options.chars > 0 {
        params.push(("exchars", options.chars.to_string()));
    }

    build_url(endpoint, &params)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EP: &str = "http://en.wikipedia.org/w/api.php?format=json&rawcontinue=1&";

    #[test]
    fn test_join_ids_single() {
        assert_eq!(join_ids(&[42]).unwrap(), "42");
    }

    #[test]
    fn test_join_ids_multiple() {
        assert_eq!(join_ids(&[1, 22, 333]).unwrap(), "1|22|333");
    }

    #[test]
    fn test_join_ids_empty() {
        assert_eq!(join_ids(&[]).unwrap_err(), WikiError::EmptyArticleSet);
    }

    #[test]
    fn test_random_url() {
        assert_eq!(
            random_url(EP, 3),
            format!("{EP}action=query&list=random&rnnamespace=0&rnlimit=3")
        );
    }

    #[test]
    fn test_title_url() {
        assert_eq!(
            page_query_url(EP, PageQuery::Title, "7"),
            format!("{EP}action=query&prop=info&pageids=7")
        );
    }

    #[test]
    fn test_link_url_encodes_id_separator() {
        assert_eq!(
            page_query_url(EP, PageQuery::Link, "7|8"),
            format!("{EP}action=query&prop=info&inprop=url&pageids=7%7C8")
        );
    }

    #[test]
    fn test_first_sentences_url() {
        assert_eq!(
            page_query_url(EP, PageQuery::FirstSentences(2), "7"),
            format!(
                "{EP}action=query&prop=extracts&exsentences=2&explaintext=&exsectionformat=plain&pageids=7"
            )
        );
    }

    #[test]
    fn test_plain_text_url() {
        assert_eq!(
            page_query_url(EP, PageQuery::PlainText, "7"),
            format!(
                "{EP}action=query&prop=extracts&exlimit=1&explaintext=&exsectionformat=plain&pageids=7"
            )
        );
    }

    #[test]
    fn test_excerpt_url() {
        assert_eq!(
            page_query_url(EP, PageQuery::ExcerptByChars(200), "7"),
            format!("{EP}action=query&prop=extracts&exchars=200&pageids=7")
        );
    }

    #[test]
    fn test_categories_and_langlinks_urls() {
        assert_eq!(
            page_query_url(EP, PageQuery::Categories, "7"),
            format!("{EP}action=query&prop=categories&pageids=7")
        );
        assert_eq!(
            page_query_url(EP, PageQuery::LangLinks, "7"),
            format!("{EP}action=query&prop=langlinks&llprop=url&pageids=7")
        );
    }

    #[test]
    fn test_images_url() {
        assert_eq!(
            images_url(EP, 99),
            format!("{EP}action=query&generator=images&prop=imageinfo&iiprop=url%7Csize&pageids=99")
        );
    }

    #[test]
    fn test_bulk_url_prefers_sentences() {
        let url = bulk_url(EP, &BulkOptions::default());
        assert_eq!(
            url,
            format!(
                "{EP}action=query&generator=random&grnnamespace=0&grnlimit=1&prop=info%7Cextracts&inprop=url&explaintext=&exsectionformat=plain&exsentences=5"
            )
        );
    }

    #[test]
    fn test_bulk_url_falls_back_to_chars() {
        let options = BulkOptions {
            limit: 3,
            sentences: 0,
            chars: 120,
            ..BulkOptions::default()
        };
        let url = bulk_url(EP, &options);
        assert!(url.contains("grnlimit=3"));
        assert!(url.ends_with("&exchars=120"));
        assert!(!url.contains("exsentences"));
    }

    #[test]
    fn test_bulk_url_without_extract_limit() {
        let options = BulkOptions {
            sentences: 0,
            chars: 0,
            ..BulkOptions::default()
        };
        let url = bulk_url(EP, &options);
        assert!(url.ends_with("exsectionformat=plain"));
    }
}
