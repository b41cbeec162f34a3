//! MediaWiki API response models and decoding
//!
//! `query.pages` comes back either as an object keyed by page id (the default
//! `format=json` shape) or as an array of page objects (`formatversion=2`).
//! [`decode_pages`] accepts both and always yields `(key, page)` pairs in
//! ascending key order. Keys are signed: files hosted on a shared repository
//! show up under negative placeholder keys in image queries.

use crate::error::WikiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Entry of `query.random`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RandomEntry {
    pub id: u64,
    #[serde(default)]
    pub ns: i64,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
struct RandomQuery {
    random: Vec<RandomEntry>,
}

#[derive(Debug, Deserialize)]
struct RandomResponse {
    query: RandomQuery,
}

/// Category reference attached to a page
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CategoryRef {
    #[serde(default)]
    pub ns: i64,
    pub title: String,
}

/// Link to the same article in another language
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LangLink {
    pub lang: String,
    #[serde(default)]
    pub url: String,
    /// Article title in the target language
    #[serde(rename = "*", default)]
    pub title: String,
}

/// First `imageinfo` revision of a file page
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ImageInfo {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub size: u64,
}

/// Page object from `query.pages`; each query only fills in the props it asked for
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct WikiPage {
    #[serde(default)]
    pub pageid: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub length: Option<u64>,
    #[serde(default)]
    pub fullurl: Option<String>,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<CategoryRef>>,
    #[serde(default)]
    pub langlinks: Option<Vec<LangLink>>,
    #[serde(default)]
    pub imageinfo: Option<Vec<ImageInfo>>,
}

/// Decode a response body into JSON, mapping failures to `Upstream`
pub fn decode_body(body: &str) -> Result<Value, WikiError> {
    let value: Value = serde_json::from_str(body)?;
    check_api_error(&value)?;
    Ok(value)
}

/// Decode a body that may legitimately be unusable
///
/// Returns `None` for a blank body, invalid JSON, or a JSON value that carries
/// nothing (`null`, `false`, `{}`, `[]`). Callers treat `None` as "the service
/// returned nothing" rather than as an error.
pub fn decode_optional_body(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }

    let value: Value = serde_json::from_str(body).ok()?;
    let usable = match &value {
        Value::Null | Value::Bool(false) => false,
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::String(s) => !s.is_empty(),
        _ => true,
    };

    usable.then_some(value)
}

/// Surface a MediaWiki `{"error": {"code", "info"}}` payload as `Upstream`
pub fn check_api_error(value: &Value) -> Result<(), WikiError> {
    let Some(error) = value.get("error") else {
        return Ok(());
    };

    let code = error.get("code").and_then(Value::as_str).unwrap_or("unknown");
    let info = error.get("info").and_then(Value::as_str).unwrap_or("");
    Err(WikiError::Upstream(format!("API error {code}: {info}")))
}

/// Ids from a `list=random` response, in response order
pub fn decode_random_ids(value: Value) -> Result<Vec<u64>, WikiError> {
    let response: RandomResponse = serde_json::from_value(value)?;
    Ok(response.query.random.into_iter().map(|entry| entry.id).collect())
}

/// Normalize `query.pages` into `(key, page)` pairs
///
/// A response without `query.pages` (for example an image query on a page
/// with no images) yields an empty list.
pub fn decode_pages(value: &Value) -> Result<Vec<(i64, WikiPage)>, WikiError> {
    let Some(pages) = value.get("query").and_then(|q| q.get("pages")) else {
        return Ok(Vec::new());
    };

    let mut entries = match pages {
        Value::Object(map) => map
            .iter()
            .map(|(key, page)| -> Result<(i64, WikiPage), WikiError> {
                let key = key
                    .parse::<i64>()
                    .map_err(|_| WikiError::Upstream(format!("Invalid page key: {key}")))?;
                let page: WikiPage = serde_json::from_value(page.clone())?;
                Ok((key, page))
            })
            .collect::<Result<Vec<_>, WikiError>>()?,
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, page)| -> Result<(i64, WikiPage), WikiError> {
                let page: WikiPage = serde_json::from_value(page.clone())?;
                let key = page
                    .pageid
                    .and_then(|id| i64::try_from(id).ok())
                    .unwrap_or(-(idx as i64) - 1);
                Ok((key, page))
            })
            .collect::<Result<Vec<_>, WikiError>>()?,
        other => {
            return Err(WikiError::Upstream(format!(
                "Unexpected shape for query.pages: {other}"
            )))
        }
    };

    entries.sort_by_key(|(key, _)| *key);
    Ok(entries)
}

/// Only the pages that belong to real articles (non-negative ids)
pub fn article_pages(entries: Vec<(i64, WikiPage)>) -> Vec<(u64, WikiPage)> {
    entries
        .into_iter()
        .filter_map(|(key, page)| u64::try_from(key).ok().map(|id| (id, page)))
        .collect()
}
