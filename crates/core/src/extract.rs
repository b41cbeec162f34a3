//! Field extraction over decoded pages
//!
//! Per-article accessors either return one article's value or a mapping from
//! page id to value for every article. [`Selection`] picks between the two and
//! [`Extracted`] carries the result.

use crate::error::WikiError;
use crate::response::WikiPage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which loaded article(s) an accessor should report on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Sole article when exactly one is loaded, every article otherwise
    #[default]
    Default,
    /// Article at this position in the loaded id list; with a single
    /// article loaded, any position selects it
    Index(usize),
    /// Every article, keyed by page id
    All,
}

/// Selection resolved against the loaded ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    One(u64),
    All,
}

/// Result of a per-article accessor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Extracted<T> {
    One(T),
    All(BTreeMap<u64, T>),
}

impl<T> Extracted<T> {
    pub fn one(self) -> Option<T> {
        match self {
            Extracted::One(value) => Some(value),
            Extracted::All(_) => None,
        }
    }

    pub fn all(self) -> Option<BTreeMap<u64, T>> {
        match self {
            Extracted::One(_) => None,
            Extracted::All(values) => Some(values),
        }
    }

    /// Empty value in the same shape as `target`
    pub fn empty(target: Target) -> Self
    where
        T: Default,
    {
        match target {
            Target::One(_) => Extracted::One(T::default()),
            Target::All => Extracted::All(BTreeMap::new()),
        }
    }
}

/// Resolve a selection against the loaded article ids
pub fn resolve_selection(selection: Selection, ids: &[u64]) -> Result<Target, WikiError> {
    if ids.is_empty() {
        return Err(WikiError::EmptyArticleSet);
    }

    match selection {
        Selection::All => Ok(Target::All),
        Selection::Default if ids.len() == 1 => Ok(Target::One(ids[0])),
        Selection::Default => Ok(Target::All),
        Selection::Index(_) if ids.len() == 1 => Ok(Target::One(ids[0])),
        Selection::Index(index) => ids
            .get(index)
            .map(|id| Target::One(*id))
            .ok_or(WikiError::ArticleIndexOutOfRange {
                index,
                len: ids.len(),
            }),
    }
}

/// Pull one field out of each page, falling back to `T::default()` when absent
pub fn select_field<T, F>(pages: &[(u64, WikiPage)], target: Target, field: F) -> Extracted<T>
where
    T: Default,
    F: Fn(&WikiPage) -> Option<T>,
{
    match target {
        Target::One(id) => Extracted::One(
            pages
                .iter()
                .find(|(page_id, _)| *page_id == id)
                .and_then(|(_, page)| field(page))
                .unwrap_or_default(),
        ),
        Target::All => Extracted::All(
            pages
                .iter()
                .map(|(page_id, page)| (*page_id, field(page).unwrap_or_default()))
                .collect(),
        ),
    }
}

/// Drop the namespace prefix of a category title
///
/// Everything up to and including the first colon goes, along with any colons
/// right after it. Titles without a colon come back unchanged.
pub fn strip_category_prefix(title: &str) -> String {
    match title.split_once(':') {
        Some((_, rest)) => rest.trim_start_matches(':').to_string(),
        None => title.to_string(),
    }
}

pub fn page_categories(page: &WikiPage) -> Option<Vec<String>> {
    page.categories.as_ref().map(|categories| {
        categories
            .iter()
            .map(|category| strip_category_prefix(&category.title))
            .collect()
    })
}

/// URLs of the images in an image-info response that meet `min_size` bytes
///
/// A `min_size` of zero keeps everything.
pub fn filter_images(pages: &[(i64, WikiPage)], min_size: u64) -> Vec<String> {
    pages
        .iter()
        .filter_map(|(_, page)| page.imageinfo.as_ref()?.first())
        .filter(|info| min_size == 0 || info.size >= min_size)
        .filter_map(|info| info.url.clone())
        .collect()
}

/// One article from a bulk fetch
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BulkRecord {
    pub page_id: u64,
    pub title: String,
    pub length: u64,
    pub url: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub images: Option<Vec<String>>,
}

pub fn build_bulk_records(pages: Vec<(u64, WikiPage)>) -> Vec<BulkRecord> {
    pages
        .into_iter()
        .map(|(page_id, page)| BulkRecord {
            page_id,
            title: page.title.unwrap_or_default(),
            length: page.length.unwrap_or(0),
            url: page.fullurl.unwrap_or_default(),
            text: page.extract.unwrap_or_default(),
            images: None,
        })
        .collect()
}
