//! The stateful wiki client
//!
//! [`WikiRand`] holds the site configuration, the endpoint derived from it,
//! and the ids of the articles loaded by the last random or bulk fetch. All
//! requests are issued one at a time; image lookups go out one page at a time.

use crate::config::WikiConfig;
use crate::transport::{ReqwestTransport, Transport};
use serde_json::Value;
use wikirand_core::extract::{
    build_bulk_records, filter_images, page_categories, resolve_selection, select_field,
    BulkRecord, Extracted, Selection, Target,
};
use wikirand_core::request::{
    bulk_url, images_url, join_ids, page_query_url, random_url, BulkOptions, PageQuery,
};
use wikirand_core::response::{
    article_pages, check_api_error, decode_body, decode_optional_body, decode_pages,
    decode_random_ids, LangLink, WikiPage,
};
use wikirand_core::site::{Engine, Language};
use wikirand_core::WikiError;

pub type Result<T> = std::result::Result<T, WikiError>;

/// Client for random Wikipedia / Wikiquote articles
#[derive(Debug)]
pub struct WikiRand<T = ReqwestTransport> {
    transport: T,
    config: WikiConfig,
    endpoint: String,
    article_ids: Vec<u64>,
}

impl WikiRand<ReqwestTransport> {
    /// Create a client over HTTP. No request is made until a fetch is called.
    pub fn new(config: WikiConfig) -> Result<Self> {
        Ok(Self::with_transport(config, ReqwestTransport::new()?))
    }

    /// Create a client configured from `WIKIRAND_LANGUAGE` / `WIKIRAND_ENGINE`
    pub fn from_env() -> Result<Self> {
        Self::new(WikiConfig::from_env()?)
    }
}

impl<T: Transport> WikiRand<T> {
    pub fn with_transport(config: WikiConfig, transport: T) -> Self {
        Self {
            endpoint: config.endpoint(),
            transport,
            config,
            article_ids: Vec::new(),
        }
    }

    pub fn config(&self) -> WikiConfig {
        self.config
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    pub fn engine(&self) -> Engine {
        self.config.engine
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn supported_languages(&self) -> Vec<&'static str> {
        Language::codes()
    }

    pub fn supported_engines(&self) -> Vec<&'static str> {
        Engine::names()
    }

    /// Ids loaded by the last random or bulk fetch
    pub fn ids(&self) -> &[u64] {
        &self.article_ids
    }

    /// Switch language and return the new endpoint
    ///
    /// An empty code keeps the current language. On error the configuration
    /// is left untouched.
    pub fn set_language(&mut self, code: &str) -> Result<String> {
        if !code.is_empty() {
            self.config.language = code.parse()?;
        }
        self.endpoint = self.config.endpoint();
        Ok(self.endpoint.clone())
    }

    /// Switch engine and return the new endpoint
    pub fn set_engine(&mut self, name: &str) -> Result<String> {
        self.config.engine = name.parse()?;
        self.endpoint = self.config.endpoint();
        Ok(self.endpoint.clone())
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        log::debug!("GET {url}");
        let body = self.transport.get(url).await?;
        decode_body(&body)
    }

    /// Load `count` random articles, replacing the current set
    pub async fn fetch_random_articles(&mut self, count: u32) -> Result<Vec<u64>> {
        let value = self.get_json(&random_url(&self.endpoint, count)).await?;
        let ids = decode_random_ids(value)?;

        log::info!("Loaded {} random article(s) from {}", ids.len(), self.config.language);
        self.article_ids = ids.clone();
        Ok(ids)
    }

    /// Loaded ids joined with `|`
    pub fn ids_joined(&self) -> Result<String> {
        join_ids(&self.article_ids)
    }

    async fn page_field<V, F>(
        &self,
        query: PageQuery,
        selection: Selection,
        field: F,
    ) -> Result<Extracted<V>>
    where
        V: Default,
        F: Fn(&WikiPage) -> Option<V>,
    {
        let target = resolve_selection(selection, &self.article_ids)?;
        let ids = self.ids_joined()?;

        let value = self
            .get_json(&page_query_url(&self.endpoint, query, &ids))
            .await?;
        let pages = article_pages(decode_pages(&value)?);

        Ok(select_field(&pages, target, field))
    }

    pub async fn title(&self, selection: Selection) -> Result<Extracted<String>> {
        self.page_field(PageQuery::Title, selection, |page| page.title.clone())
            .await
    }

    /// Canonical article URL (`fullurl`)
    pub async fn link(&self, selection: Selection) -> Result<Extracted<String>> {
        self.page_field(PageQuery::Link, selection, |page| page.fullurl.clone())
            .await
    }

    /// First `count` sentences of the plain-text extract
    pub async fn first_sentences(
        &self,
        count: u32,
        selection: Selection,
    ) -> Result<Extracted<String>> {
        self.page_field(PageQuery::FirstSentences(count), selection, |page| {
            page.extract.clone()
        })
        .await
    }

    pub async fn plain_text(&self, selection: Selection) -> Result<Extracted<String>> {
        self.page_field(PageQuery::PlainText, selection, |page| page.extract.clone())
            .await
    }

    /// Extract cut to roughly `chars` characters (HTML, as returned by the API)
    pub async fn excerpt_by_chars(
        &self,
        chars: u32,
        selection: Selection,
    ) -> Result<Extracted<String>> {
        self.page_field(PageQuery::ExcerptByChars(chars), selection, |page| {
            page.extract.clone()
        })
        .await
    }

    /// Category names with their namespace prefix removed
    pub async fn categories(&self, selection: Selection) -> Result<Extracted<Vec<String>>> {
        self.page_field(PageQuery::Categories, selection, page_categories)
            .await
    }

    pub async fn other_language_links(
        &self,
        selection: Selection,
    ) -> Result<Extracted<Vec<LangLink>>> {
        self.page_field(PageQuery::LangLinks, selection, |page| page.langlinks.clone())
            .await
    }

    /// Image URLs of a single page, `None` when the service returned nothing usable
    ///
    /// A MediaWiki error payload is not "nothing usable" and fails with `Upstream`.
    async fn page_images(&self, page_id: u64, min_size: u64) -> Result<Option<Vec<String>>> {
        let url = images_url(&self.endpoint, page_id);
        log::debug!("GET {url}");
        let body = self.transport.get(&url).await?;

        let Some(value) = decode_optional_body(&body) else {
            log::warn!("No usable image response for page {page_id}");
            return Ok(None);
        };

        check_api_error(&value)?;
        let pages = decode_pages(&value)?;
        Ok(Some(filter_images(&pages, min_size)))
    }

    /// Image URLs for the selected articles, dropping files under `min_size` bytes
    ///
    /// If any page's image lookup comes back empty-handed the whole result is
    /// an empty collection.
    pub async fn article_images(
        &self,
        selection: Selection,
        min_size: u64,
    ) -> Result<Extracted<Vec<String>>> {
        let target = resolve_selection(selection, &self.article_ids)?;

        match target {
            Target::One(page_id) => match self.page_images(page_id, min_size).await? {
                Some(images) => Ok(Extracted::One(images)),
                None => Ok(Extracted::empty(target)),
            },
            Target::All => {
                let mut result = std::collections::BTreeMap::new();
                for page_id in &self.article_ids {
                    match self.page_images(*page_id, min_size).await? {
                        Some(images) => {
                            result.insert(*page_id, images);
                        }
                        None => return Ok(Extracted::empty(target)),
                    }
                }
                Ok(Extracted::All(result))
            }
        }
    }

    /// Fetch a batch of random articles with their extracts in one request
    ///
    /// Replaces the loaded ids with the ids of the returned records. When
    /// `with_images` is set, each record gets an image list from one extra
    /// request per page.
    pub async fn fetch_bulk(&mut self, options: BulkOptions) -> Result<Vec<BulkRecord>> {
        let url = bulk_url(&self.endpoint, &options);
        log::debug!("GET {url}");
        let body = self.transport.get(&url).await?;

        let Some(value) = decode_optional_body(&body) else {
            log::warn!("No usable bulk response");
            return Ok(Vec::new());
        };
        check_api_error(&value)?;

        let mut records = build_bulk_records(article_pages(decode_pages(&value)?));
        self.article_ids = records.iter().map(|record| record.page_id).collect();
        log::info!("Loaded {} bulk article(s)", records.len());

        if options.with_images {
            for record in records.iter_mut() {
                let images = self
                    .page_images(record.page_id, options.min_image_size)
                    .await?;
                record.images = Some(images.unwrap_or_default());
            }
        }

        Ok(records)
    }
}
