//! Random Wikipedia and Wikiquote articles
//!
//! This crate is the Imperative Shell over [`wikirand_core`]: it owns the
//! session state and performs the HTTP requests, while URL building and JSON
//! reshaping live in the core.
//!
//! ```rust,ignore
//! use wikirand::{Selection, WikiConfig, WikiRand};
//!
//! let mut wiki = WikiRand::new(WikiConfig::new("en", "encyclopedia")?)?;
//! wiki.fetch_random_articles(1).await?;
//! let title = wiki.title(Selection::Default).await?;
//! ```

pub mod client;
pub mod config;
pub mod transport;

pub use client::WikiRand;
pub use config::WikiConfig;
pub use transport::{ReqwestTransport, Transport};

// Re-export domain types from core
pub use wikirand_core::extract::{BulkRecord, Extracted, Selection};
pub use wikirand_core::request::BulkOptions;
pub use wikirand_core::response::LangLink;
pub use wikirand_core::site::{Engine, Language};
pub use wikirand_core::WikiError;
