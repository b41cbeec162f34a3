//! Core library for wikirand
//!
//! This crate implements the **Functional Core** of wikirand, following the
//! Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`wikirand_core`** (this crate): Pure transformation functions with zero I/O
//! - **`wikirand`**: the stateful client, HTTP transport, and command line front end
//!
//! Everything here takes strings or decoded JSON in and hands typed values out.
//! Nothing performs requests, so every function is tested with fixture data.
//!
//! # Module Organization
//!
//! - [`site`]: Supported languages and engines, endpoint derivation
//! - [`request`]: URL builders for each API operation
//! - [`response`]: Serde models for MediaWiki responses and page normalization
//! - [`extract`]: Index-or-all field selection, category and image shaping, bulk records
//! - [`error`]: The error taxonomy shared with the client
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use wikirand_core::extract::{resolve_selection, select_field, Selection};
//! use wikirand_core::response::{article_pages, decode_body, decode_pages};
//!
//! let value = decode_body(r#"{"query":{"pages":{"7":{"pageid":7,"title":"Seven"}}}}"#)?;
//! let pages = article_pages(decode_pages(&value)?);
//! let target = resolve_selection(Selection::Default, &[7])?;
//! let title = select_field(&pages, target, |p| p.title.clone());
//! ```

pub mod error;
pub mod extract;
pub mod request;
pub mod response;
pub mod site;

pub use error::WikiError;
