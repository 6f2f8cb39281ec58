//! PubMed EFetch client for batch article retrieval
//!
//! This module builds EFetch request URLs, performs the request and decodes the
//! `PubmedArticleSet` XML response into article metadata.

pub mod client;
pub mod models;
pub mod parser;
pub mod request;

// Re-export public types
pub use client::{PubMedFetcher, fetch_raw};
pub use models::{Affiliation, Author, PubMedArticle};
pub use parser::{parse_articles, parse_articles_from_xml};
pub use request::{build_url, build_url_encoded};
