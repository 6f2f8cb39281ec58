//! # PubMed Fetch
//!
//! Batch retrieval of PubMed article metadata by PMID through the NCBI EFetch
//! E-utility.
//!
//! A batch of identifiers becomes one request URL, one HTTP GET is issued
//! through a caller-supplied [`reqwest::Client`], and the `PubmedArticleSet`
//! XML response is decoded into [`PubMedArticle`] records. Identifiers that do
//! not resolve are silently absent from the result.
//!
//! ## Features
//!
//! - **Single-request batches**: PMIDs are comma-joined into one EFetch call
//! - **Raw access**: get the decoded records, the raw XML, or both
//! - **Caller-owned transport**: timeouts, keep-alive and compression come from
//!   the `reqwest::Client` you supply
//! - **Structured logging**: request URLs and batch outcomes are emitted
//!   through `tracing`
//!
//! ## Quick Start
//!
//! ```no_run
//! use pubmed_fetch::{FetcherConfig, PubMedFetcher};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FetcherConfig::new()
//!         .with_timeout(Duration::from_secs(20))
//!         .with_user_agent("my-lab-tool/1.0 (mailto:lab@example.org)")
//!         .with_default_transport()?;
//!     let fetcher = PubMedFetcher::with_config(&config);
//!
//!     let (articles, raw) = fetcher
//!         .get_articles_and_raw(&["31978945", "33515491", "not-a-pmid"])
//!         .await?;
//!
//!     println!("{} records from {} bytes", articles.len(), raw.len());
//!     for article in articles {
//!         println!("{}: {}", article.pmid, article.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod pubmed;

// Re-export main types for convenience
pub use config::{FetcherConfig, ResolvedConfig};
pub use error::{FetchError, Result};
pub use pubmed::{Author, PubMedArticle, PubMedFetcher};
