//! EFetch request pipeline and the batch fetcher built on it

use crate::config::{FetcherConfig, ResolvedConfig};
use crate::error::{FetchError, Result};
use crate::pubmed::models::PubMedArticle;
use crate::pubmed::parser::parse_articles;
use crate::pubmed::request::{build_url, build_url_encoded, has_identifiers};
use reqwest::Client;
use reqwest::header::{CONNECTION, USER_AGENT};
use tracing::{debug, info, instrument, warn};

/// Client for batch retrieval of PubMed records through EFetch
///
/// Every call issues exactly one request on a fresh connection. The fetcher
/// holds an immutable [`ResolvedConfig`] and can be cloned and shared across
/// tasks freely.
#[derive(Clone, Debug)]
pub struct PubMedFetcher {
    config: ResolvedConfig,
}

impl PubMedFetcher {
    /// Create a fetcher for the NCBI endpoint with a default transport
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_fetch::PubMedFetcher;
    ///
    /// let fetcher = PubMedFetcher::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        let config = FetcherConfig::new().with_default_transport()?;
        Ok(Self::with_config(&config))
    }

    /// Create a fetcher from a caller-owned configuration
    ///
    /// The configuration is resolved once; later changes to `config` do not
    /// affect this fetcher.
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_fetch::{FetcherConfig, PubMedFetcher};
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let config = FetcherConfig::new()
    ///     .with_transport(http_client)
    ///     .with_user_agent("my-lab-tool/1.0");
    ///
    /// let fetcher = PubMedFetcher::with_config(&config);
    /// ```
    pub fn with_config(config: &FetcherConfig) -> Self {
        Self {
            config: config.resolve(),
        }
    }

    /// Create a fetcher for the NCBI endpoint using a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self::with_config(&FetcherConfig::new().with_transport(client))
    }

    /// Configuration used for every request
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Fetch and decode the records for a batch of PMIDs
    ///
    /// Identifiers that PubMed cannot resolve are simply absent from the
    /// result; an all-unresolved batch yields an empty vector.
    ///
    /// # Errors
    ///
    /// * `FetchError::EmptyBatch` - If no identifier is non-empty
    /// * `FetchError::MissingEndpoint` - If the base URL is empty
    /// * `FetchError::InvalidTransport` - If no HTTP client is configured
    /// * `FetchError::Transport` - If the HTTP request fails
    /// * `FetchError::Decode` - If the response is not a PubmedArticleSet
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_fetch::PubMedFetcher;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let fetcher = PubMedFetcher::new()?;
    ///     let articles = fetcher.get_articles(&["31978945", "33515491"]).await?;
    ///     for article in &articles {
    ///         println!("{}: {}", article.pmid, article.title);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_articles<S: AsRef<str> + Sync>(
        &self,
        identifiers: &[S],
    ) -> Result<Vec<PubMedArticle>> {
        self.get_articles_and_raw(identifiers)
            .await
            .map(|(articles, _)| articles)
            .map_err(FetchError::without_raw)
    }

    /// Fetch the records together with the raw response body
    ///
    /// On a decode failure the returned [`FetchError::Decode`] carries the
    /// body, available through [`FetchError::raw_body`].
    #[instrument(skip_all, fields(ids_count = identifiers.len()))]
    pub async fn get_articles_and_raw<S: AsRef<str> + Sync>(
        &self,
        identifiers: &[S],
    ) -> Result<(Vec<PubMedArticle>, Vec<u8>)> {
        let raw = fetch_raw(identifiers, &self.config).await?;

        match parse_articles(&raw) {
            Ok(articles) => {
                info!(
                    requested = identifiers.iter().filter(|id| !id.as_ref().is_empty()).count(),
                    parsed = articles.len(),
                    "Batch fetch completed"
                );
                Ok((articles, raw))
            }
            Err(e) => {
                warn!(error = %e, body_bytes = raw.len(), "Failed to decode EFetch response");
                Err(e.with_raw(raw))
            }
        }
    }

    /// Fetch the raw response body without decoding it
    pub async fn get_articles_raw<S: AsRef<str> + Sync>(&self, identifiers: &[S]) -> Result<Vec<u8>> {
        fetch_raw(identifiers, &self.config).await
    }
}

/// Issue one EFetch request and read the whole response body
///
/// Preconditions are checked in order before any network activity: a
/// non-empty identifier, a non-empty base URL, then a transport. The request
/// asks the server to close the connection, and the body is read to
/// completion before returning. Nothing is retried.
#[instrument(skip_all, fields(ids_count = identifiers.len()))]
pub async fn fetch_raw<S: AsRef<str> + Sync>(
    identifiers: &[S],
    config: &ResolvedConfig,
) -> Result<Vec<u8>> {
    if !has_identifiers(identifiers) {
        return Err(FetchError::EmptyBatch);
    }
    if config.base_url.is_empty() {
        return Err(FetchError::MissingEndpoint);
    }
    let Some(transport) = config.transport.as_ref() else {
        return Err(FetchError::InvalidTransport);
    };

    let url = if config.encode_identifiers {
        build_url_encoded(&config.base_url, identifiers)
    } else {
        build_url(&config.base_url, identifiers)
    };

    debug!(url = %url, "Making EFetch API request");
    let response = transport
        .get(&url)
        .header(CONNECTION, "close")
        .header(USER_AGENT, config.user_agent.as_str())
        .send()
        .await
        .map_err(|e| {
            warn!(url = %url, error = %e, "EFetch request failed");
            FetchError::from(e)
        })?;

    let status = response.status();
    let response = response.error_for_status().map_err(|e| {
        warn!("API request failed with status: {}", status);
        FetchError::from(e)
    })?;

    let body = response.bytes().await?;
    debug!(body_bytes = body.len(), "Received EFetch response");

    Ok(body.to_vec())
}
