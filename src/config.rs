//! Endpoint configuration for the EFetch client
//!
//! [`FetcherConfig`] is what callers build; [`FetcherConfig::resolve`] turns it
//! into an immutable [`ResolvedConfig`] with every default filled in. The
//! caller's value is never modified.

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;

/// EFetch endpoint for PubMed XML records, without the scheme
pub const EFETCH_PUBMED_ENDPOINT: &str =
    "eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi?db=pubmed&rettype=xml&id=";

/// Timeout applied by [`FetcherConfig::with_default_transport`]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Caller-side configuration for [`PubMedFetcher`](crate::PubMedFetcher)
///
/// # Example
///
/// ```
/// use pubmed_fetch::FetcherConfig;
/// use std::time::Duration;
///
/// let config = FetcherConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-lab-tool/1.0 (mailto:lab@example.org)")
///     .with_default_transport()
///     .unwrap();
///
/// assert!(config.effective_base_url().starts_with("https://"));
/// ```
#[derive(Clone, Debug)]
pub struct FetcherConfig {
    /// Base URL the comma-joined PMIDs are appended to.
    /// `None` or an empty string selects the NCBI endpoint.
    pub base_url: Option<String>,
    /// Use `https` for the default endpoint
    pub secure: bool,
    /// HTTP transport carrying timeout, keep-alive and compression policy
    pub transport: Option<Client>,
    /// Value of the `User-Agent` header sent with each request
    pub user_agent: Option<String>,
    /// Timeout for the transport built by `with_default_transport`
    pub timeout: Duration,
    /// Percent-encode identifiers before inserting them into the URL
    pub encode_identifiers: bool,
}

impl FetcherConfig {
    pub fn new() -> Self {
        Self {
            base_url: None,
            secure: true,
            transport: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
            encode_identifiers: false,
        }
    }

    /// Override the EFetch base URL (useful for mirrors and mock servers)
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Choose between the `https` and `http` variants of the default endpoint
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Use a caller-built HTTP client as transport
    pub fn with_transport(mut self, transport: Client) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Percent-encode each identifier when building the request URL
    pub fn with_encoded_identifiers(mut self, encode: bool) -> Self {
        self.encode_identifiers = encode;
        self
    }

    /// Build a transport from this configuration
    ///
    /// The client applies [`timeout`](Self::timeout), keeps no idle
    /// connections and accepts gzip-compressed responses.
    pub fn with_default_transport(mut self) -> Result<Self> {
        let client = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(0)
            .gzip(true)
            .user_agent(self.effective_user_agent())
            .build()?;
        self.transport = Some(client);
        Ok(self)
    }

    /// Base URL that requests will actually use
    pub fn effective_base_url(&self) -> String {
        match self.base_url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => {
                let scheme = if self.secure { "https" } else { "http" };
                format!("{scheme}://{EFETCH_PUBMED_ENDPOINT}")
            }
        }
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("pubmed-fetch/{}", env!("CARGO_PKG_VERSION")))
    }

    /// Snapshot this configuration with all defaults applied
    pub fn resolve(&self) -> ResolvedConfig {
        ResolvedConfig {
            base_url: self.effective_base_url(),
            transport: self.transport.clone(),
            user_agent: self.effective_user_agent(),
            encode_identifiers: self.encode_identifiers,
        }
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable configuration used for every request of a fetcher
#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub transport: Option<Client>,
    pub user_agent: String,
    pub encode_identifiers: bool,
}
