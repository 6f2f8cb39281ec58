//! Error handling tests for the EFetch pipeline
//!
//! Precondition failures must happen before any network activity, and
//! transport failures must stay distinct from decode failures.

use std::time::Duration;

use pubmed_fetch::{FetchError, FetcherConfig, PubMedFetcher};
use rstest::rstest;
use tracing_test::traced_test;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Nothing listens on the discard port of localhost
const UNREACHABLE_BASE: &str = "http://127.0.0.1:9/efetch.fcgi?db=pubmed&rettype=xml&id=";

fn fetcher_for(base_url: &str) -> PubMedFetcher {
    let config = FetcherConfig::new()
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(5))
        .with_default_transport()
        .expect("transport should build");
    PubMedFetcher::with_config(&config)
}

#[tokio::test]
#[traced_test]
async fn test_empty_batch_never_touches_network() {
    let fetcher = fetcher_for(UNREACHABLE_BASE);

    let err = fetcher.get_articles::<&str>(&[]).await.unwrap_err();
    assert!(matches!(err, FetchError::EmptyBatch));
    assert!(err.is_precondition());

    let err = fetcher.get_articles_raw(&["", ""]).await.unwrap_err();
    assert!(matches!(err, FetchError::EmptyBatch));
}

#[tokio::test]
#[traced_test]
async fn test_missing_transport_never_touches_network() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = FetcherConfig::new().with_base_url(format!("{}/efetch.fcgi?id=", mock_server.uri()));
    let fetcher = PubMedFetcher::with_config(&config);

    let err = fetcher.get_articles(&["31978945"]).await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidTransport));

    let received = mock_server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_unreachable_host_is_transport_error() {
    let fetcher = fetcher_for(UNREACHABLE_BASE);

    let err = fetcher.get_articles(&["31978945"]).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
    assert!(!err.is_precondition());
}

#[rstest]
#[case("not a url at all?id=")]
#[case("ftp//missing-colon/efetch?id=")]
#[tokio::test]
async fn test_malformed_base_url_is_transport_error(#[case] base_url: &str) {
    let fetcher = fetcher_for(base_url);

    let err = fetcher.get_articles(&["31978945"]).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
}

#[rstest]
#[case(404)]
#[case(429)]
#[case(500)]
#[case(503)]
#[tokio::test]
async fn test_error_status_is_transport_error(#[case] status: u16) {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status).set_body_string("<html>error</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&format!("{}/efetch.fcgi?id=", mock_server.uri()));
    let err = fetcher.get_articles(&["31978945"]).await.unwrap_err();

    match err {
        FetchError::Transport(e) => assert_eq!(e.status().map(|s| s.as_u16()), Some(status)),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
#[traced_test]
async fn test_transport_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let config = FetcherConfig::new()
        .with_base_url(format!("{}/efetch.fcgi?id=", mock_server.uri()))
        .with_timeout(Duration::from_millis(200))
        .with_default_transport()
        .unwrap();
    let fetcher = PubMedFetcher::with_config(&config);

    let err = fetcher.get_articles(&["31978945"]).await.unwrap_err();
    match err {
        FetchError::Transport(e) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
#[traced_test]
async fn test_malformed_xml_is_decode_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<PubmedArticleSet><PubmedArticle><MedlineCitation>"),
        )
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&format!("{}/efetch.fcgi?id=", mock_server.uri()));
    let err = fetcher.get_articles(&["31978945"]).await.unwrap_err();

    assert!(matches!(err, FetchError::Decode { .. }), "got {err:?}");
    assert!(!err.is_precondition());
}
