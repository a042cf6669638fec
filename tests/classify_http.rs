//! HTTP classification against a local mock server.
//!
//! Covers the outcomes a single GET can have: healthy, HTTP error, parking
//! page, and the transport failures (timeout, refused connection, redirects).

use std::sync::Arc;
use std::time::Duration;

use dapp_url_check::classify::{HttpClassifier, ParkingDetector, UrlClassifier};
use dapp_url_check::config::PARKING_TEXTS;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn classifier_with_timeout(timeout: Duration) -> HttpClassifier {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to build client");
    HttpClassifier::new(
        Arc::new(client),
        ParkingDetector::new(PARKING_TEXTS.iter().map(|s| s.to_string()).collect()),
    )
}

fn classifier() -> HttpClassifier {
    classifier_with_timeout(Duration::from_secs(5))
}

#[tokio::test]
async fn test_plain_200_is_healthy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Welcome to the dapp</html>"))
        .mount(&server)
        .await;

    let result = classifier().classify(&format!("{}/", server.uri())).await;

    assert!(result.is_healthy());
    assert_eq!(result.status_code, 200);
    assert_eq!(result.error_kind(), "");
    assert_eq!(result.error_message(), "");
}

#[tokio::test]
async fn test_parking_page_is_flagged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html>Sedo's Domain Parking</html>"),
        )
        .mount(&server)
        .await;

    let result = classifier().classify(&format!("{}/", server.uri())).await;

    assert!(!result.is_healthy());
    assert_eq!(result.status_code, 200);
    assert_eq!(result.error_kind(), "domain-parking");
    assert_eq!(result.error_message(), "domain parking page detected ");
}

#[tokio::test]
async fn test_parking_phrase_is_case_sensitive() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("domain parking"))
        .mount(&server)
        .await;

    let result = classifier().classify(&format!("{}/", server.uri())).await;

    assert!(result.is_healthy());
}

#[tokio::test]
async fn test_404_is_http_error_without_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Domain Parking"))
        .mount(&server)
        .await;

    let result = classifier().classify(&format!("{}/gone", server.uri())).await;

    assert_eq!(result.status_code, 404);
    assert_eq!(result.error_kind(), "");
    assert_eq!(result.error_message(), "");
}

#[tokio::test]
async fn test_204_is_not_healthy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let result = classifier().classify(&format!("{}/empty", server.uri())).await;

    assert!(!result.is_healthy());
    assert_eq!(result.status_code, 204);
    assert_eq!(result.error_kind(), "");
}

#[tokio::test]
async fn test_redirect_to_200_is_healthy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("Location", format!("{}/new", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("moved here"))
        .mount(&server)
        .await;

    let result = classifier().classify(&format!("{}/old", server.uri())).await;

    assert!(result.is_healthy());
}

#[tokio::test]
async fn test_redirect_loop_is_too_many_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", format!("{}/loop", server.uri())),
        )
        .mount(&server)
        .await;

    let result = classifier().classify(&format!("{}/loop", server.uri())).await;

    assert_eq!(result.status_code, 0);
    assert_eq!(result.error_kind(), "too-many-redirects");
    assert!(!result.error_message().is_empty());
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let result = classifier_with_timeout(Duration::from_millis(300))
        .classify(&format!("{}/slow", server.uri()))
        .await;

    assert_eq!(result.status_code, 0);
    assert_eq!(result.error_kind(), "timeout");
}

#[tokio::test]
async fn test_refused_connection_is_connection_error() {
    // Port 9 (discard) is not expected to be listening on loopback.
    let result = classifier().classify("http://127.0.0.1:9/").await;

    assert_eq!(result.status_code, 0);
    assert_eq!(result.error_kind(), "connection-error");
    assert!(!result.error_message().is_empty());
}

#[tokio::test]
async fn test_classification_is_repeatable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let classifier = classifier();
    let url = format!("{}/", server.uri());
    let first = classifier.classify(&url).await;
    let second = classifier.classify(&url).await;

    assert_eq!(first, second);
    assert_eq!(first.status_code, 500);
}

#[tokio::test]
async fn test_one_request_per_url_no_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let result = classifier().classify(&format!("{}/flaky", server.uri())).await;

    assert_eq!(result.status_code, 503);
    // Expectations are verified when the server drops.
}
