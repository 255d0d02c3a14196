//! End-to-end lookups through the default executor against a mock server.

mod common;

use common::STOCKHOLM;
use geocode_country::{ClientConfig, ErrorKind, GeocodeClient, Url};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeocodeClient {
    let endpoint = Url::parse(&format!("{}/search", server.uri())).unwrap();
    GeocodeClient::new().endpoint(endpoint)
}

#[tokio::test]
async fn resolves_country_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Stockholm, Sverige"))
        .and(query_param("format", "json"))
        .and(query_param("addressdetails", "1"))
        .respond_with(ResponseTemplate::new(200)
            .set_body_raw(STOCKHOLM, "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    let code = client_for(&server)
        .country_code("Stockholm, Sverige")
        .await
        .unwrap();
    assert_eq!(code, "se");
}

#[tokio::test]
async fn error_statuses() {
    for &status in &[404u16, 500] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status)
                .set_body_raw(STOCKHOLM, "application/json"))
            .expect(1)
            .mount(&server)
            .await;
        let e = client_for(&server)
            .country_code("Stockholm")
            .await
            .unwrap_err();
        assert_eq!(*e.kind(), ErrorKind::UnexpectedStatus, "status {}", status);
    }
}

#[tokio::test]
async fn no_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;
    let e = client_for(&server).country_code("Atlantis").await.unwrap_err();
    assert_eq!(*e.kind(), ErrorKind::NoMatch);
}

#[tokio::test]
async fn one_request_per_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;
    let client = client_for(&server);
    assert!(client.country_code("Stockholm").await.is_err());
    assert!(client.country_code("Stockholm").await.is_err());
}

#[tokio::test]
async fn configured_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(wiremock::matchers::header("user-agent", "geocode-test/0.1"))
        .respond_with(ResponseTemplate::new(200)
            .set_body_raw(STOCKHOLM, "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    let config = ClientConfig {
        endpoint: Some(Url::parse(&format!("{}/search", server.uri())).unwrap()),
        user_agent: Some("geocode-test/0.1".into()),
    };
    let client = GeocodeClient::from_config(&config).unwrap();
    assert_eq!(client.country_code("Stockholm").await.unwrap(), "se");
}
