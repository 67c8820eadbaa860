//! Mock catalog tests for the HTTP client.
//!
//! These tests use wiremock to stand in for the upstream catalog service.

use std::time::Duration;

use rebrick_core::error::{Error, TransportError};
use rebrick_core::traits::CatalogRemote;
use rebrick_core::{CatalogUrl, EntityKind, NaturalKey};
use rebrick_http::HttpCatalog;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn catalog(server: &MockServer) -> HttpCatalog {
    let base = CatalogUrl::new(format!("{}/rebrickapi", server.uri())).unwrap();
    HttpCatalog::new(base).unwrap()
}

fn key(s: &str) -> NaturalKey {
    NaturalKey::new(s).unwrap()
}

// ============================================================================
// Collections
// ============================================================================

#[tokio::test]
async fn test_fetch_collection_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rebrickapi/getallcolorsfromrebrickable"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Red" },
            { "id": 2, "name": "Green" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let collection = catalog(&server)
        .fetch_collection(EntityKind::Color)
        .await
        .unwrap();

    assert_eq!(collection.len(), 2);
    assert_eq!(collection.records()[0].label(), Some("Red"));
}

#[tokio::test]
async fn test_fetch_collection_paths_per_kind() {
    let server = MockServer::start().await;

    for endpoint in [
        "getallsetsfromrebrickable",
        "getallminifigs",
        "getallparts",
        "getallpartcategories",
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/rebrickapi/{}", endpoint)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
    }

    let catalog = catalog(&server);
    for kind in [
        EntityKind::Set,
        EntityKind::Minifig,
        EntityKind::Part,
        EntityKind::PartCategory,
    ] {
        assert!(catalog.fetch_collection(kind).await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_fetch_collection_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rebrickapi/getallparts"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = catalog(&server)
        .fetch_collection(EntityKind::Part)
        .await
        .unwrap_err();

    match err {
        Error::Remote(remote) => {
            assert_eq!(remote.status, 502);
            assert_eq!(remote.message.as_deref(), Some("bad gateway"));
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_collection_undecodable_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rebrickapi/getallminifigs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = catalog(&server)
        .fetch_collection(EntityKind::Minifig)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Transport(TransportError::Decode { .. })
    ));
}

#[tokio::test]
async fn test_fetch_collection_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rebrickapi/getallsetsfromrebrickable"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let base = CatalogUrl::new(format!("{}/rebrickapi", server.uri())).unwrap();
    let catalog = HttpCatalog::with_timeout(base, Duration::from_millis(200)).unwrap();
    assert_eq!(catalog.timeout(), Duration::from_millis(200));

    let err = catalog.fetch_collection(EntityKind::Set).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Transport(TransportError::Timeout { duration_ms: 200 })
    ));
}

#[tokio::test]
async fn test_connection_refused() {
    let base = CatalogUrl::new("http://127.0.0.1:1/rebrickapi").unwrap();
    let catalog = HttpCatalog::with_timeout(base, Duration::from_secs(2)).unwrap();

    let err = catalog
        .fetch_collection(EntityKind::Color)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}

// ============================================================================
// Details
// ============================================================================

#[tokio::test]
async fn test_fetch_detail_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rebrickapi/getonefromrebrickable/7140-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "set_num": "7140-1",
            "name": "X-wing Fighter",
            "set_url": "https://rebrickable.com/sets/7140-1/x-wing-fighter/"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = catalog(&server)
        .fetch_detail(EntityKind::Set, &key("7140-1"))
        .await
        .unwrap();

    assert_eq!(record.label(), Some("X-wing Fighter"));
}

#[tokio::test]
async fn test_fetch_detail_encodes_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rebrickapi/getonepart/973pr1%2Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "part_num": "973pr1/b" })))
        .expect(1)
        .mount(&server)
        .await;

    let record = catalog(&server)
        .fetch_detail(EntityKind::Part, &key("973pr1/b"))
        .await
        .unwrap();

    assert_eq!(record.get("part_num"), Some(&json!("973pr1/b")));
}

#[tokio::test]
async fn test_fetch_detail_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rebrickapi/getonefromrebrickable/0000-1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = catalog(&server)
        .fetch_detail(EntityKind::Set, &key("0000-1"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_fetch_detail_rejects_non_object() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rebrickapi/getonecolor/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Red"])))
        .mount(&server)
        .await;

    let err = catalog(&server)
        .fetch_detail(EntityKind::Color, &key("1"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
}
