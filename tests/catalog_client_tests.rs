use comicgate::models::{ItemKind, ListQuery};
use comicgate::services::{CatalogClient, CatalogError, HttpCatalogClient};
use comicgate::test_utils::test_helpers;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client(upstream: &MockServer) -> HttpCatalogClient {
    HttpCatalogClient::new(&test_helpers::catalog_config(&upstream.uri()))
}

#[tokio::test]
async fn list_always_sends_the_api_key() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/characters"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&upstream)
        .await;

    let payload = client(&upstream)
        .fetch_list(ItemKind::Character, &ListQuery::default())
        .await
        .unwrap();
    assert_eq!(payload, json!({ "results": [] }));
}

#[tokio::test]
async fn list_omits_absent_filters() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/comics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&upstream)
        .await;

    let query = ListQuery {
        skip: Some("20".to_string()),
        ..Default::default()
    };
    client(&upstream)
        .fetch_list(ItemKind::Comic, &query)
        .await
        .unwrap();

    let requests = upstream.received_requests().await.unwrap();
    let sent: &Request = &requests[0];
    let query_string = sent.url.query().unwrap();
    assert!(query_string.contains("skip=20"));
    assert!(!query_string.contains("limit"));
    assert!(!query_string.contains("title"));
}

#[tokio::test]
async fn character_name_filter_is_title_for_comics() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/comics"))
        .and(query_param("title", "hulk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&upstream)
        .await;

    // `name` belongs to characters; for comics only `title` is forwarded.
    let query = ListQuery {
        name: Some("ignored".to_string()),
        title: Some("hulk".to_string()),
        ..Default::default()
    };
    client(&upstream)
        .fetch_list(ItemKind::Comic, &query)
        .await
        .unwrap();

    let requests = upstream.received_requests().await.unwrap();
    assert!(!requests[0].url.query().unwrap().contains("name"));
}

#[tokio::test]
async fn by_id_uses_singular_path_segments() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character/1009368"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "Iron Man" })))
        .expect(1)
        .mount(&upstream)
        .await;

    let payload = client(&upstream)
        .fetch_by_id(ItemKind::Character, "1009368")
        .await
        .unwrap();
    assert_eq!(payload["name"], "Iron Man");
}

#[tokio::test]
async fn comics_by_character_keeps_the_plural_segment() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/comics/1009368"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 3 })))
        .expect(1)
        .mount(&upstream)
        .await;

    let payload = client(&upstream)
        .fetch_comics_by_character("1009368")
        .await
        .unwrap();
    assert_eq!(payload["count"], 3);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&upstream)
        .await;

    let result = client(&upstream)
        .fetch_by_id(ItemKind::Character, "404")
        .await;
    assert!(matches!(result, Err(CatalogError::Status(status)) if status.as_u16() == 404));
}

#[tokio::test]
async fn transport_failure_is_an_error() {
    // Nothing listens on this port.
    let config = test_helpers::catalog_config("http://127.0.0.1:9");
    let client = HttpCatalogClient::new(&config);

    let result = client.fetch_by_id(ItemKind::Comic, "1").await;
    assert!(matches!(result, Err(CatalogError::Request(_))));
}
