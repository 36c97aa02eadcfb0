//! Contract tests for the character endpoints against a mocked gateway.
//!
//! These tests use wiremock to stand in for `gateway.marvel.com/v1/public`.
//! Each test drives a real `Dispatcher` with its `HttpTransport` and checks
//! both the request that reached the server and what the callback received.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET    | `/characters` | `list_characters_*` |
//! | GET    | `/characters/{id}` | `get_character_*` |

use std::collections::HashMap;

use marvel_client::models::CharacterDataWrapper;
use marvel_client::{
    reply_channel, AuthCredentials, AuthTokenBuilder, CharacterId, Dispatcher, MarvelApiConfig,
    MarvelApiError, Paging, Timestamp,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PUBLIC_KEY: &str = "test-public-key";
const PRIVATE_KEY: &str = "test-private-key";

fn test_dispatcher(mock_server: &MockServer) -> Dispatcher {
    let config = MarvelApiConfig::local_mock(&mock_server.uri(), PUBLIC_KEY, PRIVATE_KEY).unwrap();
    Dispatcher::new(config).unwrap()
}

/// Query parameters of the only request the server received.
async fn single_request_query(mock_server: &MockServer) -> HashMap<String, String> {
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0].url.query_pairs().into_owned().collect()
}

fn expected_hash(ts: &str) -> String {
    let builder = AuthTokenBuilder::new(AuthCredentials::new(PUBLIC_KEY, PRIVATE_KEY));
    builder.hash(Timestamp::from_millis(ts.parse().unwrap()))
}

fn spider_man_page() -> serde_json::Value {
    serde_json::json!({
        "code": 200,
        "status": "Ok",
        "attributionText": "Data provided by Marvel. © 2026 MARVEL",
        "data": {
            "offset": 0,
            "limit": 20,
            "total": 1,
            "count": 1,
            "results": [{
                "id": 1009610,
                "name": "Spider-Man",
                "description": "",
                "thumbnail": {
                    "path": "http://i.annihil.us/u/prod/marvel/i/mg/3/50/526548a343e4b",
                    "extension": "jpg"
                },
                "resourceURI": "http://gateway.marvel.com/v1/public/characters/1009610",
                "urls": []
            }]
        }
    })
}

// ── GET /characters ──────────────────────────────────────────────────

#[tokio::test]
async fn list_characters_sends_paging_search_and_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/characters"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "20"))
        .and(query_param("nameStartsWith", "spider"))
        .and(query_param("apikey", PUBLIC_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(spider_man_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dispatcher = test_dispatcher(&mock_server);
    let before = Timestamp::now().as_millis();
    let (callback, rx) = reply_channel::<CharacterDataWrapper>();
    dispatcher.list_characters(Paging::new(0, 20), Some("spider"), callback);

    let page = rx.await.unwrap().unwrap();
    assert_eq!(page.results().len(), 1);
    assert_eq!(page.results()[0].name, "Spider-Man");
    assert_eq!(page.results()[0].id, CharacterId::new(1009610));

    let query = single_request_query(&mock_server).await;
    let ts = &query["ts"];
    let ts_millis: i64 = ts.parse().unwrap();
    assert!(ts_millis >= before && ts_millis <= Timestamp::now().as_millis());
    assert_eq!(query["hash"].len(), 32);
    assert_eq!(query["hash"], expected_hash(ts));
}

#[tokio::test]
async fn list_characters_without_search_omits_name_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/characters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(spider_man_page()))
        .mount(&mock_server)
        .await;

    let dispatcher = test_dispatcher(&mock_server);
    let (callback, rx) = reply_channel::<CharacterDataWrapper>();
    dispatcher.list_characters(Paging::default(), None, callback);
    rx.await.unwrap().unwrap();

    let query = single_request_query(&mock_server).await;
    assert!(!query.contains_key("nameStartsWith"));
    assert!(!query.contains_key("offset"));
    assert!(!query.contains_key("limit"));
    assert!(query.contains_key("apikey"));
    assert!(query.contains_key("ts"));
    assert!(query.contains_key("hash"));
}

#[tokio::test]
async fn list_characters_surfaces_409_invalid_hash_verbatim() {
    let mock_server = MockServer::start().await;
    let body = r#"{"code":409,"status":"Invalid Hash"}"#;

    Mock::given(method("GET"))
        .and(path("/characters"))
        .respond_with(ResponseTemplate::new(409).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dispatcher = test_dispatcher(&mock_server);
    let (callback, rx) = reply_channel::<CharacterDataWrapper>();
    dispatcher.list_characters(Paging::new(0, 20), Some("spider"), callback);

    match rx.await.unwrap() {
        Err(MarvelApiError::ApiError {
            status,
            body: received,
            endpoint,
        }) => {
            assert_eq!(status, 409);
            assert_eq!(received, body);
            assert_eq!(endpoint, "GET /characters");
        }
        other => panic!("expected ApiError, got: {other:?}"),
    }
}

#[tokio::test]
async fn list_characters_surfaces_401_without_retry() {
    let mock_server = MockServer::start().await;
    let body = serde_json::json!({
        "code": "InvalidCredentials",
        "message": "That hash, timestamp and key combination is invalid."
    });

    Mock::given(method("GET"))
        .and(path("/characters"))
        .respond_with(ResponseTemplate::new(401).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dispatcher = test_dispatcher(&mock_server);
    let (callback, rx) = reply_channel::<CharacterDataWrapper>();
    dispatcher.list_characters(Paging::new(0, 1), None, callback);

    let err = rx.await.unwrap().unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("InvalidCredentials"));
}

#[tokio::test]
async fn list_characters_reports_decode_failure() {
    let mock_server = MockServer::start().await;
    let maintenance = ResponseTemplate::new(200).set_body_string("<html>maintenance</html>");

    Mock::given(method("GET"))
        .and(path("/characters"))
        .respond_with(maintenance)
        .mount(&mock_server)
        .await;

    let dispatcher = test_dispatcher(&mock_server);
    let (callback, rx) = reply_channel::<CharacterDataWrapper>();
    dispatcher.list_characters(Paging::new(0, 20), None, callback);

    assert!(matches!(
        rx.await.unwrap(),
        Err(MarvelApiError::Deserialization { .. })
    ));
}

// ── GET /characters/{id} ─────────────────────────────────────────────

#[tokio::test]
async fn get_character_returns_single_element_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/characters/1009610"))
        .and(query_param("apikey", PUBLIC_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(spider_man_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dispatcher = test_dispatcher(&mock_server);
    let (callback, rx) = reply_channel::<CharacterDataWrapper>();
    dispatcher.get_character(CharacterId::new(1009610), callback);

    let page = rx.await.unwrap().unwrap();
    assert_eq!(page.results()[0].name, "Spider-Man");

    let query = single_request_query(&mock_server).await;
    assert_eq!(query["hash"], expected_hash(&query["ts"]));
}

#[tokio::test]
async fn get_character_surfaces_404() {
    let mock_server = MockServer::start().await;
    let body = r#"{"code":404,"status":"We couldn't find that character"}"#;

    Mock::given(method("GET"))
        .and(path("/characters/1"))
        .respond_with(ResponseTemplate::new(404).set_body_string(body))
        .mount(&mock_server)
        .await;

    let dispatcher = test_dispatcher(&mock_server);
    let (callback, rx) = reply_channel::<CharacterDataWrapper>();
    dispatcher.get_character(CharacterId::new(1), callback);

    let err = rx.await.unwrap().unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn unreachable_gateway_is_http_error() {
    let config = MarvelApiConfig::local_mock("http://127.0.0.1:1", PUBLIC_KEY, PRIVATE_KEY);
    let dispatcher = Dispatcher::new(config.unwrap()).unwrap();
    let (callback, rx) = reply_channel::<CharacterDataWrapper>();
    dispatcher.get_character(CharacterId::new(1009610), callback);

    assert!(matches!(rx.await.unwrap(), Err(MarvelApiError::Http { .. })));
}
