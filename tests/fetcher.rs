mod common;

use std::time::Duration;

use bankdesk::brokers::{Broker, BrokerApi, BrokerId, DetailsPayload};
use bankdesk::fetch::{FetchState, Fetcher, CANCELLED};

use common::mock_api::{MockApi, MockResponse};
use common::test_client;

const BROKERS: &str = r#"[
    {"id": 1, "nombre": "Alpha Capital", "pais": "España"},
    {"id": "b-2", "nombre": "Beta Valores", "pais": "Portugal"}
]"#;

#[tokio::test]
async fn nothing_loaded_is_loading() {
    let fetcher: Fetcher<Vec<Broker>> = Fetcher::new(test_client());
    assert!(fetcher.state().is_loading());
    assert_eq!(fetcher.url(), None);
    assert!(fetcher.settled().await.is_loading());
}

#[tokio::test]
async fn successful_fetch_exposes_data() {
    let server = MockApi::start().await;
    server.enqueue(MockResponse::json(BROKERS)).await;
    let api = BrokerApi::new(&server.base_url()).unwrap();

    let mut fetcher: Fetcher<Vec<Broker>> = Fetcher::new(test_client());
    fetcher.load(api.brokers_url());
    assert_eq!(fetcher.url(), Some(api.brokers_url()));

    let state = fetcher.settled().await;
    let brokers = state.data().expect("brokers loaded");
    assert_eq!(brokers.len(), 2);
    assert_eq!(brokers[0].name, "Alpha Capital");
    assert_eq!(brokers[1].id, BrokerId::Text("b-2".into()));
    assert_eq!(state.error(), None);

    let requests = server.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/brokers");
}

#[tokio::test]
async fn details_request_carries_id_query() {
    let server = MockApi::start().await;
    server
        .enqueue(MockResponse::json(
            r#"[{"id": 7, "nombre": "Gamma", "pais": "Chile", "email": "hola@gamma.test"}]"#,
        ))
        .await;
    let api = BrokerApi::new(&server.base_url()).unwrap();

    let mut fetcher: Fetcher<DetailsPayload> = Fetcher::new(test_client());
    fetcher.load(api.details_url(&BrokerId::Number(7)));

    let details = match fetcher.settled().await {
        FetchState::Loaded(payload) => payload.into_details().expect("one broker"),
        other => panic!("expected Loaded, got {:?}", other),
    };
    assert_eq!(details.name, "Gamma");
    assert_eq!(details.mailto().as_deref(), Some("mailto:hola@gamma.test"));

    let requests = server.captured_requests().await;
    assert_eq!(requests[0].path, "/brokers/details");
    assert_eq!(requests[0].query.as_deref(), Some("id=7"));
    assert_eq!(requests[0].broker_id.as_deref(), Some("7"));
}

#[tokio::test]
async fn http_error_status_becomes_error_state() {
    let server = MockApi::start().await;
    server.enqueue(MockResponse::error(500, "boom")).await;
    let api = BrokerApi::new(&server.base_url()).unwrap();

    let mut fetcher: Fetcher<Vec<Broker>> = Fetcher::new(test_client());
    fetcher.load(api.brokers_url());

    let state = fetcher.settled().await;
    assert_eq!(state.data(), None);
    let message = state.error().expect("error message");
    assert!(message.contains("HTTP 500"), "got: {}", message);
}

#[tokio::test]
async fn malformed_body_becomes_error_state() {
    let server = MockApi::start().await;
    server.enqueue(MockResponse::json(r#"{"unexpected": true}"#)).await;
    let api = BrokerApi::new(&server.base_url()).unwrap();

    let mut fetcher: Fetcher<Vec<Broker>> = Fetcher::new(test_client());
    fetcher.load(api.brokers_url());

    let state = fetcher.settled().await;
    let message = state.error().expect("error message");
    assert!(message.starts_with("Unexpected response"), "got: {}", message);
}

#[tokio::test]
async fn unreachable_server_becomes_error_state() {
    // Bind and drop to get a port nobody listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut fetcher: Fetcher<Vec<Broker>> = Fetcher::new(test_client());
    fetcher.load(format!("http://{}/brokers", addr));

    let state = fetcher.settled().await;
    assert!(state.error().is_some());
}

#[tokio::test]
async fn newer_load_supersedes_slow_request() {
    let server = MockApi::start().await;
    server
        .enqueue(MockResponse::json(r#"[{"id": 1, "nombre": "Stale"}]"#).with_delay(300))
        .await;
    server
        .enqueue(MockResponse::json(r#"[{"id": 2, "nombre": "Fresh"}]"#))
        .await;
    let base = server.base_url();

    let mut fetcher: Fetcher<Vec<Broker>> = Fetcher::new(test_client());
    fetcher.load(format!("{}/brokers?page=1", base));
    // Let the first request reach the server so it takes the slow response.
    tokio::time::sleep(Duration::from_millis(100)).await;
    fetcher.load(format!("{}/brokers?page=2", base));
    assert!(fetcher.state().is_loading());

    let state = fetcher.settled().await;
    assert_eq!(state.data().map(|b| b[0].name.as_str()), Some("Fresh"));

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(
        fetcher.state().data().map(|b| b[0].name.as_str()),
        Some("Fresh")
    );
    assert_eq!(fetcher.url(), Some(format!("{}/brokers?page=2", base)));
}

#[tokio::test]
async fn subscribers_see_loading_then_result() {
    let server = MockApi::start().await;
    server.enqueue(MockResponse::json(BROKERS).with_delay(50)).await;
    let api = BrokerApi::new(&server.base_url()).unwrap();

    let mut fetcher: Fetcher<Vec<Broker>> = Fetcher::new(test_client());
    let mut receiver = fetcher.subscribe();
    fetcher.load(api.brokers_url());

    assert!(receiver.borrow_and_update().state.is_loading());
    receiver.changed().await.unwrap();
    let status = receiver.borrow_and_update().clone();
    assert_eq!(status.generation, 1);
    assert_eq!(status.state.data().map(Vec::len), Some(2));
}

#[tokio::test]
async fn cancel_settles_a_pending_request() {
    let server = MockApi::start().await;
    server.enqueue(MockResponse::json(BROKERS).with_delay(5_000)).await;
    let api = BrokerApi::new(&server.base_url()).unwrap();

    let mut fetcher: Fetcher<Vec<Broker>> = Fetcher::new(test_client());
    fetcher.load(api.brokers_url());
    fetcher.cancel();

    let state = tokio::time::timeout(Duration::from_secs(2), fetcher.settled())
        .await
        .expect("settled returns after cancel");
    assert_eq!(state.error(), Some(CANCELLED));
}

#[tokio::test]
async fn cancel_keeps_a_finished_result() {
    let server = MockApi::start().await;
    server.enqueue(MockResponse::json(BROKERS)).await;
    let api = BrokerApi::new(&server.base_url()).unwrap();

    let mut fetcher: Fetcher<Vec<Broker>> = Fetcher::new(test_client());
    fetcher.load(api.brokers_url());
    fetcher.settled().await;
    fetcher.cancel();

    assert_eq!(fetcher.state().data().map(Vec::len), Some(2));
}

#[tokio::test]
async fn cancel_before_any_load_is_a_no_op() {
    let mut fetcher: Fetcher<Vec<Broker>> = Fetcher::new(test_client());
    fetcher.cancel();
    assert!(fetcher.state().is_loading());
}
