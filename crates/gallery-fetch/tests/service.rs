//! Integration tests for PhotoFetchService.
//!
//! These tests drive the service through an in-memory HTTP client and check
//! what a subscriber observes: filtered items on success, a failure state
//! and no item update on transport or server errors.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use gallery_fetch::{
    FetchError, FetchState, FlickrConfig, GalleryItem, HttpClient, HttpResponse, PhotoFetchService,
};
use tokio::sync::Notify;

const SCENARIO_A: &str = r#"{"photos":{"photo":[{"id":"1","title":"x","url_s":"http://a"},{"id":"2","title":"y","url_s":""}]}}"#;
const SCENARIO_B: &str = r#"{"photos":{"photo":[]}}"#;

#[derive(Debug)]
struct TestError(String);

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TestError {}

#[derive(Debug, Clone)]
enum Reply {
    Body(u16, &'static str),
    ConnectionError(&'static str),
}

/// Mock HTTP client that replays a fixed reply, optionally held behind a gate.
#[derive(Debug)]
struct TestHttpClient {
    reply: Reply,
    gate: Option<Arc<Notify>>,
    requests: AtomicUsize,
    last_url: Mutex<Option<String>>,
}

impl TestHttpClient {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            gate: None,
            requests: AtomicUsize::new(0),
            last_url: Mutex::new(None),
        }
    }

    fn ok(body: &'static str) -> Self {
        Self::new(Reply::Body(200, body))
    }

    fn gated(reply: Reply, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(reply)
        }
    }

    fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl HttpClient for TestHttpClient {
    type Error = TestError;

    fn get(
        &self,
        url: &str,
        _headers: &[(String, String)],
    ) -> impl std::future::Future<Output = std::result::Result<HttpResponse, Self::Error>> + Send {
        self.requests.fetch_add(1, Ordering::SeqCst);
        *self.last_url.lock().unwrap() = Some(url.to_string());
        let reply = self.reply.clone();
        let gate = self.gate.clone();
        async move {
            if let Some(gate) = gate {
                gate.notified().await;
            }
            match reply {
                Reply::Body(status, body) => Ok(HttpResponse::new(status, body)),
                Reply::ConnectionError(msg) => Err(TestError(msg.to_string())),
            }
        }
    }
}

fn config() -> FlickrConfig {
    FlickrConfig::default().api_key("test-key")
}

fn service(client: TestHttpClient) -> (PhotoFetchService<TestHttpClient>, Arc<TestHttpClient>) {
    let client = Arc::new(client);
    (PhotoFetchService::from_shared(Arc::clone(&client), config()), client)
}

#[tokio::test]
async fn test_scenario_a_publishes_only_displayable_items() {
    let (service, _) = service(TestHttpClient::ok(SCENARIO_A));

    let state = service.fetch_photos().settled().await;

    assert_eq!(state.into_success(), Some(vec![GalleryItem::new("1", "x", "http://a")]));
}

#[tokio::test]
async fn test_scenario_b_publishes_empty_sequence() {
    let (service, _) = service(TestHttpClient::ok(SCENARIO_B));

    let state = service.fetch_photos().settled().await;

    assert_eq!(state.into_success(), Some(Vec::new()));
}

#[tokio::test]
async fn test_absent_photo_list_publishes_empty_sequence() {
    let (service, _) = service(TestHttpClient::ok(r#"{"stat":"ok"}"#));

    let state = service.fetch_photos().settled().await;

    assert_eq!(state.into_success(), Some(Vec::new()));
}

#[tokio::test]
async fn test_scenario_c_connection_error_never_publishes_items() {
    let (service, _) = service(TestHttpClient::new(Reply::ConnectionError("connection refused")));
    let received = Arc::new(Mutex::new(None::<Vec<GalleryItem>>));

    let sink = Arc::clone(&received);
    service
        .fetch_photos()
        .subscribe(move |items| *sink.lock().unwrap() = Some(items))
        .await
        .unwrap();

    assert!(received.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_connection_error_settles_to_failure() {
    let (service, _) = service(TestHttpClient::new(Reply::ConnectionError("connection refused")));

    let state = service.fetch_photos().settled().await;

    match state.failure() {
        Some(FetchError::Network(msg)) => assert!(msg.contains("connection refused")),
        other => panic!("unexpected state: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_status_is_failure() {
    let (service, _) = service(TestHttpClient::new(Reply::Body(503, "Service Unavailable")));

    let state = service.fetch_photos().settled().await;

    assert!(matches!(state.failure(), Some(FetchError::HttpStatus { status: 503 })));
}

#[tokio::test]
async fn test_malformed_body_is_failure() {
    let (service, _) = service(TestHttpClient::ok("{\"photos\":{\"photo\":["));

    let state = service.fetch_photos().settled().await;

    assert!(matches!(state.failure(), Some(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_api_failure_envelope_publishes_empty_sequence() {
    let (service, _) = service(TestHttpClient::ok(r#"{"stat":"fail","code":100,"message":"Invalid API Key"}"#));

    let state = service.fetch_photos().settled().await;

    assert_eq!(state.into_success(), Some(Vec::new()));
}

#[test]
fn test_fetch_photos_outside_runtime_settles_to_failure() {
    let (service, client) = service(TestHttpClient::ok(SCENARIO_A));

    let observable = service.fetch_photos();

    assert!(matches!(observable.state().failure(), Some(FetchError::NoRuntime(_))));
    assert_eq!(client.requests(), 0);
}

#[tokio::test]
async fn test_fetch_photos_returns_before_response() {
    let gate = Arc::new(Notify::new());
    let (service, client) = service(TestHttpClient::gated(Reply::Body(200, SCENARIO_A), Arc::clone(&gate)));

    let mut observable = service.fetch_photos();
    assert!(observable.is_pending());

    // Let the spawned task reach the gate; the result must still be pending.
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(observable.is_pending());
    assert_eq!(client.requests(), 1);

    gate.notify_one();
    let state = tokio::time::timeout(Duration::from_secs(5), observable.settled())
        .await
        .expect("fetch did not settle");
    assert_eq!(state.into_success().map(|items| items.len()), Some(1));
}

#[tokio::test]
async fn test_sequential_calls_yield_equal_independent_results() {
    let (service, client) = service(TestHttpClient::ok(SCENARIO_A));

    let first = service.fetch_photos().settled().await.into_success().unwrap();
    let mut second = service.fetch_photos().settled().await.into_success().unwrap();

    assert_eq!(first, second);
    assert_eq!(client.requests(), 2);

    second.clear();
    assert_eq!(first.len(), 1);
}

#[tokio::test]
async fn test_one_request_per_call_with_configured_url() {
    let (service, client) = service(TestHttpClient::ok(SCENARIO_B));

    service.fetch_photos().settled().await;

    assert_eq!(client.requests(), 1);
    let url = client.last_url.lock().unwrap().clone().unwrap();
    assert!(url.starts_with("https://api.flickr.com/services/rest/?"));
    assert!(url.contains("api_key=test-key"));
    assert!(url.contains("extras=url_s"));
}

#[tokio::test]
async fn test_fetch_gallery_reports_dropped_count() {
    let (service, _) = service(TestHttpClient::ok(SCENARIO_A));

    let gallery = service.fetch_gallery().await.unwrap();

    assert_eq!(gallery.items.len(), 1);
    assert_eq!(gallery.dropped, 1);
}

#[tokio::test]
async fn test_invalid_base_url_is_failure_without_request() {
    let client = Arc::new(TestHttpClient::ok(SCENARIO_A));
    let service = PhotoFetchService::from_shared(Arc::clone(&client), config().base_url("::not a url::"));

    let state = service.fetch_photos().settled().await;

    assert!(matches!(state, FetchState::Failure(_)));
    assert!(matches!(state.failure(), Some(FetchError::InvalidUrl(_))));
    assert_eq!(client.requests(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_calls_share_client() {
    let (service, client) = service(TestHttpClient::ok(SCENARIO_A));

    let observables: Vec<_> = (0..8).map(|_| service.fetch_photos()).collect();
    for mut observable in observables {
        let items = observable.settled().await.into_success().unwrap();
        assert!(items.iter().all(|item| !item.url.trim().is_empty()));
    }

    assert_eq!(client.requests(), 8);
}
