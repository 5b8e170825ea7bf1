//! Request pipeline semantics against a scripted transport.

use async_trait::async_trait;
use restcore::prelude::*;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Transport with one scripted reply, recording what it was asked to do.
struct MockTransport {
    token: Option<String>,
    reply: Mutex<Option<Result<HttpResponse, TransportError>>>,
    seen: Mutex<Option<(RequestConfig, Option<Value>)>>,
    starts: AtomicUsize,
    stops: AtomicUsize,
}

impl MockTransport {
    fn replying(reply: Result<HttpResponse, TransportError>) -> Arc<Self> {
        Arc::new(Self {
            token: None,
            reply: Mutex::new(Some(reply)),
            seen: Mutex::new(None),
            starts: AtomicUsize::new(0),
            stops: AtomicUsize::new(0),
        })
    }

    fn last_request(&self) -> (RequestConfig, Option<Value>) {
        self.seen.lock().unwrap().clone().expect("no request seen")
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn access_token(&self) -> Option<String> {
        self.token.clone()
    }

    async fn request(
        &self,
        config: &RequestConfig,
        body: Option<&Value>,
    ) -> Result<HttpResponse, TransportError> {
        *self.seen.lock().unwrap() = Some((config.clone(), body.cloned()));
        self.reply
            .lock()
            .unwrap()
            .take()
            .expect("transport called more than once")
    }

    fn start_loading(&self) {
        self.starts.fetch_add(1, Ordering::SeqCst);
    }

    fn stop_loading(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

fn client_with(transport: Arc<MockTransport>) -> RestClient {
    RestClient::builder()
        .transport(transport)
        .build()
        .unwrap()
}

#[tokio::test]
async fn success_resolves_with_the_payload_unchanged() {
    let transport = MockTransport::replying(Ok(HttpResponse::with_data(
        200,
        "ok",
        json!({"id": 1}),
    )));
    let client = client_with(transport.clone());

    let result = client.api("users/list").post_empty().await.unwrap();
    assert_eq!(result, Some(json!({"id": 1})));

    let (request, body) = transport.last_request();
    assert_eq!(request.url, "/api/users/list");
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(body, Some(json!({})));
}

#[tokio::test]
async fn unauthorized_rejects_with_its_code_in_throw_mode() {
    let transport = MockTransport::replying(Ok(HttpResponse::new(401, "login required")));
    let client = client_with(transport);

    let err = client
        .api("users/list")
        .throw_error()
        .post_empty()
        .await
        .unwrap_err();
    assert_eq!(err.code, 401);
    assert_eq!(err.message, "login required");
}

#[tokio::test]
async fn unauthorized_reaches_the_callback_without_rejecting() {
    let transport = MockTransport::replying(Ok(HttpResponse::new(401, "login required")));
    let client = client_with(transport);

    let received: Arc<Mutex<Option<HttpResponse>>> = Arc::new(Mutex::new(None));
    let sink = received.clone();
    let callback: ErrorCallback = Arc::new(move |response: &HttpResponse| {
        *sink.lock().unwrap() = Some(response.clone());
    });

    let result = client
        .api_with("users/list", callback)
        .post_empty()
        .await
        .unwrap();
    assert_eq!(result, None);

    let envelope = received.lock().unwrap().clone().unwrap();
    assert_eq!(envelope.code, 401);
    assert_eq!(envelope.message, "login required");
}

#[tokio::test]
async fn unauthorized_broadcasts_need_login_when_no_callback() {
    let transport = MockTransport::replying(Ok(HttpResponse::new(401, "login required")));
    let client = client_with(transport);
    let mut rx = client.events().subscribe();

    let result = client.api("users/list").post_empty().await.unwrap();
    assert_eq!(result, None);

    match rx.try_recv().unwrap() {
        CoreEvent::NeedLogin(envelope) => assert_eq!(envelope.code, 401),
        other => panic!("unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn application_error_broadcasts_on_the_generic_channel() {
    let transport = MockTransport::replying(Ok(HttpResponse::new(503, "down")));
    let client = client_with(transport);
    let mut rx = client.events().subscribe();

    let result = client.api("users/list").post_empty().await.unwrap();
    assert_eq!(result, None);

    match rx.try_recv().unwrap() {
        CoreEvent::HttpError(envelope) => {
            assert_eq!(envelope.code, 503);
            assert_eq!(envelope.message, "down");
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn callback_mode_without_callback_or_listener_falls_back_to_reject() {
    let transport = MockTransport::replying(Ok(HttpResponse::new(500, "boom")));
    let client = client_with(transport);

    let err = client.api("users/list").post_empty().await.unwrap_err();
    assert_eq!(err.code, 500);
    assert_eq!(err.message, "boom");
}

#[tokio::test]
async fn transport_failure_is_surfaced_with_the_default_error_code() {
    let transport =
        MockTransport::replying(Err(TransportError::Other("timeout".to_string())));
    let client = client_with(transport);

    let err = client
        .api("users/list")
        .throw_error()
        .post_empty()
        .await
        .unwrap_err();
    assert_eq!(err.code, 500);
    assert_eq!(err.message, "timeout");
}

#[tokio::test]
async fn loading_hooks_run_exactly_once_on_success() {
    let transport = MockTransport::replying(Ok(HttpResponse::with_data(200, "", Value::Null)));
    let client = client_with(transport.clone());

    client.api("x").post_empty().await.unwrap();
    assert_eq!(transport.starts.load(Ordering::SeqCst), 1);
    assert_eq!(transport.stops.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn loading_hooks_run_exactly_once_on_transport_failure() {
    let transport =
        MockTransport::replying(Err(TransportError::Other("refused".to_string())));
    let client = client_with(transport.clone());

    let _ = client.api("x").throw_error().post_empty().await;
    assert_eq!(transport.starts.load(Ordering::SeqCst), 1);
    assert_eq!(transport.stops.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn per_request_configuration_reaches_the_transport() {
    let transport = MockTransport::replying(Ok(HttpResponse::with_data(200, "", Value::Null)));
    let client = client_with(transport.clone());

    client
        .api("x")
        .timeout(Duration::from_millis(250))
        .with_cookies()
        .header("X-Trace", "1")
        .post_empty()
        .await
        .unwrap();

    let (request, _) = transport.last_request();
    assert_eq!(request.timeout, Duration::from_millis(250));
    assert!(request.send_cookies);
    assert_eq!(request.headers.get("X-Trace").map(String::as_str), Some("1"));
}

#[tokio::test]
async fn array_bodies_serialize_element_wise_in_order() {
    #[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
    struct Item {
        id: u64,
    }
    impl Model for Item {}

    let transport = MockTransport::replying(Ok(HttpResponse::with_data(200, "", Value::Null)));
    let client = client_with(transport.clone());

    let items = vec![Item { id: 2 }, Item { id: 1 }];
    client.api("x").post(&items).await.unwrap();

    let (_, body) = transport.last_request();
    assert_eq!(body, Some(json!([{"id": 2}, {"id": 1}])));
}

#[tokio::test]
async fn post_get_parses_the_payload_into_a_typed_model() {
    #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    struct User {
        #[serde(default)]
        id: u64,
        #[serde(default)]
        name: String,
    }
    impl Model for User {}

    let transport = MockTransport::replying(Ok(HttpResponse::with_data(
        200,
        "",
        json!({"id": 4, "name": "amy"}),
    )));
    let client = client_with(transport);

    let user: Option<User> = client
        .api("user/getDetail")
        .throw_error()
        .post_get(&json!({"id": 4}))
        .await
        .unwrap();
    assert_eq!(
        user,
        Some(User {
            id: 4,
            name: "amy".to_string()
        })
    );
}
