//! Service tests against a deterministic in-process transport.

use async_trait::async_trait;
use bytes::Bytes;
use netservice::{
    Error, HttpMethod, NetworkService, NoopLogger, RawResponse, Resource, Transport,
    TransportError, TransportRequest,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Todo {
    id: Option<u32>,
    title: String,
    body: String,
    user_id: u32,
}

fn todo() -> Todo {
    Todo {
        id: None,
        title: "Test".to_string(),
        body: "Test".to_string(),
        user_id: 1,
    }
}

/// Returns the same outcome for every request and records what it was sent.
struct StubTransport {
    status: Option<u16>,
    body: Option<Bytes>,
    error: Option<String>,
    calls: AtomicUsize,
    requests: Mutex<Vec<TransportRequest>>,
}

impl StubTransport {
    fn responding(status: u16, body: Option<Bytes>) -> Self {
        Self {
            status: Some(status),
            body,
            error: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            status: None,
            body: None,
            error: Some(message.to_string()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        match &self.error {
            Some(message) => Err(message.clone().into()),
            None => Ok(RawResponse {
                status: self.status,
                body: self.body.clone(),
            }),
        }
    }
}

fn service_with(transport: Arc<StubTransport>) -> NetworkService {
    NetworkService::builder()
        .shared_transport(transport)
        .logger(NoopLogger)
        .build()
        .unwrap()
}

fn resource() -> Resource {
    Resource::get("https://mockurl".parse().unwrap())
}

#[tokio::test]
async fn test_perform_request_returns_body() {
    let expected = Bytes::from(serde_json::to_vec(&todo()).unwrap());
    let transport = Arc::new(StubTransport::responding(200, Some(expected.clone())));
    let service = service_with(transport.clone());

    let data = service.perform_request(&resource()).await.unwrap();

    assert_eq!(data, expected);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_perform_request_decoded_returns_record() {
    let bytes = Bytes::from(serde_json::to_vec(&todo()).unwrap());
    let service = service_with(Arc::new(StubTransport::responding(200, Some(bytes))));

    let decoded: Todo = service.perform_request_decoded(&resource()).await.unwrap();

    assert_eq!(decoded, todo());
}

#[tokio::test]
async fn test_bad_status_code_regardless_of_body() {
    let bytes = Bytes::from(serde_json::to_vec(&todo()).unwrap());
    let service = service_with(Arc::new(StubTransport::responding(404, Some(bytes))));

    let raw = service.perform_request(&resource()).await;
    assert!(matches!(raw, Err(Error::BadStatusCode(404))));

    let typed = service.perform_request_decoded::<Todo>(&resource()).await;
    assert!(matches!(typed, Err(Error::BadStatusCode(404))));
}

#[tokio::test]
async fn test_missing_body_is_bad_data() {
    let service = service_with(Arc::new(StubTransport::responding(200, None)));

    let result = service.perform_request_decoded::<Todo>(&resource()).await;

    assert!(matches!(result, Err(Error::BadData)));
}

#[tokio::test]
async fn test_empty_body_is_bad_data() {
    let service = service_with(Arc::new(StubTransport::responding(200, Some(Bytes::new()))));

    let raw = service.perform_request(&resource()).await;
    assert!(matches!(raw, Err(Error::BadData)), "got {:?}", raw);

    let typed = service.perform_request_decoded::<Todo>(&resource()).await;
    assert!(matches!(typed, Err(Error::BadData)), "got {:?}", typed);
}

#[tokio::test]
async fn test_unparseable_body_is_decoding_error() {
    let body = Bytes::from_static(br#"{"title": "missing fields"}"#);
    let service = service_with(Arc::new(StubTransport::responding(200, Some(body))));

    let result = service.perform_request_decoded::<Todo>(&resource()).await;

    match result {
        Err(Error::Decoding { source, .. }) => {
            assert!(source.to_string().contains("missing field"));
        }
        other => panic!("Expected Decoding, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transport_failure_short_circuits() {
    let service = service_with(Arc::new(StubTransport::failing("connection reset")));

    let result = service.perform_request_decoded::<Todo>(&resource()).await;

    match result {
        Err(Error::DataTask(inner)) => assert_eq!(inner.to_string(), "connection reset"),
        other => panic!("Expected DataTask, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_status_is_response_error() {
    let transport = StubTransport {
        status: None,
        ..StubTransport::responding(200, Some(Bytes::from_static(b"{}")))
    };
    let service = service_with(Arc::new(transport));

    let result = service.perform_request(&resource()).await;

    assert!(matches!(result, Err(Error::Response)));
}

#[tokio::test]
async fn test_status_range_change_applies_to_next_request() {
    let service = service_with(Arc::new(StubTransport::responding(
        404,
        Some(Bytes::from_static(b"gone")),
    )));

    assert!(service.perform_request(&resource()).await.is_err());

    service.set_acceptable_status_range(200..500);
    let body = service.perform_request(&resource()).await.unwrap();
    assert_eq!(body.as_ref(), b"gone");
}

#[tokio::test]
async fn test_transport_receives_merged_request() {
    let transport = Arc::new(StubTransport::responding(200, Some(Bytes::from_static(b"{}"))));
    let service = service_with(transport.clone());
    service.set_header("A", "1");
    service.set_header("B", "2");
    service.set_authorization("X");

    let resource = Resource::new(
        HttpMethod::Put,
        "https://mockurl/todos/1".parse().unwrap(),
        Some(Bytes::from_static(b"Sample")),
        [
            ("B".to_string(), "3".to_string()),
            ("C".to_string(), "4".to_string()),
            ("Authorization".to_string(), "per-request".to_string()),
        ]
        .into(),
    );
    service.perform_request(&resource).await.unwrap();

    let requests = transport.requests.lock().unwrap();
    let sent = &requests[0];
    let expected: HashMap<String, String> = [
        ("A".to_string(), "1".to_string()),
        ("B".to_string(), "3".to_string()),
        ("C".to_string(), "4".to_string()),
        ("Authorization".to_string(), "X".to_string()),
    ]
    .into();

    assert_eq!(sent.method, HttpMethod::Put);
    assert_eq!(sent.url.as_str(), "https://mockurl/todos/1");
    assert_eq!(sent.headers, expected);
    assert_eq!(sent.body.as_deref(), Some(&b"Sample"[..]));
}

#[tokio::test]
async fn test_repeated_calls_are_independent() {
    let bytes = Bytes::from(serde_json::to_vec(&todo()).unwrap());
    let transport = Arc::new(StubTransport::responding(200, Some(bytes)));
    let service = service_with(transport.clone());
    let resource = resource();

    let first: Todo = service.perform_request_decoded(&resource).await.unwrap();
    let second: Todo = service.perform_request_decoded(&resource).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(transport.calls(), 2);

    let requests = transport.requests.lock().unwrap();
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn test_concurrent_use_across_tasks() {
    let bytes = Bytes::from(serde_json::to_vec(&todo()).unwrap());
    let transport = Arc::new(StubTransport::responding(200, Some(bytes)));
    let service = service_with(transport.clone());

    let mut handles = Vec::new();
    for i in 0..8 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.set_header(format!("X-Task-{}", i), "1");
            service
                .perform_request_decoded::<Todo>(&Resource::get("https://mockurl".parse().unwrap()))
                .await
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), todo());
    }
    assert_eq!(transport.calls(), 8);
    assert_eq!(service.default_headers().len(), 8);
}
