//! Canned-response HTTP server for adapter tests.

use axum::body::Bytes;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub struct TestServer {
    pub url: String,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }
}

/// Answers every request with `status` and a JSON `body`, recording what it received.
pub async fn serve(status: u16, body: &'static str) -> TestServer {
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let log = recorded.clone();
    let status = StatusCode::from_u16(status).unwrap();

    let app = Router::new().fallback(
        move |method: Method, uri: Uri, headers: HeaderMap, req_body: Bytes| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push(RecordedRequest {
                    method,
                    uri,
                    headers,
                    body: req_body,
                });
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        },
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        url: format!("http://{}", addr),
        recorded,
    }
}

/// Address that refuses connections.
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}
