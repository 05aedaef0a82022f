//! In-process stand-in for the broker directory API.
//!
//! Serves `GET /brokers` and `GET /brokers/details` on an ephemeral port.
//! Replies are queued per test and handed out in arrival order.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex};

/// A request as seen by the mock.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    /// The `id` query parameter of a details request.
    pub broker_id: Option<String>,
}

/// One queued reply.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: serde_json::json!({ "message": message }).to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

#[derive(Clone, Default)]
struct Shared {
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    replies: Arc<Mutex<VecDeque<MockResponse>>>,
}

pub struct MockApi {
    addr: SocketAddr,
    shared: Shared,
    stop: watch::Sender<bool>,
}

impl MockApi {
    pub async fn start() -> Self {
        let shared = Shared::default();
        let router = Router::new()
            .route("/brokers", get(list))
            .route("/brokers/details", get(details))
            .with_state(shared.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock broker API");
        let addr = listener.local_addr().expect("mock address");

        let (stop, mut stopped) = watch::channel(false);
        tokio::spawn(async move {
            let shutdown = async move {
                let _ = stopped.changed().await;
            };
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(shutdown)
                .await;
        });

        Self { addr, shared, stop }
    }

    pub async fn enqueue(&self, reply: MockResponse) {
        self.shared.replies.lock().await.push_back(reply);
    }

    pub async fn captured_requests(&self) -> Vec<SeenRequest> {
        self.shared.seen.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.stop.send(true);
    }
}

async fn list(State(shared): State<Shared>, uri: Uri) -> Response {
    reply(&shared, &uri, None).await
}

async fn details(
    State(shared): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
    uri: Uri,
) -> Response {
    reply(&shared, &uri, params.get("id").cloned()).await
}

async fn reply(shared: &Shared, uri: &Uri, broker_id: Option<String>) -> Response {
    shared.seen.lock().await.push(SeenRequest {
        method: "GET".to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        broker_id,
    });

    // Taken before sleeping so a slow reply stays bound to its request.
    let next = shared.replies.lock().await.pop_front();
    let Some(next) = next else {
        return (StatusCode::NOT_FOUND, "no reply queued").into_response();
    };
    if !next.delay.is_zero() {
        tokio::time::sleep(next.delay).await;
    }

    let status = StatusCode::from_u16(next.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [("content-type", "application/json")], next.body).into_response()
}
