//! Mock character API server for integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Response, StatusCode};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Canned character payload for an id, shaped like the real API.
pub fn character_payload(id: u16) -> Value {
    json!({
        "id": id,
        "name": format!("Character {id}"),
        "status": "Alive",
        "species": "Human",
        "gender": "Female",
        "origin": { "name": "Earth (C-137)", "url": "" },
        "location": { "name": "Citadel of Ricks", "url": "" },
        "image": format!("https://example.test/avatar/{id}.jpeg"),
    })
}

/// A response override to return instead of the canned payload.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn character(id: u16) -> Self {
        Self {
            status: 200,
            body: character_payload(id).to_string().into_bytes(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: format!(r#"{{"error": "{}"}}"#, message).into_bytes(),
            delay_ms: 0,
        }
    }

    pub fn not_json() -> Self {
        Self {
            status: 200,
            body: b"<html>not json</html>".to_vec(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    requested_ids: Arc<Mutex<Vec<u16>>>,
    overrides: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// Mock API server. Serves `GET /character/{id}` with canned payloads
/// unless an override is enqueued.
pub struct MockApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = MockState {
            requested_ids: Arc::new(Mutex::new(Vec::new())),
            overrides: Arc::new(Mutex::new(VecDeque::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/character/{id}", get(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Base URL in the shape the client expects: the id is appended.
    pub fn base_url(&self) -> String {
        format!("http://{}/character/", self.addr)
    }

    /// Enqueue a response override for the next request.
    pub async fn enqueue(&self, response: MockResponse) {
        self.state.overrides.lock().await.push_back(response);
    }

    /// Ids requested so far, in order.
    pub async fn requested_ids(&self) -> Vec<u16> {
        self.state.requested_ids.lock().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.state.requested_ids.lock().await.len()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(
    State(state): State<MockState>,
    Path(id): Path<u16>,
) -> Response<Body> {
    state.requested_ids.lock().await.push(id);

    let response = state
        .overrides
        .lock()
        .await
        .pop_front()
        .unwrap_or_else(|| MockResponse::character(id));

    if response.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(response.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(response.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(response.body))
        .unwrap()
}
