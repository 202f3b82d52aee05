//! Shared fixtures: an in-process rental API and scripted repositories.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use rental_scout::network::FetchError;
use rental_scout::{RentalProperty, RentalRepository};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};

pub fn property(id: i64, address: &str) -> RentalProperty {
    RentalProperty {
        id,
        address: address.to_string(),
        picture_link: format!("p{}.jpg", id),
        open_time_1: 9,
        open_time_2: 17,
    }
}

/// Response served by [`MockApi`]
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

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error":"boom"}"#.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone, Default)]
struct MockState {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    accept_headers: Arc<Mutex<Vec<String>>>,
}

/// In-process rental API serving `GET /properties`
pub struct MockApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = MockState::default();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/properties", get(properties))
            .route("/api/properties", get(properties))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock api");
        let addr = listener.local_addr().expect("mock api address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub async fn enqueue(&self, response: MockResponse) {
        self.state.responses.lock().await.push_back(response);
    }

    pub async fn requests(&self) -> usize {
        self.state.accept_headers.lock().await.len()
    }

    pub async fn accept_headers(&self) -> Vec<String> {
        self.state.accept_headers.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn properties(State(state): State<MockState>, headers: HeaderMap) -> Response {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.accept_headers.lock().await.push(accept);

    let response = state
        .responses
        .lock()
        .await
        .pop_front()
        .unwrap_or_else(|| MockResponse::json("[]"));

    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    let status = StatusCode::from_u16(response.status).expect("valid status");
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}

/// Address nothing is listening on
pub async fn closed_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);
    addr
}

pub type FetchResult = Result<Vec<RentalProperty>, FetchError>;

/// Repository whose calls block until the test releases them.
///
/// Call `n` waits on the `n`-th gate returned by [`GatedRepository::new`].
pub struct GatedRepository {
    gates: std::sync::Mutex<VecDeque<oneshot::Receiver<FetchResult>>>,
    started: tokio::sync::watch::Sender<usize>,
}

impl GatedRepository {
    pub fn new(calls: usize) -> (Arc<Self>, Vec<oneshot::Sender<FetchResult>>) {
        let mut senders = Vec::with_capacity(calls);
        let mut receivers = VecDeque::with_capacity(calls);
        for _ in 0..calls {
            let (tx, rx) = oneshot::channel();
            senders.push(tx);
            receivers.push_back(rx);
        }
        let (started, _) = tokio::sync::watch::channel(0);
        let repository = Arc::new(Self {
            gates: std::sync::Mutex::new(receivers),
            started,
        });
        (repository, senders)
    }

    /// Wait until at least `calls` fetches have claimed their gate.
    pub async fn wait_started(&self, calls: usize) {
        let mut started = self.started.subscribe();
        tokio::time::timeout(Duration::from_secs(5), started.wait_for(|n| *n >= calls))
            .await
            .expect("fetch did not start in time")
            .expect("repository dropped");
    }
}

#[async_trait]
impl RentalRepository for GatedRepository {
    async fn get_rental_properties(&self) -> FetchResult {
        let gate = self
            .gates
            .lock()
            .expect("gate mutex")
            .pop_front()
            .expect("unexpected extra fetch");
        self.started.send_modify(|n| *n += 1);
        gate.await.expect("gate dropped without a result")
    }
}

pub fn protocol_error(status: u16) -> FetchError {
    FetchError::Status {
        url: "http://127.0.0.1:8088/properties".parse().unwrap(),
        status: reqwest::StatusCode::from_u16(status).unwrap(),
    }
}

pub fn transport_error() -> FetchError {
    let source = reqwest::Client::new()
        .get("http://[::1")
        .build()
        .unwrap_err();
    FetchError::Transport {
        url: "http://127.0.0.1:8088/properties".parse().unwrap(),
        source,
    }
}

pub fn decode_error() -> FetchError {
    let source = serde_json::from_str::<Vec<RentalProperty>>("{").unwrap_err();
    FetchError::Decode {
        url: "http://127.0.0.1:8088/properties".parse().unwrap(),
        source,
    }
}
