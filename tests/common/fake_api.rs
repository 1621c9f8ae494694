//! Fake unit record endpoint for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `GET /units` with whatever body and status the test
//! configured, and counts requests so tests can check how often the loader
//! fetched.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeUnitApi::start().await.unwrap();
//! api.respond(200, SHEET_ROWS).await;
//! let source = HttpSource::new(api.units_url());
//! ```

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Router};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// State shared between the router and test code.
struct ApiState {
    status: Mutex<u16>,
    body: Mutex<String>,
    hits: AtomicUsize,
}

/// Handle to the running fake endpoint.
pub struct FakeUnitApi {
    addr: SocketAddr,
    state: Arc<ApiState>,
}

impl FakeUnitApi {
    /// Start the server on a random port, answering `200 []` until told
    /// otherwise.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(ApiState {
            status: Mutex::new(200),
            body: Mutex::new("[]".to_string()),
            hits: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/units", get(units))
            .with_state(Arc::clone(&state));

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// URL of the units endpoint (e.g. `http://127.0.0.1:PORT/units`).
    pub fn units_url(&self) -> String {
        format!("http://{}/units", self.addr)
    }

    /// Set the status and body returned by subsequent requests.
    pub async fn respond(&self, status: u16, body: &str) {
        *self.state.status.lock().await = status;
        *self.state.body.lock().await = body.to_string();
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn units(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let status = StatusCode::from_u16(*state.status.lock().await)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = state.body.lock().await.clone();
    (status, [("content-type", "application/json")], body)
}
