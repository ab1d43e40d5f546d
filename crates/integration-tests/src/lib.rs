//! Integration tests for Countertill.
//!
//! The tests drive the full axum router in-process via
//! `tower::ServiceExt::oneshot`, backed by a seeded store in a temp
//! directory. No server process or external service is required.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p countertill-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)] // test harness; failures should panic loudly

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use countertill_server::config::ServerConfig;
use countertill_server::state::AppState;
use countertill_server::store::Store;
use countertill_server::{app, seed};

/// An in-process application instance over a seeded temp-file store.
pub struct TestApp {
    router: Router,
    state: AppState,
    _dir: TempDir,
}

impl TestApp {
    /// Create a fresh app with the default seed fixtures.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("db.json");

        let store = Store::open(&db_path).unwrap();
        seed::run(&store).unwrap();

        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            db_path,
        };
        let state = AppState::new(config, store);

        Self {
            router: app(state.clone()),
            state,
            _dir: dir,
        }
    }

    /// The application state, for asserting directly against the store.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send a GET request and return the status plus parsed body.
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Send a POST request with a JSON body and return the status plus
    /// parsed body.
    pub async fn post(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();
        self.send(request).await
    }

    /// Send a POST request with no body at all.
    pub async fn post_empty(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        // Non-JSON bodies (e.g. /health) come back as a plain string value.
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
