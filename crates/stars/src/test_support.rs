//! Fake GitHub API and star sources shared by the unit tests.

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::USER_AGENT},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::StarSource;
use crate::error::FetchError;

pub struct FakeGitHub {
    pub base_url: String,
    pub hits: Arc<AtomicUsize>,
}

/// Serve `/repos/{owner}/{repo}` on an ephemeral port.
///
/// Repositories: `jqp` (2100), `stree` (450), `zero` (0), `malformed`
/// (no count), `garbage` (not JSON), `ratelimited` (403). Anything else 404s.
pub async fn spawn_fake_github() -> FakeGitHub {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/repos/{owner}/{repo}", get(repo_handler))
        .with_state(Arc::clone(&hits));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeGitHub {
        base_url: format!("http://{}", addr),
        hits,
    }
}

async fn repo_handler(
    State(hits): State<Arc<AtomicUsize>>,
    Path((owner, repo)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);

    if !headers.contains_key(USER_AGENT) {
        return StatusCode::FORBIDDEN.into_response();
    }

    let full_name = format!("{}/{}", owner, repo);
    match repo.as_str() {
        "jqp" => Json(json!({ "full_name": full_name, "stargazers_count": 2100 })).into_response(),
        "stree" => Json(json!({ "full_name": full_name, "stargazers_count": 450 })).into_response(),
        "zero" => Json(json!({ "full_name": full_name, "stargazers_count": 0 })).into_response(),
        "malformed" => Json(json!({ "full_name": full_name })).into_response(),
        "garbage" => (StatusCode::OK, "<html>rate limit</html>").into_response(),
        "ratelimited" => StatusCode::FORBIDDEN.into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({ "message": "Not Found" }))).into_response(),
    }
}

/// Base URL of a port nothing listens on
pub async fn closed_port_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// In-memory source that records every lookup
#[derive(Default)]
pub struct RecordingSource {
    counts: HashMap<String, u64>,
    pub calls: Mutex<Vec<String>>,
}

impl RecordingSource {
    pub fn new(counts: &[(&str, u64)]) -> Self {
        Self {
            counts: counts
                .iter()
                .map(|(repo, stars)| (repo.to_string(), *stars))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StarSource for RecordingSource {
    async fn stargazers(&self, repo: &str) -> Result<u64, FetchError> {
        self.calls.lock().unwrap().push(repo.to_string());
        self.counts
            .get(repo)
            .copied()
            .ok_or(FetchError::Status(404))
    }
}
