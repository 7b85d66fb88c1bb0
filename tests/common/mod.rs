//! Shared test utilities and fake collaborators.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tamboon::api::{ApiError, HttpClient};
use tamboon::donate::{HomeOrchestrator, OrchestratorSettings};
use tamboon::format::NumberFormatter;
use tamboon::notify::{Notification, Notifier};
use tamboon::store::Store;
use tempfile::TempDir;
use tokio::sync::Notify;

/// Canned reply for a fake endpoint.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16, String),
}

impl Reply {
    fn into_result(self) -> Result<Value, ApiError> {
        match self {
            Reply::Json(v) => Ok(v),
            Reply::Status(status, message) => Err(ApiError::Status { status, message }),
        }
    }
}

/// A recorded call to [`FakeHttp`].
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// In-memory [`HttpClient`] with per-path replies.
///
/// GET replies are sticky. POST replies are consumed in order and fall
/// back to echoing the body with a generated id.
#[derive(Default)]
pub struct FakeHttp {
    gets: Mutex<HashMap<String, Reply>>,
    posts: Mutex<Vec<Reply>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(&self, path: &str, reply: Reply) {
        self.gets.lock().insert(path.to_string(), reply);
    }

    pub fn on_post(&self, reply: Reply) {
        self.posts.lock().push(reply);
    }

    /// Holds GETs of `path` until the returned handle is notified.
    pub fn gate(&self, path: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates.lock().insert(path.to_string(), notify.clone());
        notify
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn posts_made(&self) -> usize {
        self.calls.lock().iter().filter(|c| c.method == "POST").count()
    }
}

#[async_trait]
impl HttpClient for FakeHttp {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.calls.lock().push(Call {
            method: "GET",
            path: path.to_string(),
            body: None,
        });
        let gate = self.gates.lock().get(path).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let reply = self
            .gets
            .lock()
            .get(path)
            .cloned()
            .unwrap_or_else(|| Reply::Status(404, format!("no route for {}", path)));
        reply.into_result()
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.calls.lock().push(Call {
            method: "POST",
            path: path.to_string(),
            body: Some(body.clone()),
        });
        let scripted = {
            let mut posts = self.posts.lock();
            if posts.is_empty() {
                None
            } else {
                Some(posts.remove(0))
            }
        };
        match scripted {
            Some(reply) => reply.into_result(),
            None => {
                let mut echoed = body;
                echoed["id"] = json!(self.posts_made());
                Ok(echoed)
            }
        }
    }
}

/// Notifier that keeps every notification it is asked to show.
#[derive(Default)]
pub struct RecordingNotifier {
    shown: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn shown(&self) -> Vec<Notification> {
        self.shown.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, notification: Notification) {
        self.shown.lock().push(notification);
    }
}

pub fn sample_charities() -> Value {
    json!([
        {"id": 1, "name": "A", "image": "a.jpg", "currency": "THB"},
        {"id": 2, "name": "B", "image": "b.jpg", "currency": "THB"}
    ])
}

pub fn sample_payments() -> Value {
    json!([
        {"id": 1, "charitiesId": 1, "amount": 100, "currency": "THB"},
        {"id": 2, "charitiesId": 2, "amount": 50, "currency": "THB"},
        {"id": 3, "charitiesId": 1, "amount": 25, "currency": "THB"}
    ])
}

/// Fake API already serving the sample charities and payments.
pub fn seeded_http() -> Arc<FakeHttp> {
    let http = Arc::new(FakeHttp::new());
    http.on_get("/charities", Reply::Json(sample_charities()));
    http.on_get("/payments", Reply::Json(sample_payments()));
    http
}

/// Wires an orchestrator to the given fakes with default settings.
pub fn make_orchestrator(
    http: Arc<FakeHttp>,
    notifier: Arc<RecordingNotifier>,
) -> HomeOrchestrator {
    HomeOrchestrator::new(
        Store::default(),
        http,
        notifier,
        Arc::new(NumberFormatter::default()),
        OrchestratorSettings::default(),
    )
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
