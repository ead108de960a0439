// SPDX-License-Identifier: MPL-2.0
//! In-process stand-in for the generation backend.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Bytes served for every stored image.
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// How the next `POST /generate` is answered.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Stores an image under this name and reports success.
    Create(String),
    /// Answers with a fixed status and body.
    Raw(u16, Value),
}

#[derive(Debug)]
pub struct MockState {
    pub outcome: Outcome,
    /// Stored images, by file name.
    pub images: BTreeMap<String, Vec<u8>>,
    /// Answer `GET /gallery` with `{}` instead of a list.
    pub omit_images_field: bool,
    pub model_loaded: bool,
    pub generate_requests: Vec<Value>,
    pub deleted: Vec<String>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            outcome: Outcome::Create("a.png".into()),
            images: BTreeMap::new(),
            omit_images_field: false,
            model_loaded: true,
            generate_requests: Vec::new(),
            deleted: Vec::new(),
        }
    }
}

type Shared = Arc<Mutex<MockState>>;

pub struct MockBackend {
    pub origin: String,
    pub state: Shared,
}

impl MockBackend {
    pub fn with_state<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        let mut state = self.state.lock().expect("mock state poisoned");
        f(&mut state)
    }
}

/// Starts the mock on an ephemeral port.
pub async fn spawn(state: MockState) -> MockBackend {
    let state: Shared = Arc::new(Mutex::new(state));
    let app = Router::new()
        .route("/gallery", get(gallery))
        .route("/generate", post(generate))
        .route("/delete/:filename", delete(delete_image))
        .route("/health", get(health))
        .route("/images/:name", get(image))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend crashed");
    });

    MockBackend {
        origin: format!("http://{addr}"),
        state,
    }
}

async fn gallery(State(state): State<Shared>) -> Json<Value> {
    let state = state.lock().expect("mock state poisoned");
    if state.omit_images_field {
        return Json(json!({}));
    }
    let images: Vec<Value> = state
        .images
        .keys()
        .map(|name| json!({ "filename": name, "url": format!("/images/{name}") }))
        .collect();
    Json(json!({ "images": images }))
}

async fn generate(State(state): State<Shared>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().expect("mock state poisoned");
    state.generate_requests.push(body);
    match state.outcome.clone() {
        Outcome::Create(name) => {
            state.images.insert(name.clone(), PNG_BYTES.to_vec());
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "image_url": format!("/images/{name}"),
                    "filename": name,
                })),
            )
        }
        Outcome::Raw(status, body) => (
            StatusCode::from_u16(status).expect("valid status"),
            Json(body),
        ),
    }
}

async fn delete_image(State(state): State<Shared>, Path(filename): Path<String>) -> Json<Value> {
    let mut state = state.lock().expect("mock state poisoned");
    state.images.remove(&filename);
    state.deleted.push(filename);
    Json(json!({ "success": true }))
}

async fn health(State(state): State<Shared>) -> Json<Value> {
    let state = state.lock().expect("mock state poisoned");
    Json(json!({
        "status": "healthy",
        "model_loaded": state.model_loaded,
        "device": "cpu",
    }))
}

async fn image(State(state): State<Shared>, Path(name): Path<String>) -> Result<Vec<u8>, StatusCode> {
    let state = state.lock().expect("mock state poisoned");
    state.images.get(&name).cloned().ok_or(StatusCode::NOT_FOUND)
}
