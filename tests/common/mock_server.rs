//! Stateful mock of the pet inventory API.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use petstore::pet::{Pet, PetDraft};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const COLLECTION_PATH: &str = "/david/pets";

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

/// How the server answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Behave like the real inventory.
    Normal,
    /// Answer every request with this status and no state change.
    Fail(u16),
    /// Answer 200 with a body that is not JSON.
    Garbage,
}

struct Inner {
    pets: Vec<Pet>,
    next_id: i64,
    mode: Mode,
    requests: Vec<CapturedRequest>,
}

#[derive(Clone)]
struct MockState {
    inner: Arc<Mutex<Inner>>,
}

/// Mock pet server for testing.
pub struct MockPetServer {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockPetServer {
    /// Start a server holding `pets`. New ids continue after the largest one.
    pub async fn start(pets: Vec<Pet>) -> Self {
        let next_id = pets.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let state = MockState {
            inner: Arc::new(Mutex::new(Inner {
                pets,
                next_id,
                mode: Mode::Normal,
                requests: Vec::new(),
            })),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
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

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Collection URL for this server.
    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, COLLECTION_PATH)
    }

    pub async fn set_mode(&self, mode: Mode) {
        self.state.inner.lock().await.mode = mode;
    }

    /// Server-side records, in order.
    pub async fn pets(&self) -> Vec<Pet> {
        self.state.inner.lock().await.pets.clone()
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.inner.lock().await.requests.clone()
    }
}

impl Drop for MockPetServer {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let body = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    let mut inner = state.inner.lock().await;
    inner.requests.push(CapturedRequest {
        method: method.clone(),
        path: path.clone(),
        body: body.clone(),
    });

    match inner.mode {
        Mode::Fail(status) => return respond(status, r#"{"error":"mock failure"}"#.to_string()),
        Mode::Garbage => return respond(200, "<html>not json</html>".to_string()),
        Mode::Normal => {}
    }

    if path == COLLECTION_PATH {
        return match method.as_str() {
            "GET" => respond(200, serde_json::to_string(&inner.pets).unwrap()),
            "POST" => {
                let Ok(draft) = serde_json::from_slice::<PetDraft>(&body) else {
                    return respond(400, r#"{"error":"bad body"}"#.to_string());
                };
                let pet = draft.with_id(inner.next_id);
                inner.next_id += 1;
                inner.pets.push(pet.clone());
                respond(201, serde_json::to_string(&pet).unwrap())
            }
            _ => respond(405, String::new()),
        };
    }

    let Some(id) = path
        .strip_prefix(COLLECTION_PATH)
        .and_then(|rest| rest.strip_prefix('/'))
        .and_then(|id| id.parse::<i64>().ok())
    else {
        return respond(404, String::new());
    };
    let Some(index) = inner.pets.iter().position(|p| p.id == id) else {
        return respond(404, r#"{"error":"no such pet"}"#.to_string());
    };

    match method.as_str() {
        "PUT" => {
            let Ok(pet) = serde_json::from_slice::<Pet>(&body) else {
                return respond(400, r#"{"error":"bad body"}"#.to_string());
            };
            inner.pets[index] = pet.clone();
            respond(200, serde_json::to_string(&pet).unwrap())
        }
        "DELETE" => {
            inner.pets.remove(index);
            respond(204, String::new())
        }
        _ => respond(405, String::new()),
    }
}

fn respond(status: u16, body: String) -> Response<Body> {
    Response::builder()
        .status(StatusCode::from_u16(status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}
