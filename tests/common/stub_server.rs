//! In-process HTTP server standing in for chromedriver.
//!
//! Every request is recorded; the response comes from a caller-supplied
//! function so tests can script readiness, errors and element payloads.

use std::sync::{Arc, Mutex};
use std::thread;

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::IntoResponse;
use serde_json::{Map, Value, json};

pub const SESSION_ID: &str = "stub-session";
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: String,
}

type Responder = dyn Fn(&Recorded) -> (u16, String) + Send + Sync;

struct Shared {
    requests: Mutex<Vec<Recorded>>,
    respond: Box<Responder>,
}

pub struct StubServer {
    pub url: String,
    shared: Arc<Shared>,
}

impl StubServer {
    /// Serve on an ephemeral localhost port from a background thread.
    pub fn start<F>(respond: F) -> Self
    where
        F: Fn(&Recorded) -> (u16, String) + Send + Sync + 'static,
    {
        let shared = Arc::new(Shared {
            requests: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        });
        let app = Router::new().fallback(handle).with_state(shared.clone());

        let (tx, rx) = std::sync::mpsc::channel();
        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
                tx.send(listener.local_addr().unwrap()).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        let addr = rx.recv().unwrap();
        StubServer {
            url: format!("http://{}", addr),
            shared,
        }
    }

    /// A well-behaved chromedriver with one session.
    pub fn chromedriver() -> Self {
        Self::start(chromedriver)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.shared.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn find(&self, method: &str, path: &str) -> Option<Recorded> {
        self.requests()
            .into_iter()
            .find(|r| r.method == method && r.path == path)
    }
}

async fn handle(
    State(shared): State<Arc<Shared>>,
    method: Method,
    uri: Uri,
    body: String,
) -> impl IntoResponse {
    let request = Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        body,
    };
    let (status, payload) = (shared.respond)(&request);
    shared.requests.lock().unwrap().push(request);

    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        payload,
    )
}

// ============================================================================
// Canned payloads
// ============================================================================

pub fn ok(value: Value) -> (u16, String) {
    (200, json!({ "value": value }).to_string())
}

pub fn w3c_error(status: u16, error: &str, message: &str) -> (u16, String) {
    (
        status,
        json!({ "value": { "error": error, "message": message, "stacktrace": "" } }).to_string(),
    )
}

pub fn element(id: &str) -> Value {
    let mut map = Map::new();
    map.insert(ELEMENT_KEY.to_string(), Value::String(id.to_string()));
    Value::Object(map)
}

pub fn session_path(suffix: &str) -> String {
    format!("/session/{}{}", SESSION_ID, suffix)
}

/// Responses for the commands `BrowserSession` sends. Finding anything whose
/// selector mentions `missing` fails with "no such element".
pub fn chromedriver(request: &Recorded) -> (u16, String) {
    let prefix = session_path("");
    let rest = request.path.strip_prefix(prefix.as_str());

    match (request.method.as_str(), request.path.as_str(), rest) {
        ("GET", "/status", _) => ok(json!({ "ready": true, "message": "ready" })),
        ("POST", "/session", _) => ok(json!({
            "sessionId": SESSION_ID,
            "capabilities": { "browserName": "chrome", "browserVersion": "120.0" }
        })),
        ("DELETE", _, Some("")) => ok(Value::Null),
        ("GET", _, Some("/url")) => ok(json!("https://practicesoftwaretesting.com/")),
        ("GET", _, Some("/title")) => ok(json!("Practice Software Testing - Toolshop")),
        ("POST", _, Some("/element")) if request.body.contains("missing") => w3c_error(
            404,
            "no such element",
            "no such element: Unable to locate element\n  (Session info: chrome=120.0)",
        ),
        ("POST", _, Some("/element")) => ok(element("el-1")),
        ("POST", _, Some("/elements")) => ok(json!([element("el-1"), element("el-2")])),
        ("GET", _, Some(r)) if r.ends_with("/text") => ok(json!(" Combination Pliers ")),
        ("GET", _, Some(r)) if r.ends_with("/enabled") => ok(json!(false)),
        _ => ok(Value::Null),
    }
}
