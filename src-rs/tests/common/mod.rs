#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

use axum::http::{header, Method, StatusCode, Uri};
use axum::Router;

#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: String,
    pub body: String,
}

pub struct MockRemote {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockRemote {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

/// Serves `app` on an ephemeral localhost port from a background runtime.
pub fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            axum::Server::from_tcp(listener)
                .unwrap()
                .serve(app.into_make_service())
                .await
                .unwrap();
        });
    });
    format!("http://{}", addr)
}

/// A fake generateContent endpoint answering every request with `status` and `body`.
pub fn spawn_remote(status: u16, body: &str) -> MockRemote {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();
    let reply = body.to_string();
    let app = Router::new().fallback(move |method: Method, uri: Uri, body: String| {
        let recorded = recorded.clone();
        let reply = reply.clone();
        async move {
            recorded.lock().unwrap().push(Recorded {
                method,
                path: uri.path().to_string(),
                query: uri.query().unwrap_or_default().to_string(),
                body,
            });
            (
                StatusCode::from_u16(status).unwrap(),
                [(header::CONTENT_TYPE, "application/json")],
                reply,
            )
        }
    });
    MockRemote {
        base_url: serve(app),
        requests,
    }
}

pub fn text_reply(text: &str) -> String {
    serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
    })
    .to_string()
}

/// A localhost URL nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
