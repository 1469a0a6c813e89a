//! Shared fixtures: a local seed server and an in-memory app

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use report_server::{Config, ServerState, api};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceExt;

/// Seed document served by [`SeedServer`]; swappable between loads
#[derive(Clone, Default)]
pub struct SeedDoc(Arc<RwLock<Value>>);

impl SeedDoc {
    pub async fn set(&self, doc: Value) {
        *self.0.write().await = doc;
    }
}

/// Local HTTP server standing in for the remote seed source
pub struct SeedServer {
    pub addr: SocketAddr,
    pub doc: SeedDoc,
}

impl SeedServer {
    pub async fn start(doc: Value) -> Self {
        let seed = SeedDoc::default();
        seed.set(doc).await;

        let app = Router::new()
            .route("/seed.json", get(serve_seed))
            .route("/broken", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
            .route("/garbage", get(|| async { "definitely not json" }))
            .with_state(seed.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, doc: seed }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

async fn serve_seed(State(doc): State<SeedDoc>) -> Response {
    Json(doc.0.read().await.clone()).into_response()
}

/// App backed by an in-memory store, seeded from `seed_url` on demand
pub async fn memory_app(seed_url: &str) -> Router {
    let config = Config::with_overrides("memory", seed_url);
    let state = ServerState::initialize(&config).await.unwrap();
    api::router(state)
}

/// GET `uri` and decode the JSON body
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn record(id: i64, title: &str, price: f64, category: &str, sold: bool, date: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "price": price,
        "description": format!("{title} description"),
        "category": category,
        "sold": sold,
        "dateOfSale": date,
        "image": format!("https://img.example/{id}.jpg"),
    })
}

/// Three March records at 50 / 150 / 999 plus one April record
pub fn march_fixture() -> Value {
    json!([
        record(1, "Cotton Shirt", 50.0, "men's clothing", true, "2021-03-27T20:29:54+05:30"),
        record(2, "Gold Ring", 150.0, "jewelery", false, "2022-03-05T10:00:00Z"),
        record(3, "SSD Drive", 999.0, "electronics", true, "2021-03-15T08:00:00Z"),
        record(4, "Rain Jacket", 300.0, "women's clothing", false, "2021-04-02T12:00:00Z"),
    ])
}
