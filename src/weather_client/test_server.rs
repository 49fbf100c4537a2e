//! In-process stand-in for the OpenWeatherMap and WAQI endpoints.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub(crate) struct Canned {
    status: StatusCode,
    body: Value,
    delay: Option<Duration>,
}

impl Canned {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body,
            delay: None,
        }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// Holds the response back for `delay` before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Canned responses per endpoint, plus a log of every request URI received.
#[derive(Clone)]
pub(crate) struct MockProviders {
    current: Canned,
    forecast: Canned,
    air_quality: Canned,
    hits: Arc<Mutex<Vec<String>>>,
}

impl MockProviders {
    pub fn new(current: Canned, forecast: Canned, air_quality: Canned) -> Self {
        Self {
            current,
            forecast,
            air_quality,
            hits: Arc::default(),
        }
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

async fn respond(State(providers): State<MockProviders>, uri: Uri) -> (StatusCode, Json<Value>) {
    providers.hits.lock().unwrap().push(uri.to_string());
    let path = uri.path();
    let canned = if path.ends_with("/weather") {
        &providers.current
    } else if path.ends_with("/forecast") {
        &providers.forecast
    } else if path.starts_with("/feed/") {
        &providers.air_quality
    } else {
        return (StatusCode::NOT_FOUND, Json(json!({"message": "no such endpoint"})));
    };
    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }
    (canned.status, Json(canned.body.clone()))
}

/// Serves `providers` on an ephemeral local port and returns its base URL.
pub(crate) async fn spawn(providers: MockProviders) -> String {
    let app = Router::new().fallback(respond).with_state(providers);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
