//! The HTTP front end: one page, re-rendered per city query.

use crate::error::DashboardError;
use crate::render;
use crate::weather_client::client::WeatherClient;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use log::{info, warn};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Clone)]
struct AppState {
    client: Arc<WeatherClient>,
    default_city: Arc<str>,
}

#[derive(Debug, Deserialize)]
struct DashboardQuery {
    city: Option<String>,
}

pub fn router(client: WeatherClient, default_city: &str) -> Router {
    let state = AppState {
        client: Arc::new(client),
        default_city: Arc::from(default_city),
    };
    Router::new()
        .route("/", get(dashboard))
        .route("/health", get(health))
        .with_state(state)
}

/// Serves the dashboard on `addr` until the process is stopped.
pub async fn run(
    addr: SocketAddr,
    client: WeatherClient,
    default_city: &str,
) -> Result<(), DashboardError> {
    let app = router(client, default_city);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(DashboardError::Server)?;
    info!("WeatherPro dashboard running at http://{}", addr);
    axum::serve(listener, app)
        .await
        .map_err(DashboardError::Server)
}

async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let city = query.city.unwrap_or_else(|| state.default_city.to_string());
    let city = city.trim();
    if city.is_empty() {
        return Html(render::page("", &render::empty_query_hint()));
    }

    let body = match state.client.fetch(city).await {
        Ok(bundle) => {
            let owned_city = city.to_string();
            tokio::task::spawn_blocking(move || render::dashboard(&owned_city, &bundle))
                .await
                .unwrap_or_else(|e| {
                    warn!("Rendering the dashboard for '{}' failed: {}", city, e);
                    render::render_failed()
                })
        }
        Err(e) => {
            info!("Weather query for '{}' failed: {}", city, e);
            render::fetch_error(&e)
        }
    };
    Html(render::page(city, &body))
}

async fn health() -> &'static str {
    "ok"
}
