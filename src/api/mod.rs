//! HTTP surface of the mock backend.
//!
//! Every handler is a thin adapter: decode the request, call one `Store`
//! operation, encode the result. Errors leave through [`response::ApiError`].

mod apps;
mod auth;
mod chats;
mod dashboard;
mod params;
mod response;
mod seed;
mod tasks;
mod users;


use axum::{
    extract::{DefaultBodyLimit, State},
    response::Json,
    routing::{get, post},
    Router,
};
use mockdesk_core::config::ApiConfig;
use mockdesk_store::Store;
use serde_json::{json, Value};
use std::time::Instant;
use tracing::info;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    store: Store,
    uptime: Instant,
}

impl ApiState {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            uptime: Instant::now(),
        }
    }
}

/// Build the axum router with shared state.
pub fn build_router(state: ApiState, config: &ApiConfig) -> Router {
    let mut router = Router::new()
        .route("/api/health", get(health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/tasks", get(tasks::list).post(tasks::create))
        .route(
            "/api/tasks/{id}",
            get(tasks::get).put(tasks::update).delete(tasks::delete),
        )
        .route("/api/users", get(users::list).post(users::create))
        .route("/api/users/invite", post(users::invite))
        .route(
            "/api/users/{id}",
            get(users::get).put(users::update).delete(users::delete),
        )
        .route("/api/apps", get(apps::list))
        .route("/api/apps/{id}", get(apps::get))
        .route("/api/apps/{id}/connect", post(apps::connect))
        .route("/api/apps/{id}/disconnect", post(apps::disconnect))
        .route("/api/chats", get(chats::list))
        .route("/api/chats/{id}", get(chats::get))
        .route("/api/chats/{id}/messages", post(chats::post_message))
        .route("/api/dashboard/stats", get(dashboard::stats))
        .route("/api/dashboard/overview", get(dashboard::overview))
        .route("/api/dashboard/recent-sales", get(dashboard::recent_sales));

    if config.allow_seeding {
        router = router
            .route("/api/__seed", post(seed::seed))
            .route("/api/__reset", post(seed::reset));
    }

    router
        .fallback(response::not_found)
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .with_state(state)
}

/// Run the API server until ctrl-c.
pub async fn serve(config: ApiConfig, store: Store) -> anyhow::Result<()> {
    let backend = store.backend_name().to_string();
    let app = build_router(ApiState::new(store), &config);
    let addr = format!("{}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind to {addr}: {e}"))?;

    info!("API server listening on {addr} (backend: {backend})");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}

/// `GET /api/health`
async fn health(State(state): State<ApiState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "backend": state.store.backend_name(),
        "uptime_secs": state.uptime.elapsed().as_secs(),
    }))
}
