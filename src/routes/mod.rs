pub mod attachment_routes;
pub mod driver_routes;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware_with_origins;
use crate::state::AppState;

/// Router completo de la API
pub fn create_app(state: AppState) -> Router {
    let drivers = driver_routes::create_driver_router()
        .merge(attachment_routes::create_attachment_router(
            &state.config.upload_limits,
        ));

    Router::new()
        .route("/health", get(health))
        .nest("/drivers", drivers)
        .layer(cors_middleware_with_origins(&state.config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de salud simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "fleet-management",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
