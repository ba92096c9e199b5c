use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tracing::error;

use super::service::PredictionService;

/// Fifteen minute shared-cache freshness with a thirty minute revalidation grace.
pub const PREDICTIONS_CACHE_CONTROL: &str = "public, s-maxage=900, stale-while-revalidate=1800";

/// Router builder exposing the active predictions endpoint.
pub fn prediction_router(service: Arc<PredictionService>) -> Router {
    Router::new()
        .route("/api/predictions", get(predictions_handler))
        .with_state(service)
}

pub(crate) async fn predictions_handler(State(service): State<Arc<PredictionService>>) -> Response {
    match service.active_predictions() {
        Ok(predictions) => (
            StatusCode::OK,
            [(header::CACHE_CONTROL, PREDICTIONS_CACHE_CONTROL)],
            axum::Json(predictions),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "failed to generate predictions");
            let payload = json!({
                "error": "Failed to fetch predictions",
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
