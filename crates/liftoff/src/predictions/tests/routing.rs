use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::predictions::router::{
    prediction_router, predictions_handler, PREDICTIONS_CACHE_CONTROL,
};

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn predictions_route_serves_camel_case_payload() {
    let router = prediction_router(Arc::new(service_with(StaticSource(vec![
        full_match_closure(),
    ]))));

    let response = router
        .oneshot(
            Request::get("/api/predictions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        PREDICTIONS_CACHE_CONTROL
    );

    let body = json_body(response).await;
    assert_eq!(body["lastUpdated"], "2025-05-20T14:00:00Z");
    let closure = &body["roadClosures"][0];
    assert_eq!(closure["location"]["id"], BOCA_CHICA);
    assert_eq!(closure["status"], "scheduled");
    assert_eq!(closure["startDate"], "2025-05-22T10:00:00Z");
    assert!(closure["location"].get("relatedSiteId").is_none());
    assert_eq!(closure["prediction"]["confidence"], 85);
    assert_eq!(closure["prediction"]["algorithmVersion"], "1.0.0-mvp");
    assert_eq!(closure["prediction"]["predictedVehicle"]["variant"], "Block 1");
    assert_eq!(
        closure["prediction"]["reasoning"]
            .as_array()
            .expect("reasoning array")
            .len(),
        4
    );
}

#[tokio::test]
async fn handler_hides_internal_error_detail() {
    let service = Arc::new(service_with(UnavailableSource));

    let response = predictions_handler(State(service)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get(header::CACHE_CONTROL).is_none());
    let body = json_body(response).await;
    assert_eq!(body, serde_json::json!({ "error": "Failed to fetch predictions" }));
}
