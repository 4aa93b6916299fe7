//! Request handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use ratechart_core::RateChartError;

use crate::mask::mask_string;
use crate::service::ChartService;

/// Application state.
pub struct AppState {
    /// Chart generation service
    pub charts: ChartService,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Query parameters for a random chart.
#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    /// Range start (YYYYMMDD).
    #[serde(rename = "fromDate")]
    pub from_date: Option<String>,
    /// Range end (YYYYMMDD).
    #[serde(rename = "toDate")]
    pub to_date: Option<String>,
}

/// Generate a random profit-rate chart.
///
/// Returns a JSON array of `{"x": "YYYYMMDD", "y": rate}` points, one per
/// business day.
pub async fn random_chart(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> impl IntoResponse {
    let (Some(from_date), Some(to_date)) = (query.from_date, query.to_date) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "fromDate and toDate are required" })),
        );
    };

    match state.charts.random_chart(&from_date, &to_date).await {
        Ok(points) => (StatusCode::OK, Json(json!(points))),
        Err(e @ RateChartError::MalformedDate { .. }) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        ),
        Err(e) => {
            tracing::error!("Chart generation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("Chart generation failed: {}", e) })),
            )
        }
    }
}

/// Masking request and response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct MaskBody {
    /// Text to mask, or the masked result.
    pub mask: String,
}

/// Mask sensitive text.
///
/// A body that is not `{"mask": "<text>"}` is rejected with a JSON error.
pub async fn mask(body: Result<Json<MaskBody>, JsonRejection>) -> impl IntoResponse {
    match body {
        Ok(Json(body)) => {
            let masked = MaskBody {
                mask: mask_string(&body.mask),
            };
            (StatusCode::OK, Json(json!(masked)))
        }
        Err(rejection) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": rejection.body_text() })),
        ),
    }
}
