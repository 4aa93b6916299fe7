//! Integration tests for the Ratechart Server API endpoints.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use ratechart_core::calendars::{Calendar, HolidaySet, WeekendCalendar};
use ratechart_core::types::Date;
use ratechart_ext_http::{EmptyHolidaySource, StaticHolidaySource};
use ratechart_server::{Server, ServerConfig};

/// Holidays are looked up for the current year, so test ranges live in it.
fn current_year() -> i32 {
    Date::today().year()
}

fn create_test_app(holidays: HolidaySet) -> Router {
    Server::new(
        ServerConfig::default(),
        Arc::new(StaticHolidaySource::new(holidays)),
    )
    .router()
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

// =============================================================================
// HEALTH
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(HolidaySet::new());

    let (status, json) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

// =============================================================================
// RANDOM CHART
// =============================================================================

#[tokio::test]
async fn test_random_chart_excludes_weekends_and_holidays() {
    let year = current_year();
    let from = Date::from_ymd(year, 3, 1).unwrap();
    let to = Date::from_ymd(year, 4, 30).unwrap();
    let holiday = WeekendCalendar.next_business_day(from);
    let app = create_test_app(HolidaySet::from_dates([holiday]));

    let uri = format!("/v1/functional/random/chart?fromDate={from}&toDate={to}");
    let (status, json) = get_json(app, &uri).await;
    assert_eq!(status, StatusCode::OK);

    let points = json.as_array().unwrap();
    let expected = from.iter_through(to).filter(Date::is_weekday).count() - 1;
    assert_eq!(points.len(), expected);

    let dates: Vec<Date> = points
        .iter()
        .map(|p| Date::parse(p["x"].as_str().unwrap()).unwrap())
        .collect();
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
    assert!(dates.iter().all(|d| d.is_weekday() && *d != holiday));

    // First point is anchored at zero
    assert_eq!(points[0]["y"].as_f64(), Some(0.0));
    assert!(points.iter().all(|p| p["y"].is_number()));
}

#[tokio::test]
async fn test_random_chart_single_holiday_day_is_empty() {
    let year = current_year();
    let day = WeekendCalendar.next_business_day(Date::from_ymd(year, 5, 1).unwrap());
    let app = create_test_app(HolidaySet::from_dates([day]));

    let uri = format!("/v1/functional/random/chart?fromDate={day}&toDate={day}");
    let (status, json) = get_json(app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_random_chart_weekend_only_range_is_empty() {
    let year = current_year();
    let saturday = Date::from_ymd(year, 6, 1)
        .unwrap()
        .iter_through(Date::from_ymd(year, 6, 7).unwrap())
        .find(|d| d.is_weekend() && !d.add_days(-1).is_weekend())
        .unwrap();
    let sunday = saturday.add_days(1);
    let app = create_test_app(HolidaySet::new());

    let uri = format!("/v1/functional/random/chart?fromDate={saturday}&toDate={sunday}");
    let (status, json) = get_json(app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_random_chart_rejects_malformed_date() {
    let app = create_test_app(HolidaySet::new());

    let (status, json) =
        get_json(app, "/v1/functional/random/chart?fromDate=2024-01-01&toDate=20240131").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Malformed date"));
}

#[tokio::test]
async fn test_random_chart_rejects_inverted_range() {
    let app = create_test_app(HolidaySet::new());

    let (status, json) =
        get_json(app, "/v1/functional/random/chart?fromDate=20240301&toDate=20240101").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_random_chart_requires_both_dates() {
    let app = create_test_app(HolidaySet::new());

    let (status, json) = get_json(app, "/v1/functional/random/chart?fromDate=20240101").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("toDate"));
}

#[tokio::test]
async fn test_random_chart_without_holiday_source() {
    let year = current_year();
    let from = Date::from_ymd(year, 1, 1).unwrap();
    let to = Date::from_ymd(year, 1, 31).unwrap();
    let app = Server::new(ServerConfig::default(), Arc::new(EmptyHolidaySource)).router();

    let uri = format!("/v1/functional/random/chart?fromDate={from}&toDate={to}");
    let (status, json) = get_json(app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json.as_array().unwrap().len(),
        from.iter_through(to).filter(Date::is_weekday).count()
    );
}

#[tokio::test]
async fn test_api_version_from_config() {
    let config = ServerConfig::from_toml_str(r#"api_version = "v9""#).unwrap();
    let app = Server::new(config, Arc::new(EmptyHolidaySource)).router();

    let (status, _) =
        get_json(app.clone(), "/v9/functional/random/chart?fromDate=20240102&toDate=20240102")
            .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) =
        get_json(app, "/v1/functional/random/chart?fromDate=20240102&toDate=20240102").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// MASKING
// =============================================================================

#[tokio::test]
async fn test_mask_endpoint() {
    let app = create_test_app(HolidaySet::new());

    let (status, json) = post_json(app, "/v1/functional/mask", json!({ "mask": "홍길동" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "mask": "홍*동" }));
}

#[tokio::test]
async fn test_mask_endpoint_short_inputs() {
    let app = create_test_app(HolidaySet::new());

    let (_, json) = post_json(app.clone(), "/v1/functional/mask", json!({ "mask": "ab" })).await;
    assert_eq!(json["mask"], "a*");

    let (_, json) = post_json(app, "/v1/functional/mask", json!({ "mask": "" })).await;
    assert_eq!(json["mask"], "");
}

#[tokio::test]
async fn test_mask_endpoint_rejects_malformed_body() {
    let app = create_test_app(HolidaySet::new());

    let (status, json) =
        post_json(app.clone(), "/v1/functional/mask", json!({ "text": "abc" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());

    let request = Request::builder()
        .method("POST")
        .uri("/v1/functional/mask")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].is_string());
}
