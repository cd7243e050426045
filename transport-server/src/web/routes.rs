//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode},
    routing::{get, post},
};
use chrono::{Local, SecondsFormat};
use serde::de::DeserializeOwned;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use super::dto::*;
use super::state::AppState;

const INVALID_BODY: &str = "Invalid request body";
const ENDPOINTS_REQUIRED: &str = "From and To locations are required";
const BUS_NUMBER_REQUIRED: &str = "Bus number is required";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/search-buses", post(search_buses).options(preflight))
        .route("/bus-route", post(bus_route).options(preflight))
        .route("/bmtc-buses", post(bmtc_buses).options(preflight));

    Router::new()
        .nest("/api/transport", api)
        .layer(cors())
        .with_state(state)
}

/// Any origin, any header, the usual verbs.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

/// Bare `OPTIONS` requests that the CORS layer does not answer itself.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Parse a JSON body, logging it on failure. A `null` body reads as an
/// empty request so the field checks report what is missing.
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Option<T> {
    match serde_json::from_slice::<Option<T>>(body) {
        Ok(req) => Some(req.unwrap_or_default()),
        Err(e) => {
            debug!(error = %e, body = %String::from_utf8_lossy(body), "rejected request body");
            None
        }
    }
}

async fn health() -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse::ok(HealthData {
        status: "healthy",
        service: "Transport Help API",
        time: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
    }))
}

/// Local buses for BMTC pairs, categorized KSRTC listings otherwise.
async fn search_buses(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<ApiResponse<SearchData>> {
    let Some(req) = parse_body::<BusSearchRequest>(&body) else {
        return Json(ApiResponse::fail(INVALID_BODY));
    };
    if !req.has_endpoints() {
        return Json(ApiResponse::fail(ENDPOINTS_REQUIRED));
    }

    info!(from = %req.from, to = %req.to, "search-buses");
    let outcome = state
        .engine
        .search(&req.from, &req.to, req.date.as_deref())
        .await;
    Json(ApiResponse::ok(outcome.into()))
}

/// Stops for one bus, live if possible.
async fn bus_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<ApiResponse<crate::domain::BusRoute>> {
    let Some(req) = parse_body::<BusRouteRequest>(&body) else {
        return Json(ApiResponse::fail(INVALID_BODY));
    };
    if req.bus_number.is_empty() {
        return Json(ApiResponse::fail(BUS_NUMBER_REQUIRED));
    }

    info!(bus = %req.bus_number, "bus-route");
    Json(ApiResponse::ok(state.directory.route(&req.bus_number).await))
}

/// Local buses between any two places, without the membership check.
async fn bmtc_buses(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<ApiResponse<LocalBusesData>> {
    let Some(req) = parse_body::<BusSearchRequest>(&body) else {
        return Json(ApiResponse::fail(INVALID_BODY));
    };
    if !req.has_endpoints() {
        return Json(ApiResponse::fail(ENDPOINTS_REQUIRED));
    }

    info!(from = %req.from, to = %req.to, "bmtc-buses");
    let buses = state
        .engine
        .local_buses(&req.from, &req.to)
        .into_iter()
        .map(BusEntry::from_route)
        .collect();

    Json(ApiResponse::ok(LocalBusesData {
        buses,
        from: req.from,
        to: req.to,
    }))
}
