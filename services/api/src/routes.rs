use crate::infra::{deserialize_date, deserialize_optional_date, AppState};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use strikehistory::error::AppError;
use strikehistory::workflows::strikes::domain::{
    DaySummary, DistanceFilter, IntensityFilter, SearchPeriod, StrikeError, StrikeEvent,
};
use strikehistory::workflows::strikes::report::{
    file_name, synthesize, ContractorIdentity, ReportContext, ReportVariant, RequesterIdentity,
};
use strikehistory::workflows::strikes::stats::{
    closest_approach, compute_stats, DistanceStats, DEFAULT_MAX_RADIUS_KM,
};
use strikehistory::workflows::strikes::{StrikeSearchService, StrikeSource};

#[derive(Debug, Deserialize)]
pub(crate) struct SearchRequest {
    pub(crate) address: String,
    pub(crate) period_days: u32,
    pub(crate) distance_km: u32,
    pub(crate) intensity_floor: u32,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchResponse {
    pub(crate) address: String,
    pub(crate) period_days: u32,
    pub(crate) searched_on: NaiveDate,
    pub(crate) day_count: usize,
    pub(crate) days: Vec<DaySummary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailRequest {
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub(crate) struct DetailResponse {
    pub(crate) date: NaiveDate,
    pub(crate) count: usize,
    pub(crate) events: Vec<StrikeEvent>,
    pub(crate) stats: DistanceStats,
    pub(crate) closest_km: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReportRequest {
    pub(crate) variant: ReportVariant,
    pub(crate) address: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) date: NaiveDate,
    #[serde(default)]
    pub(crate) requester: RequesterIdentity,
    #[serde(default)]
    pub(crate) contractor: ContractorIdentity,
    #[serde(default)]
    pub(crate) generated_at: Option<NaiveDateTime>,
}

pub(crate) fn with_strike_routes<S>(service: Arc<StrikeSearchService<S>>) -> axum::Router
where
    S: StrikeSource + 'static,
{
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/strikes/search",
            axum::routing::post(search_endpoint::<S>),
        )
        .route(
            "/api/v1/strikes/detail",
            axum::routing::post(detail_endpoint::<S>),
        )
        .route(
            "/api/v1/strikes/report",
            axum::routing::post(report_endpoint::<S>),
        )
        .with_state(service)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn search_endpoint<S>(
    State(service): State<Arc<StrikeSearchService<S>>>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError>
where
    S: StrikeSource + 'static,
{
    let SearchRequest {
        address,
        period_days,
        distance_km,
        intensity_floor,
        today,
    } = payload;

    let period = SearchPeriod::from_days(period_days)?;
    let distance = DistanceFilter::from_km(distance_km)?;
    let intensity = IntensityFilter::from_floor(intensity_floor)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let days = service.search(&address, period, distance, intensity, today)?;

    Ok(Json(SearchResponse {
        address,
        period_days,
        searched_on: today,
        day_count: days.len(),
        days,
    }))
}

pub(crate) async fn detail_endpoint<S>(
    State(service): State<Arc<StrikeSearchService<S>>>,
    Json(payload): Json<DetailRequest>,
) -> Result<Json<DetailResponse>, AppError>
where
    S: StrikeSource + 'static,
{
    let events = service.expand(payload.date);
    let stats = compute_stats(&events, DEFAULT_MAX_RADIUS_KM);
    let closest_km = closest_approach(&events);

    Ok(Json(DetailResponse {
        date: payload.date,
        count: events.len(),
        events,
        stats,
        closest_km,
    }))
}

pub(crate) async fn report_endpoint<S>(
    State(service): State<Arc<StrikeSearchService<S>>>,
    Json(payload): Json<ReportRequest>,
) -> Result<impl IntoResponse, AppError>
where
    S: StrikeSource + 'static,
{
    let ReportRequest {
        variant,
        address,
        date,
        requester,
        contractor,
        generated_at,
    } = payload;

    if address.trim().is_empty() {
        return Err(StrikeError::EmptyAddress.into());
    }

    let events = service.expand(date);
    let context = ReportContext {
        address,
        target_date: date,
        stats: compute_stats(&events, DEFAULT_MAX_RADIUS_KM),
        closest_km: closest_approach(&events),
        generated_at: generated_at.unwrap_or_else(|| Local::now().naive_local()),
        contractor,
        requester,
    };

    let content = synthesize(&context, variant);
    let download_name = file_name(variant, date);

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{download_name}\""),
            ),
        ],
        content,
    ))
}
