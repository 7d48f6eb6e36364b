use std::sync::Arc;
use axum::{routing::{get, post}, Router, Json};
use tower_http::cors::{CorsLayer, Any};
use serde::Serialize;
use axum::http::StatusCode;
use tracing::{info, warn};
use crate::category::{Band, Category, BANDS};
use crate::engine::InferenceEngine;
use crate::error::FuzzyAqiError;
use crate::settings::EngineHandle;
use crate::standard::{assess_with, DominantTerm, Pollutant, Readings, POLLUTANTS};

#[derive(Serialize)]
pub struct AqiResponse {
    pub status: String,
    pub elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aqi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant: Option<Vec<DominantTerm>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Computes one response; the HTTP handler only adds the blocking-thread hop.
pub fn respond(engine: &InferenceEngine, readings: &Readings) -> (StatusCode, AqiResponse) {
    let started = std::time::Instant::now();
    let result = assess_with(engine, readings);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    match result {
        Ok(assessment) => {
            let band: &Band = assessment.band;
            info!(ms = elapsed_ms, aqi = assessment.aqi, category = band.label, "aqi computed");
            let body = AqiResponse {
                status: "ok".into(),
                elapsed_ms,
                aqi: Some(assessment.aqi),
                category: Some(band.category),
                label: Some(band.label),
                color: Some(band.color),
                recommendation: Some(band.recommendation),
                dominant: Some(assessment.dominant),
                error: None,
            };
            (StatusCode::OK, body)
        }
        Err(e) => {
            let status = if e.is_compute_error() { StatusCode::UNPROCESSABLE_ENTITY } else { StatusCode::INTERNAL_SERVER_ERROR };
            let msg = format!("{e}");
            warn!(%msg, code = %status.as_u16(), "aqi error");
            (status, error_body(elapsed_ms, e))
        }
    }
}

fn error_body(elapsed_ms: f64, e: FuzzyAqiError) -> AqiResponse {
    AqiResponse { status: "error".into(), elapsed_ms, aqi: None, category: None, label: None, color: None, recommendation: None, dominant: None, error: Some(e.to_string()) }
}

pub async fn categories() -> Json<&'static [Band]> {
    Json(&BANDS[..])
}

pub async fn pollutants() -> Json<&'static [Pollutant]> {
    Json(&POLLUTANTS[..])
}

pub fn router(engine: Arc<EngineHandle>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers(Any);
    Router::new()
        .route("/v1/aqi", post(move |Json(readings): Json<Readings>| {
        let engine = Arc::clone(&engine);
        async move {
            // The engine is synchronous, so it runs on a blocking thread.
            let (status, body) = tokio::task::spawn_blocking(move || respond(&engine, &readings))
                .await
                .map_err(|e| {
                    warn!(error=%e, "Join error");
                    (StatusCode::INTERNAL_SERVER_ERROR, "Join error")
                })?;
            Ok::<_, (StatusCode, &'static str)>((status, Json(body)))
        }
    }))
        .route("/v1/categories", get(categories))
        .route("/v1/pollutants", get(pollutants))
        .layer(cors)
}
