//! Routes and canned payloads for the mock API server.
//!
//! The payloads are literal mock data; only the timestamps are generated
//! per request. Nothing is stored between requests.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use chrono::{Local, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// HTML test page served at `/` and `/test`
    pub page: PathBuf,
}

impl AppState {
    pub fn new(page: impl Into<PathBuf>) -> Self {
        Self { page: page.into() }
    }
}

/// Build the mock API router
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(test_interface))
        .route("/test", get(test_interface))
        .route("/api/weather", get(weather))
        .route("/api/location", get(location))
        .route("/api/journal", get(journal_status))
        .route("/api/journal/create", post(create_journal))
}

fn now_iso() -> String {
    Local::now().to_rfc3339()
}

/// Canned weather payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub temperature: f64,
    pub temperature_celsius: f64,
    pub condition: &'static str,
    pub description: &'static str,
    pub humidity: u32,
    pub wind_speed: f64,
    pub wind_direction: &'static str,
    pub pressure: u32,
    pub visibility: u32,
    pub feels_like: f64,
    pub uv_index: u32,
    pub sunrise: &'static str,
    pub sunset: &'static str,
    pub timestamp: String,
}

impl WeatherReport {
    /// Stable literals with a fresh timestamp
    pub fn current() -> Self {
        Self {
            temperature: 72.5,
            temperature_celsius: 22.5,
            condition: "Clear",
            description: "Clear sky with light breeze",
            humidity: 65,
            wind_speed: 8.5,
            wind_direction: "NW",
            pressure: 1013,
            visibility: 10,
            feels_like: 70.2,
            uv_index: 5,
            sunrise: "06:45",
            sunset: "19:30",
            timestamp: now_iso(),
        }
    }
}

/// Canned location-verification payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationReport {
    pub verified: bool,
    pub address: &'static str,
    pub location_type: &'static str,
    pub nearby_landmarks: Vec<&'static str>,
    pub timestamp: String,
}

impl LocationReport {
    /// Stable literals with a fresh timestamp
    pub fn current() -> Self {
        Self {
            verified: true,
            address: "1234 Farm Road, Ames, IA 50011",
            location_type: "Agricultural Facility",
            nearby_landmarks: vec![
                "Iowa State University Farm",
                "Agricultural Research Station",
                "FFA Training Center",
            ],
            timestamp: now_iso(),
        }
    }
}

/// Canned journal-system status payload.
///
/// The backing-system fields are placeholder literals; nothing real
/// sits behind them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalStatus {
    pub system: &'static str,
    pub database: &'static str,
    pub n8n: &'static str,
    pub supabase: &'static str,
    pub entries_count: u32,
    pub last_entry: String,
}

impl JournalStatus {
    /// Stable literals with a fresh timestamp
    pub fn current() -> Self {
        Self {
            system: "operational",
            database: "connected",
            n8n: "ready",
            supabase: "connected",
            entries_count: 42,
            last_entry: now_iso(),
        }
    }
}

/// Echo response for a created journal entry
#[derive(Debug, Clone, Serialize)]
pub struct CreateJournalResponse {
    pub success: bool,
    pub id: String,
    pub message: &'static str,
    pub data: serde_json::Value,
}

impl CreateJournalResponse {
    /// Wrap submitted entry data with a generated id
    pub fn new(data: serde_json::Value) -> Self {
        Self {
            success: true,
            id: format!("journal_{}", Utc::now().timestamp()),
            message: "Journal entry created successfully",
            data,
        }
    }
}

/// Serve the HTML test page
async fn test_interface(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    match tokio::fs::read_to_string(&state.page).await {
        Ok(content) => Ok(Html(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ApiError::NotFound("Test interface not found".to_string()))
        }
        Err(e) => Err(ApiError::Internal(format!(
            "Failed to read test page: {}",
            e
        ))),
    }
}

/// Mock weather data
async fn weather() -> Json<WeatherReport> {
    Json(WeatherReport::current())
}

/// Mock location verification
async fn location() -> Json<LocationReport> {
    Json(LocationReport::current())
}

/// Mock journal system status
async fn journal_status() -> Json<JournalStatus> {
    Json(JournalStatus::current())
}

/// Create a journal entry: parse the posted JSON and echo it back with
/// a generated id. Each POST is independent; nothing is stored.
async fn create_journal(body: Bytes) -> Result<Json<CreateJournalResponse>, ApiError> {
    let data: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("Invalid JSON data".to_string()))?;

    Ok(Json(CreateJournalResponse::new(data)))
}

/// API error type
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
