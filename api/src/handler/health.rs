use crate::validation::WIRE_DATETIME_FORMAT;
use axum::{extract::State, http::StatusCode, Json};
use chrono::{Local, Utc};
use registry::AppRegistry;
use serde::Serialize;

#[derive(Serialize)]
pub struct IndexResponse {
    pub status: &'static str,
    pub time: String,
    pub utc_time: String,
}

/// API status plus server times, local and UTC.
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        status: "OK",
        time: Local::now().format(WIRE_DATETIME_FORMAT).to_string(),
        utc_time: Utc::now().format(WIRE_DATETIME_FORMAT).to_string(),
    })
}

pub async fn health_check_db(State(registry): State<AppRegistry>) -> StatusCode {
    if registry.health_check_repository().check_db().await {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
