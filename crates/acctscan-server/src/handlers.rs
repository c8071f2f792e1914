use crate::error::ApiError;
use acctscan_app::ScanService;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::sync::Arc;

type AppState = State<Arc<ScanService>>;

pub async fn list_accounts(State(service): AppState) -> Result<Response, ApiError> {
    let accounts = service
        .accounts()
        .map_err(|e| ApiError::internal("Failed to fetch accounts", e))?;
    Ok(Json(accounts).into_response())
}

pub async fn get_account(
    State(service): AppState,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match service
        .account(&id)
        .map_err(|e| ApiError::internal("Failed to fetch account", e))?
    {
        Some(account) => Ok(Json(account).into_response()),
        None => Err(ApiError::AccountNotFound),
    }
}

pub async fn trigger_scan(State(service): AppState) -> Result<Response, ApiError> {
    let report = service
        .trigger_scan()
        .map_err(|e| ApiError::internal("Scan failed", e))?;
    Ok(Json(report).into_response())
}

pub async fn scan_summary(State(service): AppState) -> Result<Response, ApiError> {
    let summary = service
        .summary()
        .map_err(|e| ApiError::internal("Failed to generate summary", e))?;
    Ok(Json(summary).into_response())
}

pub async fn health() -> Response {
    Json(json!({ "status": "ok" })).into_response()
}
