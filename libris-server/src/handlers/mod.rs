//! Request handlers

mod books;

pub use books::*;

use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

/// API information response
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<&'static str>,
}

/// Root endpoint with API information
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Library Management System API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            "GET /books",
            "POST /books",
            "GET /books/:isbn",
            "DELETE /books/:isbn",
            "GET /health",
        ],
    })
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub book_count: usize,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let book_count = state.catalog.read().await.len();
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        book_count,
    })
}
