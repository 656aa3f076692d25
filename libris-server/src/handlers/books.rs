//! Book catalog handlers

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use libris_core::{Book, LibrisError};
use serde::{Deserialize, Serialize};

/// List all books, in insertion order
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.catalog.read().await.list())
}

/// Get a single book by ISBN
pub async fn get_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let catalog = state.catalog.read().await;
    catalog
        .find(&isbn)
        .cloned()
        .map(Json)
        .ok_or(ApiError::BookNotFound(isbn))
}

/// Body of an add-by-ISBN request
#[derive(Debug, Deserialize)]
pub struct AddBookRequest {
    pub isbn: String,
}

/// Add a book by looking its ISBN up on the bibliographic service
///
/// No catalog lock is held during the remote lookup; the insert re-checks
/// the ISBN, so a book added meanwhile still fails with `DuplicateKey`.
pub async fn add_book(
    State(state): State<AppState>,
    request: Result<Json<AddBookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let Json(request) = request?;
    let isbn = request.isbn.trim();
    if isbn.is_empty() {
        return Err(ApiError::InvalidRequest("ISBN cannot be empty".to_string()));
    }

    if state.catalog.read().await.find(isbn).is_some() {
        return Err(LibrisError::DuplicateKey {
            isbn: isbn.to_string(),
        }
        .into());
    }

    tracing::info!("Looking up ISBN {}", isbn);
    let book = state.lookup.resolve(isbn).await?;
    state.catalog.write().await.add(book.clone())?;

    Ok((StatusCode::CREATED, Json(book)))
}

/// Confirmation message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Delete a book by ISBN
pub async fn delete_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state.catalog.write().await.remove(&isbn)?;
    if !removed {
        return Err(ApiError::BookNotFound(isbn));
    }

    Ok(Json(MessageResponse {
        message: format!("Book with ISBN {} deleted successfully", isbn),
    }))
}
