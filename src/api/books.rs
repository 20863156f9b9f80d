//! Book catalog API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{Book, BookDetail, BookId, BookListing, CreateBook, UpdateBook},
    services::snapshot::SnapshotInfo,
};

/// List books from the catalog snapshot
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Catalog listing as of the last snapshot", body = Vec<BookListing>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<BookListing>> {
    let snapshot = state.services.catalog.list_books().await;
    Json(snapshot.books.clone())
}

/// Get book details
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookDetail),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookDetail>> {
    let detail = state.services.catalog.get_book_detail(&BookId(id)).await?;
    Ok(Json(detail))
}

/// Add a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book added", body = Book),
        (status = 409, description = "Book ID already taken", body = crate::error::ErrorResponse),
        (status = 422, description = "Unknown author or genre", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.catalog.add_book(data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Edit a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Unknown author or genre", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.edit_book(&BookId(id), data).await?;
    Ok(Json(book))
}

/// Remove a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book removed"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.catalog.remove_book(&BookId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Rebuild the catalog snapshot
#[utoipa::path(
    post,
    path = "/books/snapshot/refresh",
    tag = "books",
    responses(
        (status = 200, description = "New snapshot taken", body = SnapshotInfo)
    )
)]
pub async fn refresh_snapshot(State(state): State<crate::AppState>) -> AppResult<Json<SnapshotInfo>> {
    let snapshot = state.services.catalog.refresh_snapshot().await?;
    Ok(Json(snapshot.info()))
}
