//! Author and genre name endpoints, used to fill the book form pickers

use axum::{extract::State, Json};

use crate::error::AppResult;

/// List author names
#[utoipa::path(
    get,
    path = "/authors",
    tag = "references",
    responses(
        (status = 200, description = "Distinct author names", body = Vec<String>)
    )
)]
pub async fn list_authors(State(state): State<crate::AppState>) -> AppResult<Json<Vec<String>>> {
    let names = state.services.catalog.list_author_names().await?;
    Ok(Json(names))
}

/// List genre names
#[utoipa::path(
    get,
    path = "/genres",
    tag = "references",
    responses(
        (status = 200, description = "Distinct genre names", body = Vec<String>)
    )
)]
pub async fn list_genres(State(state): State<crate::AppState>) -> AppResult<Json<Vec<String>>> {
    let names = state.services.catalog.list_genre_names().await?;
    Ok(Json(names))
}
