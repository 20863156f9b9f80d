//! Genre model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::ids::GenreId;

/// Genre row. Read-only from the catalog's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub genre_id: GenreId,
    pub genre_name: String,
}

impl Genre {
    pub fn new(genre_id: impl Into<GenreId>, genre_name: impl Into<String>) -> Self {
        Self {
            genre_id: genre_id.into(),
            genre_name: genre_name.into(),
        }
    }
}
