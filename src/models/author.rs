//! Author model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::ids::AuthorId;

/// Author row. Read-only from the catalog's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub author_id: AuthorId,
    pub author_name: String,
}

impl Author {
    pub fn new(author_id: impl Into<AuthorId>, author_name: impl Into<String>) -> Self {
        Self {
            author_id: author_id.into(),
            author_name: author_name.into(),
        }
    }
}
