//! Author and genre name resolution

use crate::{
    error::{AppError, AppResult},
    models::{AuthorId, GenreId},
    repository::CatalogStoreArc,
};

/// Maps display names to identifiers with an exact, case-sensitive match.
///
/// Names are not unique in the database. When several rows share a name the
/// lowest id wins and the ambiguity is logged.
#[derive(Clone)]
pub struct ReferenceResolver {
    store: CatalogStoreArc,
}

impl ReferenceResolver {
    pub fn new(store: CatalogStoreArc) -> Self {
        Self { store }
    }

    pub async fn resolve_author_id(&self, name: &str) -> AppResult<AuthorId> {
        let ids = self.store.author_ids_by_name(name).await?;
        first_match("Author", name, ids)
    }

    pub async fn resolve_genre_id(&self, name: &str) -> AppResult<GenreId> {
        let ids = self.store.genre_ids_by_name(name).await?;
        first_match("Genre", name, ids)
    }
}

fn first_match<T: std::fmt::Display>(kind: &str, name: &str, ids: Vec<T>) -> AppResult<T> {
    if ids.len() > 1 {
        tracing::warn!(
            "{} name '{}' matches {} rows, using id {}",
            kind,
            name,
            ids.len(),
            ids[0]
        );
    }
    ids.into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(format!("{} '{}' not found", kind, name)))
}
