//! Repository layer for database operations
//!
//! [`CatalogStore`] is the query interface the catalog consumes: one method per
//! parameterized statement it needs. [`PgCatalogStore`] runs them against the
//! library's PostgreSQL database; [`MemoryCatalogStore`] keeps the three
//! relations in process for tests and local runs.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{AuthorId, Book, BookDetail, BookId, BookListing, GenreId},
};

pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Cheap round trip used by readiness checks
    async fn ping(&self) -> AppResult<()>;

    /// Ids of every author whose name matches exactly, in ascending id order
    async fn author_ids_by_name(&self, name: &str) -> AppResult<Vec<AuthorId>>;

    /// Ids of every genre whose name matches exactly, in ascending id order
    async fn genre_ids_by_name(&self, name: &str) -> AppResult<Vec<GenreId>>;

    /// Distinct author names
    async fn author_names(&self) -> AppResult<Vec<String>>;

    /// Distinct genre names
    async fn genre_names(&self) -> AppResult<Vec<String>>;

    /// Full book ⋈ author ⋈ genre listing
    async fn catalog_listing(&self) -> AppResult<Vec<BookListing>>;

    async fn book_detail(&self, id: &BookId) -> AppResult<Option<BookDetail>>;

    /// Insert a new book row.
    ///
    /// Fails with `Conflict` when the id is taken and with
    /// `InvalidReference` when the author or genre id does not exist.
    async fn insert_book(&self, book: &Book) -> AppResult<()>;

    /// Overwrite every column of an existing book. Returns `false` when no
    /// row has that id.
    async fn update_book(&self, book: &Book) -> AppResult<bool>;

    /// Returns `false` when no row has that id.
    async fn delete_book(&self, id: &BookId) -> AppResult<bool>;
}

pub type CatalogStoreArc = Arc<dyn CatalogStore>;
