//! Book catalog service
//!
//! List, detail, add, edit and remove operations on book records. Writes take
//! author and genre display names and resolve them before touching the book
//! table. Lists are served from the snapshot cache.

use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;
use validator::Validate;

use crate::{
    config::{CatalogConfig, EditAuthorBinding},
    error::{AppError, AppResult},
    models::{AuthorId, Book, BookDetail, BookId, CreateBook, UpdateBook},
    repository::CatalogStoreArc,
};

use super::{
    resolver::ReferenceResolver,
    snapshot::{CatalogSnapshot, SnapshotCache},
};

#[derive(Clone)]
pub struct CatalogService {
    store: CatalogStoreArc,
    resolver: ReferenceResolver,
    snapshot: Arc<SnapshotCache>,
    edit_author_binding: EditAuthorBinding,
}

impl CatalogService {
    /// Build the service and take the initial catalog snapshot.
    pub async fn new(store: CatalogStoreArc, config: &CatalogConfig) -> AppResult<Self> {
        let snapshot = SnapshotCache::load(store.as_ref(), config.snapshot_refresh).await?;
        Ok(Self {
            resolver: ReferenceResolver::new(store.clone()),
            snapshot: Arc::new(snapshot),
            store,
            edit_author_binding: config.edit_author_binding,
        })
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    /// Current catalog snapshot. Does not query the store.
    pub async fn list_books(&self) -> Arc<CatalogSnapshot> {
        self.snapshot.current().await
    }

    pub async fn get_book_detail(&self, id: &BookId) -> AppResult<BookDetail> {
        tracing::debug!("Fetching details of book {}", id);
        self.store
            .book_detail(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Add a book. Both names must resolve before anything is inserted.
    pub async fn add_book(&self, data: CreateBook) -> AppResult<Book> {
        data.validate()?;
        let author_id = self
            .resolver
            .resolve_author_id(&data.author)
            .await
            .map_err(AppError::into_invalid_reference)?;
        let genre_id = self
            .resolver
            .resolve_genre_id(&data.genre)
            .await
            .map_err(AppError::into_invalid_reference)?;

        warn_on_copy_counts(&data.book_id, data.total_copies, data.available_copies);

        let book = data.into_book(author_id, genre_id);
        self.store.insert_book(&book).await?;
        tracing::info!("Book {} added ({})", book.book_id, book.title);

        self.snapshot.after_write(self.store.as_ref()).await;
        Ok(book)
    }

    /// Overwrite every field of an existing book.
    pub async fn edit_book(&self, id: &BookId, data: UpdateBook) -> AppResult<Book> {
        data.validate()?;
        let author_id = match self.edit_author_binding {
            EditAuthorBinding::Resolved => self
                .resolver
                .resolve_author_id(&data.author)
                .await
                .map_err(AppError::into_invalid_reference)?,
            EditAuthorBinding::LegacyIsbn => AuthorId::new(data.isbn.clone()),
        };
        let genre_id = self
            .resolver
            .resolve_genre_id(&data.genre)
            .await
            .map_err(AppError::into_invalid_reference)?;

        warn_on_copy_counts(id.as_str(), data.total_copies, data.available_copies);

        let book = data.into_book(id.clone(), author_id, genre_id);
        if !self.store.update_book(&book).await? {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        tracing::info!("Book {} updated", id);

        self.snapshot.after_write(self.store.as_ref()).await;
        Ok(book)
    }

    /// Remove a book. Removing an id that is not in the catalog is `NotFound`.
    pub async fn remove_book(&self, id: &BookId) -> AppResult<()> {
        if !self.store.delete_book(id).await? {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        tracing::info!("Book {} removed", id);

        self.snapshot.after_write(self.store.as_ref()).await;
        Ok(())
    }

    pub async fn list_author_names(&self) -> AppResult<Vec<String>> {
        self.store.author_names().await
    }

    pub async fn list_genre_names(&self) -> AppResult<Vec<String>> {
        self.store.genre_names().await
    }

    /// Rebuild the snapshot now, whatever the refresh policy
    pub async fn refresh_snapshot(&self) -> AppResult<Arc<CatalogSnapshot>> {
        self.snapshot.refresh(self.store.as_ref()).await
    }

    /// Rebuild the snapshot on a fixed period until the task is aborted.
    pub fn spawn_snapshot_refresher(&self, period: Duration) -> JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // the first tick fires immediately and the startup snapshot is fresh
            interval.tick().await;
            loop {
                interval.tick().await;
                if let Err(e) = service.refresh_snapshot().await {
                    tracing::warn!("Periodic catalog snapshot refresh failed: {}", e);
                }
            }
        })
    }
}

fn warn_on_copy_counts(book_id: &str, total: i32, available: i32) {
    if available > total {
        tracing::warn!(
            "Book {} has more available copies ({}) than total copies ({})",
            book_id,
            available,
            total
        );
    }
}
