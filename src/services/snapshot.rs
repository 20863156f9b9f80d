//! Catalog snapshot cache
//!
//! The book listing is served from a materialized join taken at startup. A
//! snapshot is never mutated once built; refreshing builds a new one with the
//! next version number and swaps it in. Readers keep whatever `Arc` they got.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use utoipa::ToSchema;

use crate::{
    config::SnapshotRefresh,
    error::AppResult,
    models::BookListing,
    repository::CatalogStore,
};

/// Point-in-time book ⋈ author ⋈ genre listing
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub version: u64,
    pub taken_at: DateTime<Utc>,
    pub books: Vec<BookListing>,
}

/// Snapshot metadata returned by an explicit refresh
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotInfo {
    pub version: u64,
    pub taken_at: DateTime<Utc>,
    pub book_count: usize,
}

impl CatalogSnapshot {
    pub fn info(&self) -> SnapshotInfo {
        SnapshotInfo {
            version: self.version,
            taken_at: self.taken_at,
            book_count: self.books.len(),
        }
    }
}

pub struct SnapshotCache {
    policy: SnapshotRefresh,
    current: RwLock<Arc<CatalogSnapshot>>,
    /// Serializes refreshes so a slower, older listing never lands last
    refresh_gate: Mutex<()>,
}

impl SnapshotCache {
    /// Take the first snapshot. Startup awaits this before serving requests.
    pub async fn load(store: &dyn CatalogStore, policy: SnapshotRefresh) -> AppResult<Self> {
        let books = store.catalog_listing().await?;
        tracing::info!("Catalog snapshot loaded with {} books", books.len());
        Ok(Self {
            policy,
            current: RwLock::new(Arc::new(CatalogSnapshot {
                version: 1,
                taken_at: Utc::now(),
                books,
            })),
            refresh_gate: Mutex::new(()),
        })
    }

    pub async fn current(&self) -> Arc<CatalogSnapshot> {
        self.current.read().await.clone()
    }

    /// Re-run the listing query and swap in the result as the next version
    pub async fn refresh(&self, store: &dyn CatalogStore) -> AppResult<Arc<CatalogSnapshot>> {
        // Held across the query and the swap: listings install in query order.
        let _gate = self.refresh_gate.lock().await;
        let books = store.catalog_listing().await?;
        let mut current = self.current.write().await;
        let next = Arc::new(CatalogSnapshot {
            version: current.version + 1,
            taken_at: Utc::now(),
            books,
        });
        *current = next.clone();
        tracing::debug!(
            "Catalog snapshot refreshed to version {} ({} books)",
            next.version,
            next.books.len()
        );
        Ok(next)
    }

    /// Invalidation hook run after every successful write.
    ///
    /// A refresh failure leaves the previous snapshot in place; the write it
    /// follows has already been committed.
    pub async fn after_write(&self, store: &dyn CatalogStore) {
        match self.policy {
            SnapshotRefresh::Never => {
                tracing::debug!("Catalog snapshot left stale after write");
            }
            SnapshotRefresh::OnWrite => {
                if let Err(e) = self.refresh(store).await {
                    tracing::warn!("Failed to refresh catalog snapshot after write: {}", e);
                }
            }
        }
    }
}
