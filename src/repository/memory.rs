//! In-memory catalog store
//!
//! Mirrors the relational constraints of the PostgreSQL schema (primary key
//! on the book id, foreign keys to author and genre) so the service sees the
//! same error classes from both stores.

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CatalogStore;
use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorId, Book, BookDetail, BookId, BookListing, Genre, GenreId},
};

#[derive(Debug, Default)]
struct Tables {
    authors: Vec<Author>,
    genres: Vec<Genre>,
    books: BTreeMap<BookId, Book>,
}

impl Tables {
    fn author_name(&self, id: &AuthorId) -> Option<&str> {
        self.authors
            .iter()
            .find(|author| &author.author_id == id)
            .map(|author| author.author_name.as_str())
    }

    fn genre_name(&self, id: &GenreId) -> Option<&str> {
        self.genres
            .iter()
            .find(|genre| &genre.genre_id == id)
            .map(|genre| genre.genre_name.as_str())
    }

    /// Same rules as the `CHECK` constraints on the book table
    fn check_copies(book: &Book) -> AppResult<()> {
        if book.total_copies < 0 || book.available_copies < 0 {
            return Err(AppError::Validation(format!(
                "Book {} has a negative copy count",
                book.book_id
            )));
        }
        Ok(())
    }

    fn check_references(&self, book: &Book) -> AppResult<()> {
        if self.author_name(&book.author_id).is_none() {
            return Err(AppError::InvalidReference(format!(
                "Author {} does not exist",
                book.author_id
            )));
        }
        if self.genre_name(&book.genre_id).is_none() {
            return Err(AppError::InvalidReference(format!(
                "Genre {} does not exist",
                book.genre_id
            )));
        }
        Ok(())
    }
}

/// In-memory implementation of the catalog store.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogStore {
    tables: Arc<RwLock<Tables>>,
    offline: Arc<AtomicBool>,
}

impl MemoryCatalogStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with initial author and genre rows and no books.
    pub fn with_references(authors: Vec<Author>, genres: Vec<Genre>) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables {
                authors,
                genres,
                books: BTreeMap::new(),
            })),
            offline: Arc::default(),
        }
    }

    /// Adds a book row directly, bypassing reference checks.
    pub async fn seed_book(&self, book: Book) {
        self.tables
            .write()
            .await
            .books
            .insert(book.book_id.clone(), book);
    }

    /// Renames an author in place.
    pub async fn rename_author(&self, id: &AuthorId, name: &str) {
        let mut tables = self.tables.write().await;
        if let Some(author) = tables.authors.iter_mut().find(|author| &author.author_id == id) {
            author.author_name = name.to_string();
        }
    }

    /// While offline every call fails with `BackendUnavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub async fn book_count(&self) -> usize {
        self.tables.read().await.books.len()
    }

    fn check_online(&self) -> AppResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::BackendUnavailable(
                "in-memory store is offline".to_string(),
            ));
        }
        Ok(())
    }
}

fn sorted_distinct(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names.dedup();
    names
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn ping(&self) -> AppResult<()> {
        self.check_online()
    }

    async fn author_ids_by_name(&self, name: &str) -> AppResult<Vec<AuthorId>> {
        self.check_online()?;
        let tables = self.tables.read().await;
        let mut ids: Vec<AuthorId> = tables
            .authors
            .iter()
            .filter(|author| author.author_name == name)
            .map(|author| author.author_id.clone())
            .collect();
        ids.sort();
        Ok(ids)
    }

    async fn genre_ids_by_name(&self, name: &str) -> AppResult<Vec<GenreId>> {
        self.check_online()?;
        let tables = self.tables.read().await;
        let mut ids: Vec<GenreId> = tables
            .genres
            .iter()
            .filter(|genre| genre.genre_name == name)
            .map(|genre| genre.genre_id.clone())
            .collect();
        ids.sort();
        Ok(ids)
    }

    async fn author_names(&self) -> AppResult<Vec<String>> {
        self.check_online()?;
        let tables = self.tables.read().await;
        Ok(sorted_distinct(
            tables.authors.iter().map(|author| author.author_name.clone()).collect(),
        ))
    }

    async fn genre_names(&self) -> AppResult<Vec<String>> {
        self.check_online()?;
        let tables = self.tables.read().await;
        Ok(sorted_distinct(
            tables.genres.iter().map(|genre| genre.genre_name.clone()).collect(),
        ))
    }

    async fn catalog_listing(&self) -> AppResult<Vec<BookListing>> {
        self.check_online()?;
        let tables = self.tables.read().await;
        // Inner join: books with a dangling reference drop out, as in SQL.
        let rows = tables
            .books
            .values()
            .filter_map(|book| {
                let author = tables.author_name(&book.author_id)?;
                let genre = tables.genre_name(&book.genre_id)?;
                Some(BookListing {
                    book_id: book.book_id.clone(),
                    title: book.title.clone(),
                    author: author.to_string(),
                    isbn: book.isbn.clone(),
                    publisher: book.publisher.clone(),
                    pb_year: book.pb_year,
                    genre: genre.to_string(),
                    description: book.description.clone(),
                    total_copies: book.total_copies,
                    available_copies: book.available_copies,
                })
            })
            .collect();
        Ok(rows)
    }

    async fn book_detail(&self, id: &BookId) -> AppResult<Option<BookDetail>> {
        self.check_online()?;
        let tables = self.tables.read().await;
        Ok(tables.books.get(id).and_then(|book| {
            tables.author_name(&book.author_id).map(|author_name| BookDetail {
                book: book.clone(),
                author_name: author_name.to_string(),
            })
        }))
    }

    async fn insert_book(&self, book: &Book) -> AppResult<()> {
        self.check_online()?;
        let mut tables = self.tables.write().await;
        if tables.books.contains_key(&book.book_id) {
            return Err(AppError::Conflict(format!(
                "Book {} already exists",
                book.book_id
            )));
        }
        Tables::check_copies(book)?;
        tables.check_references(book)?;
        tables.books.insert(book.book_id.clone(), book.clone());
        Ok(())
    }

    async fn update_book(&self, book: &Book) -> AppResult<bool> {
        self.check_online()?;
        let mut tables = self.tables.write().await;
        if !tables.books.contains_key(&book.book_id) {
            return Ok(false);
        }
        Tables::check_copies(book)?;
        tables.check_references(book)?;
        tables.books.insert(book.book_id.clone(), book.clone());
        Ok(true)
    }

    async fn delete_book(&self, id: &BookId) -> AppResult<bool> {
        self.check_online()?;
        Ok(self.tables.write().await.books.remove(id).is_some())
    }
}
