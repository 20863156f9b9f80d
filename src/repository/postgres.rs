//! PostgreSQL catalog store
//!
//! Column names follow the existing library schema: quoted camelCase columns
//! and an unquoted (hence lowercase) `bookid`. Every query aliases them to the
//! snake_case field names of the row structs.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::CatalogStore;
use crate::{
    error::AppResult,
    models::{AuthorId, Book, BookDetail, BookId, BookListing, GenreId},
};

const BOOK_COLUMNS: &str = r#"
    book.bookid AS book_id, book.title, book."authorId" AS author_id, book.isbn,
    book.publisher, book."pbYear" AS pb_year, book."genreId" AS genre_id,
    book.description, book."totalCopies" AS total_copies,
    book."availableCopies" AS available_copies
"#;

#[derive(Clone)]
pub struct PgCatalogStore {
    pool: Pool<Postgres>,
}

impl PgCatalogStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn author_ids_by_name(&self, name: &str) -> AppResult<Vec<AuthorId>> {
        let ids = sqlx::query_scalar::<_, AuthorId>(
            r#"SELECT "authorId" FROM author WHERE "authorName" = $1 ORDER BY "authorId""#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        Ok(ids)
    }

    async fn genre_ids_by_name(&self, name: &str) -> AppResult<Vec<GenreId>> {
        let ids = sqlx::query_scalar::<_, GenreId>(
            r#"SELECT "genreId" FROM genre WHERE "genreName" = $1 ORDER BY "genreId""#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        Ok(ids)
    }

    async fn author_names(&self) -> AppResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"SELECT DISTINCT "authorName" FROM author ORDER BY "authorName""#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    async fn genre_names(&self) -> AppResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"SELECT DISTINCT "genreName" FROM genre ORDER BY "genreName""#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    async fn catalog_listing(&self) -> AppResult<Vec<BookListing>> {
        let rows = sqlx::query_as::<_, BookListing>(
            r#"
            SELECT book.bookid AS book_id, book.title, author."authorName" AS author,
                   book.isbn, book.publisher, book."pbYear" AS pb_year,
                   genre."genreName" AS genre, book.description,
                   book."totalCopies" AS total_copies,
                   book."availableCopies" AS available_copies
            FROM book
            JOIN author ON book."authorId" = author."authorId"
            JOIN genre ON book."genreId" = genre."genreId"
            ORDER BY book.bookid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn book_detail(&self, id: &BookId) -> AppResult<Option<BookDetail>> {
        let query = format!(
            r#"
            SELECT {BOOK_COLUMNS}, author."authorName" AS author_name
            FROM book
            JOIN author ON book."authorId" = author."authorId"
            WHERE book.bookid = $1
            "#
        );
        let detail = sqlx::query_as::<_, BookDetail>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(detail)
    }

    async fn insert_book(&self, book: &Book) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO book (
                bookid, title, "authorId", isbn, publisher, "pbYear", "genreId",
                description, "totalCopies", "availableCopies"
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(&book.book_id)
        .bind(&book.title)
        .bind(&book.author_id)
        .bind(&book.isbn)
        .bind(&book.publisher)
        .bind(book.pb_year)
        .bind(&book.genre_id)
        .bind(&book.description)
        .bind(book.total_copies)
        .bind(book.available_copies)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_book(&self, book: &Book) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE book
            SET title = $1, "authorId" = $2, isbn = $3, publisher = $4, "pbYear" = $5,
                "genreId" = $6, description = $7, "totalCopies" = $8, "availableCopies" = $9
            WHERE bookid = $10
            "#,
        )
        .bind(&book.title)
        .bind(&book.author_id)
        .bind(&book.isbn)
        .bind(&book.publisher)
        .bind(book.pb_year)
        .bind(&book.genre_id)
        .bind(&book.description)
        .bind(book.total_copies)
        .bind(book.available_copies)
        .bind(&book.book_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_book(&self, id: &BookId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM book WHERE bookid = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
