//! Book model and request payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::ids::{AuthorId, BookId, GenreId};

/// Book row with resolved author and genre identifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub book_id: BookId,
    pub title: String,
    pub author_id: AuthorId,
    pub isbn: String,
    pub publisher: String,
    /// Publication year
    pub pb_year: i32,
    pub genre_id: GenreId,
    pub description: String,
    pub total_copies: i32,
    /// Expected to stay within `total_copies`; not enforced
    pub available_copies: i32,
}

/// Book joined with its author's display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDetail {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub book: Book,
    pub author_name: String,
}

/// One row of the catalog listing (book joined with author and genre names)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookListing {
    pub book_id: BookId,
    pub title: String,
    /// Author display name
    pub author: String,
    pub isbn: String,
    pub publisher: String,
    pub pb_year: i32,
    /// Genre display name
    pub genre: String,
    pub description: String,
    pub total_copies: i32,
    pub available_copies: i32,
}

/// Add book request. Author and genre are given by display name.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(length(min = 1, message = "bookId must not be empty"))]
    pub book_id: String,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publisher: String,
    pub pb_year: i32,
    pub genre: String,
    pub description: String,
    #[validate(range(min = 0, message = "totalCopies must not be negative"))]
    pub total_copies: i32,
    #[validate(range(min = 0, message = "availableCopies must not be negative"))]
    pub available_copies: i32,
}

/// Edit book request. Every field is written; there is no partial update.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publisher: String,
    pub pb_year: i32,
    pub genre: String,
    pub description: String,
    #[validate(range(min = 0, message = "totalCopies must not be negative"))]
    pub total_copies: i32,
    #[validate(range(min = 0, message = "availableCopies must not be negative"))]
    pub available_copies: i32,
}

impl CreateBook {
    /// Build the row to insert once both names have been resolved
    pub fn into_book(self, author_id: AuthorId, genre_id: GenreId) -> Book {
        Book {
            book_id: BookId(self.book_id),
            title: self.title,
            author_id,
            isbn: self.isbn,
            publisher: self.publisher,
            pb_year: self.pb_year,
            genre_id,
            description: self.description,
            total_copies: self.total_copies,
            available_copies: self.available_copies,
        }
    }
}

impl UpdateBook {
    pub fn into_book(self, book_id: BookId, author_id: AuthorId, genre_id: GenreId) -> Book {
        Book {
            book_id,
            title: self.title,
            author_id,
            isbn: self.isbn,
            publisher: self.publisher,
            pb_year: self.pb_year,
            genre_id,
            description: self.description,
            total_copies: self.total_copies,
            available_copies: self.available_copies,
        }
    }
}
