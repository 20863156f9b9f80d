//! Data models for the Libra catalog

pub mod author;
pub mod book;
pub mod genre;
pub mod ids;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookDetail, BookListing, CreateBook, UpdateBook};
pub use genre::Genre;
pub use ids::{AuthorId, BookId, GenreId};
