//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, references};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libra API",
        version = "0.1.0",
        description = "Library book catalog REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::refresh_snapshot,
        // References
        references::list_authors,
        references::list_genres,
    ),
    components(
        schemas(
            crate::models::ids::BookId,
            crate::models::ids::AuthorId,
            crate::models::ids::GenreId,
            crate::models::book::Book,
            crate::models::book::BookDetail,
            crate::models::book::BookListing,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::services::snapshot::SnapshotInfo,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "references", description = "Author and genre names")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
