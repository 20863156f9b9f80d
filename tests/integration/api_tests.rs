//! API integration tests against a running server
//!
//! Expects the server on localhost:3000 with the author "Rowling" and the
//! genre "Fantasy" present in the database.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000/api/v1";

fn book_payload(book_id: &str, author: &str) -> Value {
    json!({
        "bookId": book_id,
        "title": "Integration Test Book",
        "author": author,
        "isbn": "978-0-00-000000-0",
        "publisher": "Test Press",
        "pbYear": 2000,
        "genre": "Fantasy",
        "description": "Created by the integration tests",
        "totalCopies": 5,
        "availableCopies": 5
    })
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_list_authors_and_genres() {
    let client = Client::new();

    let authors: Value = client
        .get(format!("{}/authors", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert!(authors.as_array().expect("authors is not an array").contains(&json!("Rowling")));

    let genres: Value = client
        .get(format!("{}/genres", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert!(genres.as_array().expect("genres is not an array").contains(&json!("Fantasy")));
}

#[tokio::test]
#[ignore]
async fn test_add_get_and_remove_book() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book_payload("IT-1", "Rowling"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/books/IT-1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["authorName"], "Rowling");
    assert_eq!(body["totalCopies"], 5);

    // Adding the same id again must not overwrite
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book_payload("IT-1", "Rowling"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);

    let response = client
        .delete(format!("{}/books/IT-1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/books/IT-1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_add_book_unknown_author() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book_payload("IT-2", "Unknown Author"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);

    let response = client
        .get(format!("{}/books/IT-2", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
