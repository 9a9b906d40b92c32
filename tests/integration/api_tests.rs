//! API integration tests
//!
//! These run against a live server with a fresh database:
//! cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Create a book and return its JSON representation
async fn create_book(client: &Client, title: &str, author: &str, isbn: &str) -> Value {
    let response = client
        .post(format!("{}/api/books", BASE_URL))
        .json(&json!({
            "title": title,
            "author": author,
            "isbn": isbn
        }))
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
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
async fn test_create_book_assigns_id() {
    let client = Client::new();

    let body = create_book(&client, "As aventuras", "Artur", "001").await;

    assert!(body["id"].is_number());
    assert_eq!(body["title"], "As aventuras");
    assert_eq!(body["author"], "Artur");
    assert_eq!(body["isbn"], "001");
}

#[tokio::test]
#[ignore]
async fn test_create_book_duplicate_isbn() {
    let client = Client::new();

    create_book(&client, "As aventuras", "Artur", "dup-001").await;

    let response = client
        .post(format!("{}/api/books", BASE_URL))
        .json(&json!({
            "title": "Outro livro",
            "author": "Outro autor",
            "isbn": "dup-001"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"], json!(["Isbn já cadastrado."]));
}

#[tokio::test]
#[ignore]
async fn test_create_book_missing_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/api/books", BASE_URL))
        .json(&json!({
            "title": "",
            "author": "",
            "isbn": ""
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"].as_array().expect("errors array").len(), 3);
}

#[tokio::test]
#[ignore]
async fn test_get_book_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/books/999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_update_book_keeps_isbn() {
    let client = Client::new();

    let created = create_book(&client, "Old title", "Old author", "upd-001").await;
    let id = created["id"].as_i64().expect("id");

    let response = client
        .put(format!("{}/api/books/{}", BASE_URL, id))
        .json(&json!({
            "title": "New title",
            "author": "New author"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "New title");
    assert_eq!(body["author"], "New author");
    assert_eq!(body["isbn"], "upd-001");
}

#[tokio::test]
#[ignore]
async fn test_delete_book() {
    let client = Client::new();

    let created = create_book(&client, "To delete", "Someone", "del-001").await;
    let id = created["id"].as_i64().expect("id");

    let response = client
        .delete(format!("{}/api/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/api/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_search_books_case_insensitive() {
    let client = Client::new();

    create_book(&client, "Search Target Alpha", "Search Author", "srch-001").await;

    let response = client
        .get(format!(
            "{}/api/books?title=search target&page=0&size=10",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    let content = body["content"].as_array().expect("content array");
    assert!(!content.is_empty());
    assert_eq!(body["totalElements"].as_i64().expect("total"), content.len() as i64);
    assert_eq!(body["pageable"]["pageNumber"], 0);
    assert_eq!(body["pageable"]["pageSize"], 10);
}

#[tokio::test]
#[ignore]
async fn test_create_loan() {
    let client = Client::new();

    create_book(&client, "Loanable", "Author", "loan-001").await;

    let response = client
        .post(format!("{}/api/loans", BASE_URL))
        .json(&json!({
            "isbn": "loan-001",
            "customer": "Fulano"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_number());
}

#[tokio::test]
#[ignore]
async fn test_create_loan_unknown_isbn() {
    let client = Client::new();

    let response = client
        .post(format!("{}/api/loans", BASE_URL))
        .json(&json!({
            "isbn": "123",
            "customer": "Fulano"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"], json!(["Book not found for passed isbn"]));
}

#[tokio::test]
#[ignore]
async fn test_create_loan_book_already_loaned() {
    let client = Client::new();

    create_book(&client, "Popular", "Author", "loan-002").await;

    let first = client
        .post(format!("{}/api/loans", BASE_URL))
        .json(&json!({
            "isbn": "loan-002",
            "customer": "Fulano"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(first.status(), 201);

    let second = client
        .post(format!("{}/api/loans", BASE_URL))
        .json(&json!({
            "isbn": "loan-002",
            "customer": "Ciclano"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(second.status(), 400);

    let body: Value = second.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"], json!(["Book already loaned"]));
}
