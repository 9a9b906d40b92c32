//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFilter, PageRequest},
};

use super::ApiJson;

/// Create book request. Fields are optional at the deserialization level so
/// that a missing field reports through the validation envelope rather than
/// as a body rejection.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BookRequest {
    #[validate(
        required(message = "title must not be empty"),
        length(min = 1, message = "title must not be empty")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "author must not be empty"),
        length(min = 1, message = "author must not be empty")
    )]
    pub author: Option<String>,
    #[validate(
        required(message = "isbn must not be empty"),
        length(min = 1, message = "isbn must not be empty")
    )]
    pub isbn: Option<String>,
}

/// Update book request. The isbn is not updated through this endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookRequest {
    pub title: String,
    pub author: String,
}

/// Book resource
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl BookResponse {
    fn from_model(book: Book) -> AppResult<Self> {
        let id = book
            .id
            .ok_or_else(|| AppError::Internal("Book id is null".to_string()))?;
        Ok(Self {
            id,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
        })
    }
}

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct BookSearchQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    /// Zero-based page index (default: 0)
    pub page: Option<i64>,
    /// Page size (default: 20)
    pub size: Option<i64>,
}

/// Paginated page envelope
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    /// Books in the requested page window
    pub content: Vec<BookResponse>,
    /// Total number of matches across all pages
    pub total_elements: i64,
    /// The requested window
    pub pageable: Pageable,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub page_number: i64,
    pub page_size: i64,
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Missing field or duplicate isbn", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<BookRequest>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    request.validate().map_err(AppError::from_validation)?;

    let book = Book {
        id: None,
        title: request.title.unwrap_or_default(),
        author: request.author.unwrap_or_default(),
        isbn: request.isbn.unwrap_or_default(),
    };

    let created = state.services.books.save(book).await?;

    Ok((StatusCode::CREATED, Json(BookResponse::from_model(created)?)))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookResponse>> {
    let book = state
        .services
        .books
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

    Ok(Json(BookResponse::from_model(book)?))
}

/// Update a book's title and author
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    ApiJson(request): ApiJson<UpdateBookRequest>,
) -> AppResult<Json<BookResponse>> {
    let mut book = state
        .services
        .books
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

    book.title = request.title;
    book.author = request.author;

    let updated = state.services.books.update(&book).await?;

    Ok(Json(BookResponse::from_model(updated)?))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let book = state
        .services
        .books
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

    state.services.books.delete(&book).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Search books with pagination
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    params(
        ("title" = Option<String>, Query, description = "Substring match on title, case-insensitive"),
        ("author" = Option<String>, Query, description = "Substring match on author, case-insensitive"),
        ("isbn" = Option<String>, Query, description = "Substring match on isbn, case-insensitive"),
        ("page" = Option<i64>, Query, description = "Zero-based page index (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 20)")
    ),
    responses(
        (status = 200, description = "Page of matching books", body = PageResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookSearchQuery>,
) -> AppResult<Json<PageResponse>> {
    let filter = BookFilter {
        title: query.title,
        author: query.author,
        isbn: query.isbn,
    };
    // Degenerate paging inputs are clamped rather than passed to storage:
    // negative page indexes become 0, non-positive sizes fall back to the
    // default.
    let page = PageRequest {
        page: query.page.unwrap_or(0).max(0),
        size: match query.size {
            Some(size) if size >= 1 => size,
            _ => 20,
        },
    };

    let (books, total) = state.services.books.find(&filter, &page).await?;

    let content = books
        .into_iter()
        .map(BookResponse::from_model)
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Json(PageResponse {
        content,
        total_elements: total,
        pageable: Pageable {
            page_number: page.page,
            page_size: page.size,
        },
    }))
}
