//! Loan management endpoints

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::loan::Loan,
};

use super::ApiJson;

/// Create loan request. Fields are optional at the deserialization level so
/// that a missing field reports through the validation envelope rather than
/// as a body rejection.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoanRequest {
    /// Isbn of the book to loan out
    #[validate(
        required(message = "isbn must not be empty"),
        length(min = 1, message = "isbn must not be empty")
    )]
    pub isbn: Option<String>,
    /// Borrower name
    #[validate(
        required(message = "customer must not be empty"),
        length(min = 1, message = "customer must not be empty")
    )]
    pub customer: Option<String>,
}

/// Create a new loan
#[utoipa::path(
    post,
    path = "/api/loans",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 201, description = "Loan created, returns its numeric id", body = i32),
        (status = 400, description = "Unknown isbn or book already loaned", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<LoanRequest>,
) -> AppResult<(StatusCode, Json<i32>)> {
    request.validate().map_err(AppError::from_validation)?;

    let isbn = request.isbn.unwrap_or_default();
    let book = state
        .services
        .books
        .get_book_by_isbn(&isbn)
        .await?
        .ok_or_else(|| AppError::BadRequest("Book not found for passed isbn".to_string()))?;

    let book_id = book
        .id
        .ok_or_else(|| AppError::Internal("Book id is null".to_string()))?;

    let loan = Loan {
        id: None,
        customer: request.customer.unwrap_or_default(),
        book_id,
        loan_date: Utc::now().date_naive(),
        returned: None,
    };

    let created = state.services.loans.save(loan).await?;

    let id = created
        .id
        .ok_or_else(|| AppError::Internal("Loan id is null".to_string()))?;

    Ok((StatusCode::CREATED, Json(id)))
}
