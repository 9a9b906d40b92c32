//! Loan (borrow) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Loan model from database.
///
/// A loan is "active" while `returned` is not true; a book may carry at most
/// one active loan at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: Option<i32>,
    pub customer: String,
    pub book_id: i32,
    pub loan_date: NaiveDate,
    pub returned: Option<bool>,
}
