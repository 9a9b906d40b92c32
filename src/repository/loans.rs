//! Loans repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::loan::Loan};

#[cfg(test)]
use mockall::automock;

/// Storage contract for loans.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LoanStore: Send + Sync {
    /// Check whether the given book has any loan with `returned` not true
    async fn exists_active_by_book(&self, book_id: i32) -> AppResult<bool>;

    /// Persist a new loan and return it with its assigned id
    async fn insert(&self, loan: &Loan) -> AppResult<Loan>;
}

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanStore for LoansRepository {
    async fn exists_active_by_book(&self, book_id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM loans WHERE book_id = $1 AND returned IS NOT TRUE)",
        )
        .bind(book_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn insert(&self, loan: &Loan) -> AppResult<Loan> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO loans (customer, book_id, loan_date, returned)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&loan.customer)
        .bind(loan.book_id)
        .bind(loan.loan_date)
        .bind(loan.returned)
        .fetch_one(&self.pool)
        .await?;

        Ok(Loan {
            id: Some(id),
            ..loan.clone()
        })
    }
}
