//! Loan management service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::loan::Loan,
    repository::LoanStore,
};

#[derive(Clone)]
pub struct LoansService {
    store: Arc<dyn LoanStore>,
}

impl LoansService {
    pub fn new(store: Arc<dyn LoanStore>) -> Self {
        Self { store }
    }

    /// Persist a new loan, rejecting it while the book is already out on an
    /// active loan. `loan_date` is the caller's responsibility.
    pub async fn save(&self, loan: Loan) -> AppResult<Loan> {
        if self.store.exists_active_by_book(loan.book_id).await? {
            return Err(AppError::BusinessRule("Book already loaned".to_string()));
        }
        self.store.insert(&loan).await
    }
}
