//! Business logic services

pub mod books;
pub mod loans;

use std::sync::Arc;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub loans: loans::LoansService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(Arc::new(repository.books.clone())),
            loans: loans::LoansService::new(Arc::new(repository.loans)),
        }
    }
}
