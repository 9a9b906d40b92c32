//! Libris Book Catalog and Loan Management System
//!
//! A REST JSON API for managing a book catalog and issuing loans against it.
//! Two business rules are enforced: a book's isbn is unique, and a book may
//! carry at most one active (non-returned) loan.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
