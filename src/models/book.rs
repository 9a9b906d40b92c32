//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book model from database. `id` is `None` until the row is first persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: Option<i32>,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

/// Search filter over books.
///
/// Each populated field constrains the result set with a case-insensitive
/// substring match; empty or absent fields add no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
}

/// Zero-based pagination window over a filtered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    /// Row offset of this window. Saturates instead of overflowing on
    /// degenerate page indexes.
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}
