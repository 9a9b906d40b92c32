//! Book catalog service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFilter, PageRequest},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// Persist a new book, rejecting a duplicate isbn
    pub async fn save(&self, book: Book) -> AppResult<Book> {
        if self.store.exists_by_isbn(&book.isbn).await? {
            return Err(AppError::BusinessRule("Isbn já cadastrado.".to_string()));
        }
        self.store.insert(&book).await
    }

    /// Lookup by id; absence is a normal outcome, not an error
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        self.store.get_by_id(id).await
    }

    /// Remove a book. The book must carry an id; callers resolve existence
    /// via `get_by_id` first.
    pub async fn delete(&self, book: &Book) -> AppResult<()> {
        let id = book
            .id
            .ok_or_else(|| AppError::InvalidArgument("Book id cant be null".to_string()))?;
        self.store.delete(id).await
    }

    /// Overwrite the stored record for the book's id. Last writer wins.
    pub async fn update(&self, book: &Book) -> AppResult<Book> {
        if book.id.is_none() {
            return Err(AppError::InvalidArgument("Book id cant be null".to_string()));
        }
        self.store.update(book).await
    }

    /// Filtered, paginated search. Returns the requested page window plus the
    /// total count of matches across all pages.
    pub async fn find(
        &self,
        filter: &BookFilter,
        page: &PageRequest,
    ) -> AppResult<(Vec<Book>, i64)> {
        self.store.find(filter, page).await
    }

    /// Exact-match lookup by isbn
    pub async fn get_book_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        self.store.find_by_isbn(isbn).await
    }
}
