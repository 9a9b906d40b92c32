//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{Book, BookFilter, PageRequest},
};

#[cfg(test)]
use mockall::automock;

/// Storage contract for books.
///
/// Fronted by a trait so the service layer can be unit-tested against mocks.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Check whether any book with the given isbn is persisted
    async fn exists_by_isbn(&self, isbn: &str) -> AppResult<bool>;

    /// Exact-match lookup by isbn
    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;

    /// Lookup by primary key
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    /// Persist a new book and return it with its assigned id
    async fn insert(&self, book: &Book) -> AppResult<Book>;

    /// Overwrite the stored record matching `book.id`
    async fn update(&self, book: &Book) -> AppResult<Book>;

    /// Remove a book by primary key
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Filtered, paginated search returning the page window plus the total
    /// count of matches across all pages
    async fn find(&self, filter: &BookFilter, page: &PageRequest) -> AppResult<(Vec<Book>, i64)>;
}

/// Build the WHERE conditions for a filtered search.
///
/// Each non-empty filter field yields one case-insensitive containment
/// predicate over the corresponding column; conditions are AND-combined by
/// the caller. Bind values are returned in positional order, already wrapped
/// in `%` wildcards.
fn build_filter_conditions(filter: &BookFilter) -> (Vec<String>, Vec<String>) {
    let fields = [
        ("title", &filter.title),
        ("author", &filter.author),
        ("isbn", &filter.isbn),
    ];

    let mut conditions = Vec::new();
    let mut binds = Vec::new();

    for (column, value) in fields {
        if let Some(value) = value {
            if !value.is_empty() {
                binds.push(format!("%{}%", value));
                conditions.push(format!("{} ILIKE ${}", column, binds.len()));
            }
        }
    }

    (conditions, binds)
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn exists_by_isbn(&self, isbn: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1)")
                .bind(isbn)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, isbn FROM books WHERE isbn = $1",
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, isbn FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    async fn insert(&self, book: &Book) -> AppResult<Book> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (title, author, isbn)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .fetch_one(&self.pool)
        .await?;

        Ok(Book {
            id: Some(id),
            ..book.clone()
        })
    }

    async fn update(&self, book: &Book) -> AppResult<Book> {
        sqlx::query("UPDATE books SET title = $1, author = $2, isbn = $3 WHERE id = $4")
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.isbn)
            .bind(book.id)
            .execute(&self.pool)
            .await?;

        Ok(book.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find(&self, filter: &BookFilter, page: &PageRequest) -> AppResult<(Vec<Book>, i64)> {
        let (conditions, binds) = build_filter_conditions(filter);

        let where_clause = if conditions.is_empty() {
            "1=1".to_string()
        } else {
            conditions.join(" AND ")
        };

        let count_query = format!("SELECT COUNT(*) FROM books WHERE {}", where_clause);
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);
        for bind in &binds {
            count = count.bind(bind);
        }
        let total = count.fetch_one(&self.pool).await?;

        let select_query = format!(
            "SELECT id, title, author, isbn FROM books WHERE {} ORDER BY id LIMIT {} OFFSET {}",
            where_clause,
            page.size,
            page.offset()
        );
        let mut select = sqlx::query_as::<_, Book>(&select_query);
        for bind in &binds {
            select = select.bind(bind);
        }
        let books = select.fetch_all(&self.pool).await?;

        Ok((books, total))
    }
}
