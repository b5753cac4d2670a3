//! Book Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateBook, DeleteBook};
use crate::application::error::ApplicationError;
use crate::application::ports::{BookRecord, BookRepositoryPort};
use crate::domain::book::{validate, BookCandidate};

// ============================================================================
// CreateBook
// ============================================================================

/// CreateBook Handler
///
/// 两阶段：先做纯校验，通过后再交给仓储在事务内提交。
/// 校验失败时不会触碰存储。
pub struct CreateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl CreateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: CreateBook) -> Result<BookRecord, ApplicationError> {
        let candidate = BookCandidate::from(command);

        let book = validate(&candidate).map_err(|e| {
            tracing::debug!(field = e.field(), error = %e, "Book rejected by validator");
            e
        })?;

        let record = self.book_repo.create(&book).await.map_err(|e| {
            tracing::warn!(name = %book.name(), error = %e, "Book commit failed");
            ApplicationError::from(e)
        })?;

        tracing::info!(
            book_id = record.id,
            name = %record.name,
            "Book created"
        );

        Ok(record)
    }
}

// ============================================================================
// DeleteBook
// ============================================================================

/// DeleteBook Handler
pub struct DeleteBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl DeleteBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: DeleteBook) -> Result<(), ApplicationError> {
        let book_id = command.book_id;

        // 检查图书是否存在
        let book = self
            .book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", book_id))?;

        self.book_repo.delete(book_id).await?;

        tracing::info!(
            book_id = book_id,
            name = %book.name,
            "Book deleted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::{BookStatus, BookValidationError};
    use crate::infrastructure::persistence::sqlite::{test_pool, SqliteBookRepository};

    async fn setup() -> (CreateBookHandler, Arc<SqliteBookRepository>) {
        let repo = Arc::new(SqliteBookRepository::new(test_pool().await));
        (CreateBookHandler::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_valid_book_creation() {
        let (handler, _repo) = setup().await;

        let book = handler
            .handle(CreateBook::new("Valid Book", "Valid Author", 2020, "Fiction"))
            .await
            .unwrap();

        assert!(book.id > 0);
        assert_eq!(book.name, "Valid Book");
        assert_eq!(book.author, "Valid Author");
        assert_eq!(book.year_published, 2020);
        assert_eq!(book.book_type, "Fiction");
        assert_eq!(book.status, BookStatus::Available);
    }

    #[tokio::test]
    async fn test_invalid_book_creation_persists_nothing() {
        let (handler, repo) = setup().await;

        let err = handler
            .handle(CreateBook::new("", "", "invalid_year", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Validation(_)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_each_empty_field_is_rejected() {
        let (handler, repo) = setup().await;

        for (command, field) in [
            (CreateBook::new("", "Author", 2020, "Fiction"), "name"),
            (CreateBook::new("Book", "", 2020, "Fiction"), "author"),
            (CreateBook::new("Book", "Author", 2020, ""), "book_type"),
        ] {
            let err = handler.handle(command).await.unwrap_err();
            assert!(
                matches!(err, ApplicationError::Validation(BookValidationError::EmptyField(f)) if f == field)
            );
        }
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_sql_injection_is_stored_as_literal_text() {
        let (handler, repo) = setup().await;
        let name = "Robert'); DROP TABLE books;--";

        let book = handler
            .handle(CreateBook::new(name, "Hacker", 2020, "Non-Fiction"))
            .await
            .unwrap();

        assert!(book.id > 0);
        assert_eq!(book.name, name);

        // books 表仍然存在且可查询
        assert_eq!(repo.count().await.unwrap(), 1);
        let found = repo.find_by_name(name).await.unwrap().unwrap();
        assert_eq!(found.id, book.id);
    }

    #[tokio::test]
    async fn test_javascript_injection_is_stripped() {
        let (handler, repo) = setup().await;

        let book = handler
            .handle(CreateBook::new(
                "<script>alert('Hacked');</script>",
                "Hacker",
                2020,
                "Non-Fiction",
            ))
            .await
            .unwrap();

        assert!(book.id > 0);
        assert!(!book.name.contains("<script>"));

        let stored = repo.find_by_id(book.id).await.unwrap().unwrap();
        assert!(!stored.name.contains("<script>"));
    }

    #[tokio::test]
    async fn test_extreme_year_published() {
        let (handler, repo) = setup().await;

        let ancient = handler
            .handle(CreateBook::new("Ancient Book", "Old Author", -1000, "History"))
            .await
            .unwrap();
        assert_eq!(ancient.year_published, -1000);

        let future = handler
            .handle(CreateBook::new("Future Book", "Future Author", 3000, "Sci-Fi"))
            .await
            .unwrap();
        assert_eq!(future.year_published, 3000);

        let stored = repo.find_by_id(ancient.id).await.unwrap().unwrap();
        assert_eq!(stored.year_published, -1000);
    }

    #[tokio::test]
    async fn test_name_too_long() {
        let (handler, repo) = setup().await;

        let err = handler
            .handle(CreateBook::new("A".repeat(65), "Author", 2020, "Fiction"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Validation(BookValidationError::NameTooLong { length: 65, .. })
        ));

        let book = handler
            .handle(CreateBook::new("A".repeat(64), "Author", 2020, "Fiction"))
            .await
            .unwrap();
        assert_eq!(book.name.len(), 64);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_book_name() {
        let (handler, repo) = setup().await;

        handler
            .handle(CreateBook::new("Unique Book", "Author1", 2020, "Fiction"))
            .await
            .unwrap();

        let err = handler
            .handle(CreateBook::new("Unique Book", "Author2", 2021, "Non-Fiction"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ConstraintViolation(_)));
        assert!(err.is_recoverable());

        let books = repo.find_all().await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].author, "Author1");
    }

    #[tokio::test]
    async fn test_concurrent_duplicates_yield_one_success() {
        let (handler, repo) = setup().await;

        let (a, b) = tokio::join!(
            handler.handle(CreateBook::new("Race", "A", 2001, "Fiction")),
            handler.handle(CreateBook::new("Race", "B", 2002, "Fiction")),
        );

        assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
        let failure = a.err().or(b.err()).unwrap();
        assert!(matches!(failure, ApplicationError::ConstraintViolation(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_non_integer_year_published() {
        let (handler, repo) = setup().await;

        let err = handler
            .handle(CreateBook::new(
                "Book with Invalid Year",
                "Author",
                "Two Thousand Twenty",
                "Fiction",
            ))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Validation(BookValidationError::InvalidYear(_))
        ));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_closed_store_is_infrastructure_error() {
        let pool = test_pool().await;
        let handler = CreateBookHandler::new(Arc::new(SqliteBookRepository::new(pool.clone())));
        pool.close().await;

        let err = handler
            .handle(CreateBook::new("Offline", "Author", 2020, "Fiction"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Infrastructure(_)));
        assert!(!err.is_recoverable());
    }

    #[tokio::test]
    async fn test_delete_book() {
        let (handler, repo) = setup().await;
        let delete = DeleteBookHandler::new(repo.clone());

        let book = handler
            .handle(CreateBook::new("Short Lived", "Author", 2020, "Fiction"))
            .await
            .unwrap();

        delete.handle(DeleteBook { book_id: book.id }).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);

        let err = delete
            .handle(DeleteBook { book_id: book.id })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }
}
