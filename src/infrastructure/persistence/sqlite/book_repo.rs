//! SQLite Book Repository

use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::{FromRow, SqliteConnection};

use super::DbPool;
use crate::application::ports::{BookRecord, BookRepositoryPort, RepositoryError};
use crate::domain::book::{BookStatus, NewBook};

const SELECT_COLUMNS: &str = "id, name, author, year_published, book_type, status";

/// SQLite Book Repository
pub struct SqliteBookRepository {
    pool: DbPool,
}

impl SqliteBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BookRow {
    id: i64,
    name: String,
    author: String,
    year_published: i64,
    book_type: String,
    status: String,
}

impl TryFrom<BookRow> for BookRecord {
    type Error = RepositoryError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let status = BookStatus::from_str(&row.status).ok_or_else(|| {
            RepositoryError::SerializationError(format!("unknown book status: {}", row.status))
        })?;

        Ok(BookRecord {
            id: row.id,
            name: row.name,
            author: row.author,
            year_published: row.year_published,
            book_type: row.book_type,
            status,
        })
    }
}

/// 把驱动错误归类为约束冲突 / 基础设施故障 / 数据解码错误
pub(crate) fn classify_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation
            | ErrorKind::ForeignKeyViolation => {
                RepositoryError::ConstraintViolation(db_err.message().to_string())
            }
            _ => RepositoryError::Infrastructure(err.to_string()),
        },
        sqlx::Error::RowNotFound => RepositoryError::NotFound(err.to_string()),
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::TypeNotFound { .. } => RepositoryError::SerializationError(err.to_string()),
        _ => RepositoryError::Infrastructure(err.to_string()),
    }
}

/// 参数化插入；status 由列默认值赋予，再经 RETURNING 读回
async fn insert_book(
    conn: &mut SqliteConnection,
    book: &NewBook,
) -> Result<BookRecord, RepositoryError> {
    let row: BookRow = sqlx::query_as(
        r#"
        INSERT INTO books (name, author, year_published, book_type)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, author, year_published, book_type, status
        "#,
    )
    .bind(book.name().as_str())
    .bind(book.author().as_str())
    .bind(book.year_published().value())
    .bind(book.book_type().as_str())
    .fetch_one(&mut *conn)
    .await
    .map_err(classify_sqlx_error)?;

    BookRecord::try_from(row)
}

#[async_trait]
impl BookRepositoryPort for SqliteBookRepository {
    async fn create(&self, book: &NewBook) -> Result<BookRecord, RepositoryError> {
        self.create_many(std::slice::from_ref(book))
            .await?
            .pop()
            .ok_or_else(|| RepositoryError::NotFound("inserted book".to_string()))
    }

    async fn create_many(&self, books: &[NewBook]) -> Result<Vec<BookRecord>, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(classify_sqlx_error)?;

        let mut records = Vec::with_capacity(books.len());
        for book in books {
            match insert_book(&mut tx, book).await {
                Ok(record) => records.push(record),
                Err(e) => {
                    if let Err(rollback_err) = tx.rollback().await {
                        tracing::warn!(error = %rollback_err, "Rollback failed");
                    }
                    tracing::debug!(name = %book.name(), error = %e, "Book insert rolled back");
                    return Err(e);
                }
            }
        }

        tx.commit().await.map_err(classify_sqlx_error)?;

        tracing::debug!(count = records.len(), "Books committed");
        Ok(records)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BookRecord>, RepositoryError> {
        let row: Option<BookRow> =
            sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM books WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(classify_sqlx_error)?;

        row.map(BookRecord::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<BookRecord>, RepositoryError> {
        let row: Option<BookRow> =
            sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM books WHERE name = ?"))
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(classify_sqlx_error)?;

        row.map(BookRecord::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<BookRecord>, RepositoryError> {
        let rows: Vec<BookRow> =
            sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM books ORDER BY id"))
                .fetch_all(&self.pool)
                .await
                .map_err(classify_sqlx_error)?;

        rows.into_iter().map(BookRecord::try_from).collect()
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;

        Ok(count as u64)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM books")
            .execute(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;

        tracing::debug!(removed = result.rows_affected(), "All books removed");
        Ok(result.rows_affected())
    }
}
