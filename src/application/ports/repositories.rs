//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::book::{BookStatus, NewBook};

/// Repository 错误
///
/// ConstraintViolation 可由调用方修正输入后恢复；
/// Infrastructure 表示存储不可达或内部故障，是否重试由上层决定。
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Book Repository
// ============================================================================

/// 图书实体（持久化后）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub year_published: i64,
    pub book_type: String,
    pub status: BookStatus,
}

/// Book Repository Port
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 在单个事务内写入并提交，返回带存储分配 id 的记录
    ///
    /// 任何失败都会整体回滚，不留下部分写入。
    async fn create(&self, book: &NewBook) -> Result<BookRecord, RepositoryError>;

    /// 批量写入（全部成功或全部回滚）
    async fn create_many(&self, books: &[NewBook]) -> Result<Vec<BookRecord>, RepositoryError>;

    /// 根据 ID 查找图书
    async fn find_by_id(&self, id: i64) -> Result<Option<BookRecord>, RepositoryError>;

    /// 根据名称查找图书
    async fn find_by_name(&self, name: &str) -> Result<Option<BookRecord>, RepositoryError>;

    /// 获取所有图书（按 id 升序）
    async fn find_all(&self) -> Result<Vec<BookRecord>, RepositoryError>;

    /// 图书总数
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// 删除图书，返回是否有记录被删除
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;

    /// 清空所有图书，返回删除的行数
    async fn remove_all(&self) -> Result<u64, RepositoryError>;
}
