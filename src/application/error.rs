//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::book::BookValidationError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound { resource_type: &'static str, id: i64 },

    /// 字段校验失败（在存储交互之前）
    #[error("Validation error: {0}")]
    Validation(#[from] BookValidationError),

    /// 存储层约束冲突（重复名称、非空列等）
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// 存储不可达或内部故障
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: i64) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 调用方修正输入后即可恢复的错误
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::ConstraintViolation(_) | Self::NotFound { .. }
        )
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::ConstraintViolation(msg) => Self::ConstraintViolation(msg),
            RepositoryError::Infrastructure(msg) => Self::Infrastructure(msg),
            RepositoryError::NotFound(_) | RepositoryError::SerializationError(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}
