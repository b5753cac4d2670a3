//! Book Context - Errors

use thiserror::Error;

/// 字段级校验错误，在任何存储交互之前产生
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookValidationError {
    #[error("字段不能为空: {0}")]
    EmptyField(&'static str),

    #[error("名称过长: {length} 字符（最多 {max}）")]
    NameTooLong { length: usize, max: usize },

    #[error("无效的出版年份: {0}")]
    InvalidYear(String),
}

impl BookValidationError {
    /// 出错的字段名
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyField(field) => field,
            Self::NameTooLong { .. } => "name",
            Self::InvalidYear(_) => "year_published",
        }
    }
}
