//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{BookRecord, CreateBook};
use crate::domain::book::YearInput;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self::success(Empty {})
    }
}

// ============================================================================
// Book DTOs
// ============================================================================

/// 创建图书请求
///
/// 所有字段可缺省，缺省与空值一样交给领域校验器判定。
/// `year_published` 可以是数字或字符串。
#[derive(Debug, Default, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub year_published: Option<Value>,
    #[serde(default)]
    pub book_type: Option<String>,
}

impl From<CreateBookRequest> for CreateBook {
    fn from(req: CreateBookRequest) -> Self {
        Self {
            name: req.name,
            author: req.author,
            year_published: req.year_published.and_then(year_input),
            book_type: req.book_type,
        }
    }
}

fn year_input(value: Value) -> Option<YearInput> {
    match value {
        Value::Null => None,
        Value::Number(n) => Some(
            n.as_i64()
                .map(YearInput::Integer)
                .unwrap_or_else(|| YearInput::Text(n.to_string())),
        ),
        Value::String(s) => Some(YearInput::Text(s)),
        other => Some(YearInput::Text(other.to_string())),
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookRequest {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct DeleteBookRequest {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub year_published: i64,
    pub book_type: String,
    pub status: String,
}

impl From<BookRecord> for BookResponse {
    fn from(record: BookRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            author: record.author,
            year_published: record.year_published,
            book_type: record.book_type,
            status: record.status.as_str().to_string(),
        }
    }
}
