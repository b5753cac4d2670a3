//! Book Commands

use crate::domain::book::{BookCandidate, YearInput};

/// 创建图书命令
///
/// 字段保持原始形态，由领域校验器决定接受、清洗或拒绝。
#[derive(Debug, Clone, Default)]
pub struct CreateBook {
    pub name: Option<String>,
    pub author: Option<String>,
    pub year_published: Option<YearInput>,
    pub book_type: Option<String>,
}

impl CreateBook {
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        year_published: impl Into<YearInput>,
        book_type: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            author: Some(author.into()),
            year_published: Some(year_published.into()),
            book_type: Some(book_type.into()),
        }
    }
}

impl From<CreateBook> for BookCandidate {
    fn from(command: CreateBook) -> Self {
        Self {
            name: command.name,
            author: command.author,
            year_published: command.year_published,
            book_type: command.book_type,
        }
    }
}

/// 删除图书命令
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub book_id: i64,
}
