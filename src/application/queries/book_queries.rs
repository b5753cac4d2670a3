//! Book Queries

/// 获取图书详情查询
#[derive(Debug, Clone)]
pub struct GetBook {
    pub book_id: i64,
}

/// 列出所有图书查询
#[derive(Debug, Clone)]
pub struct ListBooks;
