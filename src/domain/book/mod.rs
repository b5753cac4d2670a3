//! Book Context - 图书限界上下文
//!
//! 职责:
//! - 候选图书的字段校验
//! - 名称/作者的标记清洗
//! - 经过校验的 NewBook（持久化层唯一可接收的输入）

mod errors;
mod sanitizer;
mod validator;
mod value_objects;

pub use errors::BookValidationError;
pub use sanitizer::strip_markup;
pub use validator::{validate, BookCandidate, NewBook};
pub use value_objects::{
    AuthorName, BookName, BookStatus, BookType, YearInput, YearPublished, MAX_NAME_CHARS,
};
