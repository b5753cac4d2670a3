//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Book Context: 图书管理（校验、清洗、值对象）

pub mod book;
