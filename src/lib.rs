//! Book Library - 图书馆图书管理
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book Context: 图书校验、标记清洗、值对象
//!
//! 应用层 (application/):
//! - Ports: BookRepositoryPort
//! - Commands: CreateBook / DeleteBook
//! - Queries: GetBook / ListBooks
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
