//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping          GET   健康检查
//! - /api/book/create   POST  创建图书
//! - /api/book/get      POST  获取图书详情
//! - /api/book/list     GET   列出所有图书
//! - /api/book/delete   POST  删除图书

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/book", book_routes())
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(handlers::create_book))
        .route("/get", post(handlers::get_book))
        .route("/list", get(handlers::list_books))
        .route("/delete", post(handlers::delete_book))
}
