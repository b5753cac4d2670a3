//! Book HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{DeleteBook, GetBook, ListBooks};
use crate::infrastructure::http::dto::{
    ApiResponse, BookResponse, CreateBookRequest, DeleteBookRequest, Empty, GetBookRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建图书
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookRequest>,
) -> Result<Json<ApiResponse<BookResponse>>, ApiError> {
    let record = state.create_book_handler.handle(req.into()).await?;
    Ok(Json(ApiResponse::success(record.into())))
}

/// 获取图书详情
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GetBookRequest>,
) -> Result<Json<ApiResponse<BookResponse>>, ApiError> {
    let record = state
        .get_book_handler
        .handle(GetBook { book_id: req.id })
        .await?;
    Ok(Json(ApiResponse::success(record.into())))
}

/// 列出所有图书
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<BookResponse>>>, ApiError> {
    let records = state.list_books_handler.handle(ListBooks).await?;
    Ok(Json(ApiResponse::success(
        records.into_iter().map(BookResponse::from).collect(),
    )))
}

/// 删除图书
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteBookRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    state
        .delete_book_handler
        .handle(DeleteBook { book_id: req.id })
        .await?;
    Ok(Json(ApiResponse::ok()))
}
