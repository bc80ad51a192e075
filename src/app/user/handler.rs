//! 用户处理器

use axum::{
    extract::State,
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    model::{CreateUserRequest, UpdateUserRequest, User},
    service::UserService,
};
use crate::core::{
    error::CoreError,
    extract::{UserId, ValidatedJson},
    response::ApiResponse,
};
use crate::infrastructure::store::UserStore;

pub const MSG_FETCHED: &str = "User Data Successfully Fetched";
pub const MSG_NOT_FOUND: &str = "User Not Found";
pub const MSG_SAVED: &str = "User Saved Successfully";
pub const MSG_UPDATED: &str = "User Updated Successfully";
pub const MSG_DELETED: &str = "User Deleted Successfully";

pub const MSG_FETCH_FAILED: &str = "Failed to get data";
pub const MSG_SAVE_FAILED: &str = "Failed to save data";
pub const MSG_REMOVE_FAILED: &str = "Error in removing specific user";

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            user_service: UserService::new(store),
        }
    }
}

/// GET /api/user
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<User>>, CoreError> {
    let users = state
        .user_service
        .list_users()
        .await
        .map_err(|e| CoreError::store(MSG_FETCH_FAILED, e))?;
    Ok(ApiResponse::ok(MSG_FETCHED, users))
}

/// POST /api/user
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<ApiResponse<()>, CoreError> {
    state
        .user_service
        .create_user(payload)
        .await
        .map_err(|e| CoreError::store(MSG_SAVE_FAILED, e))?;
    Ok(ApiResponse::message(StatusCode::CREATED, MSG_SAVED))
}

/// GET /api/user/:id
///
/// 结果总是数组：找不到时是空数组，不算错误。
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<ApiResponse<Vec<User>>, CoreError> {
    let users = state
        .user_service
        .get_user(&id)
        .await
        .map_err(|e| CoreError::store(MSG_FETCH_FAILED, e))?;

    let message = if users.is_empty() {
        MSG_NOT_FOUND
    } else {
        MSG_FETCHED
    };
    Ok(ApiResponse::ok(message, users))
}

/// PUT /api/user/:id
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> Result<ApiResponse<Option<User>>, CoreError> {
    let user = state
        .user_service
        .update_user(&id, payload)
        .await
        .map_err(|e| CoreError::store(MSG_FETCH_FAILED, e))?;
    Ok(ApiResponse::ok(MSG_UPDATED, user))
}

/// DELETE /api/user/:id
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<ApiResponse<()>, CoreError> {
    state
        .user_service
        .delete_user(&id)
        .await
        .map_err(|e| CoreError::store(MSG_REMOVE_FAILED, e))?;
    Ok(ApiResponse::message(StatusCode::OK, MSG_DELETED))
}
