//! User API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::models::{User, UserCreate, UserUpdate};
use crate::db::repository::UserRepository;
use crate::utils::validation::{
    validate_email, validate_required_text, MAX_NAME_LEN, MAX_PASSWORD_LEN,
};
use crate::utils::{ok, ok_with_message, AppError, AppResponse, AppResult};

fn validate_role(role: &str) -> AppResult<()> {
    if role != "customer" && role != "admin" {
        return Err(AppError::validation(format!(
            "Unknown role '{}', expected customer or admin",
            role
        )));
    }
    Ok(())
}

fn validate_register(data: &UserCreate) -> AppResult<()> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_email(&data.email)?;
    validate_required_text(&data.password, "password", MAX_PASSWORD_LEN)?;
    if let Some(ref role) = data.role {
        validate_role(role)?;
    }
    Ok(())
}

fn validate_update(data: &UserUpdate) -> AppResult<()> {
    if let Some(ref name) = data.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(ref email) = data.email {
        validate_email(email)?;
    }
    if let Some(ref password) = data.password {
        validate_required_text(password, "password", MAX_PASSWORD_LEN)?;
    }
    if let Some(ref role) = data.role {
        validate_role(role)?;
    }
    Ok(())
}

/// GET /api/users - 获取所有用户 (hash_pass 不序列化)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<User>>>> {
    let users = UserRepository::new(&state.get_db()).find_all().await?;
    Ok(ok(users))
}

/// GET /api/users/:id - 获取单个用户
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<User>>> {
    let user = UserRepository::new(&state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", id)))?;
    Ok(ok(user))
}

/// POST /api/users/register - 注册
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<AppResponse<User>>> {
    validate_register(&payload)?;
    let user = UserRepository::new(&state.get_db()).create(payload).await?;
    Ok(ok_with_message(user, "User registered successfully"))
}

/// PUT /api/users/:id - 更新用户
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<AppResponse<User>>> {
    validate_update(&payload)?;
    let user = UserRepository::new(&state.get_db())
        .update(&id, payload)
        .await?;
    Ok(ok_with_message(user, "User updated successfully"))
}

/// DELETE /api/users/:id - 删除用户
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let deleted = UserRepository::new(&state.get_db()).delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("User {} not found", id)));
    }
    Ok(ok_with_message((), "User deleted successfully"))
}
