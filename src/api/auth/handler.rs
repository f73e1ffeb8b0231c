//! Authentication Handlers
//!
//! Handles login, logout, and token introspection

use std::time::Duration;

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::utils::{ok, ok_with_message, AppError, AppResponse, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// POST /api/auth/login - 登录
///
/// Authenticates user credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AppResponse<LoginResponse>>> {
    let repo = UserRepository::new(&state.get_db());
    let user = repo.find_by_email(&req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent email enumeration
    let user = match user {
        Some(u) => {
            let password_valid = u
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            u
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let user_id = user.id.as_ref().map(|t| t.to_string()).unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(&user_id, &user.email, &user.name, &user.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(user_id = %user_id, email = %user.email, "User logged in successfully");

    Ok(ok(LoginResponse {
        token,
        user: UserInfo {
            id: user_id,
            name: user.name,
            email: user.email,
            role: user.role,
        },
    }))
}

/// GET /api/auth/me - 当前用户信息
pub async fn me(
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<AppResponse<UserInfo>>> {
    Ok(ok(UserInfo {
        id: user.id,
        name: user.name,
        email: user.email,
        role: user.role,
    }))
}

/// POST /api/auth/logout - 登出
///
/// JWT 无状态，服务器端只记录日志，客户端负责丢弃令牌
pub async fn logout(
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<AppResponse<()>>> {
    tracing::info!(user_id = %user.id, email = %user.email, "User logged out");
    Ok(ok_with_message((), "Logged out successfully"))
}
