//! Feedback API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::models::{Feedback, FeedbackCreate};
use crate::db::repository::FeedbackRepository;
use crate::utils::validation::{
    validate_email, validate_required_text, MAX_NAME_LEN, MAX_NOTE_LEN,
};
use crate::utils::{ok, ok_with_message, AppError, AppResponse, AppResult};

/// GET /api/feedback - 获取所有反馈 (最新在前)
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<Feedback>>>> {
    let feedback = FeedbackRepository::new(&state.get_db()).find_all().await?;
    Ok(ok(feedback))
}

/// GET /api/feedback/:id - 获取单条反馈
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Feedback>>> {
    let feedback = FeedbackRepository::new(&state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Feedback {} not found", id)))?;
    Ok(ok(feedback))
}

/// POST /api/feedback - 提交反馈 (公共接口)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FeedbackCreate>,
) -> AppResult<Json<AppResponse<Feedback>>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_email(&payload.email)?;
    validate_required_text(&payload.message, "message", MAX_NOTE_LEN)?;

    let feedback = FeedbackRepository::new(&state.get_db())
        .create(payload)
        .await?;
    Ok(ok_with_message(feedback, "Feedback submitted successfully"))
}

/// DELETE /api/feedback/:id - 删除反馈
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let deleted = FeedbackRepository::new(&state.get_db()).delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Feedback {} not found", id)));
    }
    Ok(ok_with_message((), "Feedback deleted successfully"))
}
