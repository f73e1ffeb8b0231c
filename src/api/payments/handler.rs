//! Payment API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::models::{Payment, PaymentCreate, PaymentUpdate};
use crate::db::repository::PaymentRepository;
use crate::utils::validation::{validate_required_text, MAX_SHORT_TEXT_LEN};
use crate::utils::{ok, ok_with_message, AppError, AppResponse, AppResult};

/// GET /api/payments - 获取所有支付记录 (最新在前)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<Payment>>>> {
    let payments = PaymentRepository::new(&state.get_db()).find_all().await?;
    Ok(ok(payments))
}

/// GET /api/payments/:id - 获取单个支付记录
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Payment>>> {
    let payment = PaymentRepository::new(&state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Payment {} not found", id)))?;
    Ok(ok(payment))
}

/// POST /api/payments - 创建支付记录
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PaymentCreate>,
) -> AppResult<Json<AppResponse<Payment>>> {
    validate_required_text(&payload.status, "status", MAX_SHORT_TEXT_LEN)?;
    let payment = PaymentRepository::new(&state.get_db())
        .create(payload)
        .await?;
    Ok(ok_with_message(payment, "Payment created successfully"))
}

/// PUT /api/payments/:id - 更新支付记录
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PaymentUpdate>,
) -> AppResult<Json<AppResponse<Payment>>> {
    if let Some(ref status) = payload.status {
        validate_required_text(status, "status", MAX_SHORT_TEXT_LEN)?;
    }
    let payment = PaymentRepository::new(&state.get_db())
        .update(&id, payload)
        .await?;
    Ok(ok_with_message(payment, "Payment updated successfully"))
}

/// DELETE /api/payments/:id - 删除支付记录
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let deleted = PaymentRepository::new(&state.get_db()).delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Payment {} not found", id)));
    }
    Ok(ok_with_message((), "Payment deleted successfully"))
}
