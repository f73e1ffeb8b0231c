//! Promotion API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::models::{Promotion, PromotionCreate, PromotionUpdate};
use crate::db::repository::PromotionRepository;
use crate::utils::validation::{
    validate_percentage, validate_required_text, MAX_NAME_LEN, MAX_NOTE_LEN,
};
use crate::utils::{ok, ok_with_message, AppError, AppResponse, AppResult};

fn validate_create(data: &PromotionCreate) -> AppResult<()> {
    validate_required_text(&data.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&data.description, "description", MAX_NOTE_LEN)?;
    validate_percentage(data.discount_percentage)?;
    Ok(())
}

fn validate_update(data: &PromotionUpdate) -> AppResult<()> {
    if let Some(ref title) = data.title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }
    if let Some(ref description) = data.description {
        validate_required_text(description, "description", MAX_NOTE_LEN)?;
    }
    if let Some(pct) = data.discount_percentage {
        validate_percentage(pct)?;
    }
    Ok(())
}

/// GET /api/promotions - 获取所有促销活动
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<Promotion>>>> {
    let promotions = PromotionRepository::new(&state.get_db()).find_all().await?;
    Ok(ok(promotions))
}

/// GET /api/promotions/:id - 获取单个促销活动
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Promotion>>> {
    let promotion = PromotionRepository::new(&state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Promotion {} not found", id)))?;
    Ok(ok(promotion))
}

/// POST /api/promotions - 创建促销活动
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PromotionCreate>,
) -> AppResult<Json<AppResponse<Promotion>>> {
    validate_create(&payload)?;
    let promotion = PromotionRepository::new(&state.get_db())
        .create(payload)
        .await?;
    Ok(ok_with_message(promotion, "Promotion created successfully"))
}

/// PUT /api/promotions/:id - 更新促销活动
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PromotionUpdate>,
) -> AppResult<Json<AppResponse<Promotion>>> {
    validate_update(&payload)?;
    let promotion = PromotionRepository::new(&state.get_db())
        .update(&id, payload)
        .await?;
    Ok(ok_with_message(promotion, "Promotion updated successfully"))
}

/// DELETE /api/promotions/:id - 删除促销活动
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let deleted = PromotionRepository::new(&state.get_db()).delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Promotion {} not found", id)));
    }
    Ok(ok_with_message((), "Promotion deleted successfully"))
}
