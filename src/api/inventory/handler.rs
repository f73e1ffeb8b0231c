//! Inventory API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::models::{InventoryCreate, InventoryItem, InventoryUpdate};
use crate::db::repository::InventoryRepository;
use crate::utils::validation::{
    validate_optional_text, validate_required_text, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN,
};
use crate::utils::{ok, ok_with_message, AppError, AppResponse, AppResult};

fn validate_create(data: &InventoryCreate) -> AppResult<()> {
    validate_required_text(&data.item_name, "item_name", MAX_NAME_LEN)?;
    validate_required_text(&data.item_type, "type", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&data.maintenance_id, "maintenance_id", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&data.note, "note", MAX_NOTE_LEN)?;
    Ok(())
}

fn validate_update(data: &InventoryUpdate) -> AppResult<()> {
    if let Some(ref item_name) = data.item_name {
        validate_required_text(item_name, "item_name", MAX_NAME_LEN)?;
    }
    if let Some(ref item_type) = data.item_type {
        validate_required_text(item_type, "type", MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(ref maintenance_id) = data.maintenance_id {
        validate_required_text(maintenance_id, "maintenance_id", MAX_SHORT_TEXT_LEN)?;
    }
    validate_optional_text(&data.note, "note", MAX_NOTE_LEN)?;
    Ok(())
}

/// GET /api/inventory - 获取所有维护条目
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<InventoryItem>>>> {
    let items = InventoryRepository::new(&state.get_db()).find_all().await?;
    Ok(ok(items))
}

/// GET /api/inventory/:id - 获取单个维护条目
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<InventoryItem>>> {
    let item = InventoryRepository::new(&state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Inventory item {} not found", id)))?;
    Ok(ok(item))
}

/// POST /api/inventory - 创建维护条目
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InventoryCreate>,
) -> AppResult<Json<AppResponse<InventoryItem>>> {
    validate_create(&payload)?;
    let item = InventoryRepository::new(&state.get_db())
        .create(payload)
        .await?;
    Ok(ok_with_message(item, "Inventory item created successfully"))
}

/// PUT /api/inventory/:id - 更新维护条目
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InventoryUpdate>,
) -> AppResult<Json<AppResponse<InventoryItem>>> {
    validate_update(&payload)?;
    let item = InventoryRepository::new(&state.get_db())
        .update(&id, payload)
        .await?;
    Ok(ok_with_message(item, "Inventory item updated successfully"))
}

/// DELETE /api/inventory/:id - 删除维护条目
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let deleted = InventoryRepository::new(&state.get_db()).delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found(format!(
            "Inventory item {} not found",
            id
        )));
    }
    Ok(ok_with_message((), "Inventory item deleted successfully"))
}
