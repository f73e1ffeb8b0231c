//! Booking API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::models::{Booking, BookingCreate, BookingUpdate};
use crate::db::repository::BookingRepository;
use crate::utils::validation::{validate_required_text, MAX_SHORT_TEXT_LEN};
use crate::utils::{ok, ok_with_message, AppError, AppResponse, AppResult};

fn validate_create(data: &BookingCreate) -> AppResult<()> {
    validate_required_text(&data.ticket_id, "ticket_id", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&data.movie_id, "movie_id", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&data.user_id, "user_id", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&data.seat, "seat", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}

fn validate_update(data: &BookingUpdate) -> AppResult<()> {
    if let Some(ref ticket_id) = data.ticket_id {
        validate_required_text(ticket_id, "ticket_id", MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(ref seat) = data.seat {
        validate_required_text(seat, "seat", MAX_SHORT_TEXT_LEN)?;
    }
    Ok(())
}

/// GET /api/bookings - 获取所有订票 (最新在前)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<Booking>>>> {
    let bookings = BookingRepository::new(&state.get_db()).find_all().await?;
    Ok(ok(bookings))
}

/// GET /api/bookings/:id - 获取单个订票
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Booking>>> {
    let booking = BookingRepository::new(&state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Booking {} not found", id)))?;
    Ok(ok(booking))
}

/// POST /api/bookings - 创建订票
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<AppResponse<Booking>>> {
    validate_create(&payload)?;
    let booking = BookingRepository::new(&state.get_db())
        .create(payload)
        .await?;
    Ok(ok_with_message(booking, "Booking created successfully"))
}

/// PUT /api/bookings/:id - 更新订票
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BookingUpdate>,
) -> AppResult<Json<AppResponse<Booking>>> {
    validate_update(&payload)?;
    let booking = BookingRepository::new(&state.get_db())
        .update(&id, payload)
        .await?;
    Ok(ok_with_message(booking, "Booking updated successfully"))
}

/// DELETE /api/bookings/:id - 删除订票
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let deleted = BookingRepository::new(&state.get_db()).delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Booking {} not found", id)));
    }
    Ok(ok_with_message((), "Booking deleted successfully"))
}
