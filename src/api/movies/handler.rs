//! Movie API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::models::{Movie, MovieCreate, MovieUpdate};
use crate::db::repository::MovieRepository;
use crate::utils::validation::{
    validate_optional_text, validate_rate, validate_required_text, MAX_NAME_LEN, MAX_NOTE_LEN,
    MAX_URL_LEN,
};
use crate::utils::{ok, ok_with_message, AppError, AppResponse, AppResult};

fn validate_create(data: &MovieCreate) -> AppResult<()> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_rate(data.rate)?;
    validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
    validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
    Ok(())
}

fn validate_update(data: &MovieUpdate) -> AppResult<()> {
    if let Some(ref name) = data.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(rate) = data.rate {
        validate_rate(rate)?;
    }
    validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
    validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
    Ok(())
}

/// GET /api/movies - 获取所有电影
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<Movie>>>> {
    let movies = MovieRepository::new(&state.get_db()).find_all().await?;
    Ok(ok(movies))
}

/// GET /api/movies/:id - 获取单个电影
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Movie>>> {
    let movie = MovieRepository::new(&state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Movie {} not found", id)))?;
    Ok(ok(movie))
}

/// POST /api/movies - 创建电影
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MovieCreate>,
) -> AppResult<Json<AppResponse<Movie>>> {
    validate_create(&payload)?;
    let movie = MovieRepository::new(&state.get_db()).create(payload).await?;
    Ok(ok_with_message(movie, "Movie created successfully"))
}

/// PUT /api/movies/:id - 更新电影
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MovieUpdate>,
) -> AppResult<Json<AppResponse<Movie>>> {
    validate_update(&payload)?;
    let movie = MovieRepository::new(&state.get_db())
        .update(&id, payload)
        .await?;
    Ok(ok_with_message(movie, "Movie updated successfully"))
}

/// DELETE /api/movies/:id - 删除电影
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let deleted = MovieRepository::new(&state.get_db()).delete(&id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Movie {} not found", id)));
    }
    Ok(ok_with_message((), "Movie deleted successfully"))
}
