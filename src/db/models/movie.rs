//! Movie Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Movie ID type
pub type MovieId = RecordId;

/// 上映状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovieStatus {
    Showing,
    Upcoming,
}

/// Movie model matching the `movie` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<MovieId>,
    /// 展示编号 (M001)，创建时分配，不可变更
    pub display_id: String,
    pub name: String,
    /// 0–10 评分
    pub rate: f32,
    pub status: MovieStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Movie for creation (display_id 由服务器分配)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieCreate {
    pub name: String,
    pub rate: f32,
    pub status: MovieStatus,
    pub image: Option<String>,
    pub description: Option<String>,
}

/// Movie for update (all optional, display_id immutable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MovieStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
