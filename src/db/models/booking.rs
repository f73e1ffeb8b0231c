//! Booking Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Booking ID type
pub type BookingId = RecordId;

/// Booking model matching the `booking` table
///
/// movie_id / user_id / show_time_id 沿用原系统的自由字符串引用，
/// seat 也是自由文本 — 没有座位唯一性或冲突检测。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<BookingId>,
    /// 展示编号 (B001)
    pub display_id: String,
    pub ticket_id: String,
    pub count: u32,
    pub movie_id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_time_id: Option<String>,
    pub date: DateTime<Utc>,
    pub seat: String,
}

/// Booking for creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub ticket_id: String,
    pub count: u32,
    pub movie_id: String,
    pub user_id: String,
    pub show_time_id: Option<String>,
    pub date: DateTime<Utc>,
    pub seat: String,
}

/// Booking for update (all optional, display_id immutable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_time_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,
}
