//! Feedback Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Feedback ID type
pub type FeedbackId = RecordId;

/// Visitor feedback from the public contact page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<FeedbackId>,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Feedback for creation (created_at 由服务器填充)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackCreate {
    pub name: String,
    pub email: String,
    pub message: String,
}
