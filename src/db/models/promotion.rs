//! Promotion Model

use super::payment::PaymentMethod;
use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Promotion ID type
pub type PromotionId = RecordId;

/// Promotion model matching the `promotion` table
///
/// Invariant: `valid_from < valid_to`, enforced on create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<PromotionId>,
    /// 展示编号 (P001) — 与 Payment 同字母，但各自独立计数
    pub display_id: String,
    pub title: String,
    pub description: String,
    /// 0–100
    pub discount_percentage: u8,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
    /// 适用的支付方式，非空
    pub payment_methods: Vec<PaymentMethod>,
}

/// Promotion for creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionCreate {
    pub title: String,
    pub description: String,
    pub discount_percentage: u8,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
    /// 缺省为 Credit Card (原 Mongoose schema 默认值)
    pub payment_methods: Option<Vec<PaymentMethod>>,
}

/// Promotion for update (all optional, display_id immutable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<PaymentMethod>>,
}
