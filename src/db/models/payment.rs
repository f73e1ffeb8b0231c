//! Payment Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Payment ID type
pub type PaymentId = RecordId;

/// 支付方式 (与 Promotion 共用同一枚举)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "PayPal")]
    PayPal,
    #[serde(rename = "Net Banking")]
    NetBanking,
    #[serde(rename = "UPI")]
    Upi,
}

/// Payment model matching the `payment` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<PaymentId>,
    /// 展示编号 (P001) — 与 Promotion 同字母，但各自独立计数
    pub display_id: String,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub status: String,
    pub transaction_date: DateTime<Utc>,
}

/// Payment for creation (transaction_date 缺省为当前时间)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreate {
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub status: String,
    pub transaction_date: Option<DateTime<Utc>>,
}

/// Payment for update (all optional, display_id immutable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<DateTime<Utc>>,
}
