//! Inventory Model
//!
//! 影院设施的维护条目 (原系统后台的 Inventory / Maintenance 板块)。

use super::serde_helpers;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Inventory ID type
pub type InventoryId = RecordId;

/// Maintenance inventory item matching the `inventory` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<InventoryId>,
    /// 展示编号 (I001)，即原系统的 InvID
    pub display_id: String,
    pub item_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub maintenance_id: String,
    pub cost: Decimal,
    /// 计划维护日期，创建时必须在未来
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Inventory item for creation (display_id 由服务器分配)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryCreate {
    pub item_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub maintenance_id: String,
    pub cost: Decimal,
    pub date: DateTime<Utc>,
    pub note: Option<String>,
}

/// Inventory item for update (all optional, display_id immutable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
