//! Inventory Repository

use chrono::Utc;
use rust_decimal::Decimal;

use super::{parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::{InventoryCreate, InventoryItem, InventoryUpdate};
use crate::db::{sequence, DbService};

const TABLE: &str = "inventory";
const PREFIX: char = 'I';

#[derive(Clone)]
pub struct InventoryRepository {
    base: BaseRepository,
}

impl InventoryRepository {
    pub fn new(service: &DbService) -> Self {
        Self {
            base: BaseRepository::new(service),
        }
    }

    /// Find all inventory items ordered by display id
    pub async fn find_all(&self) -> RepoResult<Vec<InventoryItem>> {
        let items: Vec<InventoryItem> = self
            .base
            .db()
            .query("SELECT * FROM inventory ORDER BY display_id")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find inventory item by record id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<InventoryItem>> {
        let thing = parse_record_id(TABLE, id)?;
        let item: Option<InventoryItem> = self.base.db().select(thing).await?;
        Ok(item)
    }

    /// Create an inventory item
    ///
    /// 维护日期必须在未来 (原录入表单规则，移到服务器端)。
    pub async fn create(&self, data: InventoryCreate) -> RepoResult<InventoryItem> {
        if data.cost < Decimal::ZERO {
            return Err(RepoError::Validation(
                "cost must not be negative".to_string(),
            ));
        }
        if data.date <= Utc::now() {
            return Err(RepoError::Validation(
                "date must be in the future".to_string(),
            ));
        }

        let _guard = self.base.sequences().lock(TABLE).await;
        let display_id = sequence::next_id(self.base.db(), TABLE, PREFIX).await?;

        let item = InventoryItem {
            id: None,
            display_id,
            item_name: data.item_name,
            item_type: data.item_type,
            maintenance_id: data.maintenance_id,
            cost: data.cost,
            date: data.date,
            note: data.note,
        };

        let created: Option<InventoryItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create inventory item".to_string()))
    }

    /// Update an inventory item (display_id immutable)
    pub async fn update(&self, id: &str, data: InventoryUpdate) -> RepoResult<InventoryItem> {
        let thing = parse_record_id(TABLE, id)?;
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!(
                "Inventory item {} not found",
                id
            )));
        }

        if let Some(cost) = data.cost {
            if cost < Decimal::ZERO {
                return Err(RepoError::Validation(
                    "cost must not be negative".to_string(),
                ));
            }
        }

        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Inventory item {} not found", id)))
    }

    /// Hard delete an inventory item; false when the record did not exist
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(TABLE, id)?;
        let deleted: Option<InventoryItem> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }
}
