//! Promotion Repository

use super::{parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::{PaymentMethod, Promotion, PromotionCreate, PromotionUpdate};
use crate::db::{sequence, DbService};

const TABLE: &str = "promotion";
// 与 Payment 同字母；序列按集合独立，不会互相影响
const PREFIX: char = 'P';

#[derive(Clone)]
pub struct PromotionRepository {
    base: BaseRepository,
}

impl PromotionRepository {
    pub fn new(service: &DbService) -> Self {
        Self {
            base: BaseRepository::new(service),
        }
    }

    /// Find all promotions ordered by validity start
    pub async fn find_all(&self) -> RepoResult<Vec<Promotion>> {
        let promotions: Vec<Promotion> = self
            .base
            .db()
            .query("SELECT * FROM promotion ORDER BY valid_from DESC")
            .await?
            .take(0)?;
        Ok(promotions)
    }

    /// Find promotion by record id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Promotion>> {
        let thing = parse_record_id(TABLE, id)?;
        let promotion: Option<Promotion> = self.base.db().select(thing).await?;
        Ok(promotion)
    }

    /// Create a new promotion
    pub async fn create(&self, data: PromotionCreate) -> RepoResult<Promotion> {
        if data.valid_to <= data.valid_from {
            return Err(RepoError::Validation(
                "validTo must be greater than validFrom".to_string(),
            ));
        }

        // 原 schema 的默认值：未指定时适用 Credit Card
        let payment_methods = match data.payment_methods {
            Some(methods) if !methods.is_empty() => methods,
            Some(_) => {
                return Err(RepoError::Validation(
                    "paymentMethods must not be empty".to_string(),
                ));
            }
            None => vec![PaymentMethod::CreditCard],
        };

        let _guard = self.base.sequences().lock(TABLE).await;
        let display_id = sequence::next_id(self.base.db(), TABLE, PREFIX).await?;

        let promotion = Promotion {
            id: None,
            display_id,
            title: data.title,
            description: data.description,
            discount_percentage: data.discount_percentage,
            valid_from: data.valid_from,
            valid_to: data.valid_to,
            payment_methods,
        };

        let created: Option<Promotion> = self.base.db().create(TABLE).content(promotion).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create promotion".to_string()))
    }

    /// Update a promotion (display_id immutable)
    ///
    /// 日期不变式对合并后的记录生效：只改一端也会校验。
    pub async fn update(&self, id: &str, data: PromotionUpdate) -> RepoResult<Promotion> {
        let thing = parse_record_id(TABLE, id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Promotion {} not found", id)))?;

        let valid_from = data.valid_from.unwrap_or(existing.valid_from);
        let valid_to = data.valid_to.unwrap_or(existing.valid_to);
        if valid_to <= valid_from {
            return Err(RepoError::Validation(
                "validTo must be greater than validFrom".to_string(),
            ));
        }

        if let Some(ref methods) = data.payment_methods {
            if methods.is_empty() {
                return Err(RepoError::Validation(
                    "paymentMethods must not be empty".to_string(),
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
            .ok_or_else(|| RepoError::NotFound(format!("Promotion {} not found", id)))
    }

    /// Hard delete a promotion; false when the record did not exist
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(TABLE, id)?;
        let deleted: Option<Promotion> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }
}
