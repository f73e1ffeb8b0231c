//! Payment Repository

use chrono::Utc;
use rust_decimal::Decimal;

use super::{parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::{Payment, PaymentCreate, PaymentUpdate};
use crate::db::{sequence, DbService};

const TABLE: &str = "payment";
const PREFIX: char = 'P';

#[derive(Clone)]
pub struct PaymentRepository {
    base: BaseRepository,
}

impl PaymentRepository {
    pub fn new(service: &DbService) -> Self {
        Self {
            base: BaseRepository::new(service),
        }
    }

    /// Find all payments, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Payment>> {
        let payments: Vec<Payment> = self
            .base
            .db()
            .query("SELECT * FROM payment ORDER BY transaction_date DESC")
            .await?
            .take(0)?;
        Ok(payments)
    }

    /// Find payment by record id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Payment>> {
        let thing = parse_record_id(TABLE, id)?;
        let payment: Option<Payment> = self.base.db().select(thing).await?;
        Ok(payment)
    }

    /// Create a new payment (transaction_date 缺省为当前时间)
    pub async fn create(&self, data: PaymentCreate) -> RepoResult<Payment> {
        if data.amount <= Decimal::ZERO {
            return Err(RepoError::Validation(
                "Payment amount must be positive".to_string(),
            ));
        }

        let _guard = self.base.sequences().lock(TABLE).await;
        let display_id = sequence::next_id(self.base.db(), TABLE, PREFIX).await?;

        let payment = Payment {
            id: None,
            display_id,
            amount: data.amount,
            method: data.method,
            status: data.status,
            transaction_date: data.transaction_date.unwrap_or_else(Utc::now),
        };

        let created: Option<Payment> = self.base.db().create(TABLE).content(payment).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create payment".to_string()))
    }

    /// Update a payment (display_id immutable)
    pub async fn update(&self, id: &str, data: PaymentUpdate) -> RepoResult<Payment> {
        if let Some(amount) = data.amount {
            if amount <= Decimal::ZERO {
                return Err(RepoError::Validation(
                    "Payment amount must be positive".to_string(),
                ));
            }
        }

        let thing = parse_record_id(TABLE, id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Payment {} not found", id)))?;

        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Payment {} not found", id)))
    }

    /// Hard delete a payment; false when the record did not exist
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(TABLE, id)?;
        let deleted: Option<Payment> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }
}
