//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables. 每个实体一个 repository，
//! 共用 [`BaseRepository`] 持有数据库句柄和编号分配器。

// Catalog
pub mod movie;
pub mod promotion;

// Bookings & payments
pub mod booking;
pub mod payment;

// HR
pub mod employee;
pub mod salary;

// Facilities
pub mod inventory;

// Public site
pub mod feedback;
pub mod user;

// Re-exports
pub use booking::BookingRepository;
pub use employee::EmployeeRepository;
pub use feedback::FeedbackRepository;
pub use inventory::InventoryRepository;
pub use movie::MovieRepository;
pub use payment::PaymentRepository;
pub use promotion::PromotionRepository;
pub use salary::SalaryRepository;
pub use user::UserRepository;

use std::sync::Arc;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

use super::sequence::SequenceAllocator;
use super::DbService;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// 使用 surrealdb::RecordId 处理所有 ID：
//   - 解析: parse_record_id("movie", "movie:abc") / parse_record_id("movie", "abc")
//   - CRUD: db.select(id) / db.delete(id) 直接使用 RecordId
//
// display_id (M001 等) 只是展示用编号，永远不用于寻址。

/// Parse an id path parameter into a [`RecordId`] for `table`.
///
/// 接受完整形式 "movie:abc" 或裸 key "abc"；表名不匹配算验证错误。
pub fn parse_record_id(table: &str, id: &str) -> RepoResult<RecordId> {
    if id.trim().is_empty() {
        return Err(RepoError::Validation("Empty record id".to_string()));
    }
    if let Some((tbl, key)) = id.split_once(':') {
        if tbl != table {
            return Err(RepoError::Validation(format!(
                "Invalid id '{id}': expected table '{table}'"
            )));
        }
        Ok(RecordId::from_table_key(table, key))
    } else {
        Ok(RecordId::from_table_key(table, id))
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
    sequences: Arc<SequenceAllocator>,
}

impl BaseRepository {
    pub fn new(service: &DbService) -> Self {
        Self {
            db: service.db().clone(),
            sequences: service.sequences(),
        }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    pub fn sequences(&self) -> &SequenceAllocator {
        &self.sequences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_bare_and_prefixed_keys() {
        let a = parse_record_id("movie", "abc123").unwrap();
        let b = parse_record_id("movie", "movie:abc123").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.table(), "movie");
    }

    #[test]
    fn parse_rejects_wrong_table_and_empty() {
        assert!(parse_record_id("movie", "booking:abc").is_err());
        assert!(parse_record_id("movie", "").is_err());
        assert!(parse_record_id("movie", "   ").is_err());
    }
}
