//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) plus the startup schema definition.

pub mod models;
pub mod repository;
pub mod sequence;

use std::path::Path;
use std::sync::Arc;

use surrealdb::engine::local::{Db, RocksDb};
use surrealdb::Surreal;

use crate::utils::AppError;
use sequence::SequenceAllocator;

const NAMESPACE: &str = "skylight";
const DATABASE: &str = "cinema";

/// Database service — owns the embedded SurrealDB handle and the per-table
/// display-ID allocation locks. Cloning is cheap (Arc inside).
#[derive(Clone, Debug)]
pub struct DbService {
    db: Surreal<Db>,
    sequences: Arc<SequenceAllocator>,
}

impl DbService {
    /// Open (or create) the database under `path` and apply the schema.
    pub async fn new(path: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        define_schema(&db)
            .await
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

        tracing::info!(path = %path.display(), "Database ready (embedded SurrealDB)");

        Ok(Self {
            db,
            sequences: Arc::new(SequenceAllocator::new()),
        })
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    pub fn sequences(&self) -> Arc<SequenceAllocator> {
        self.sequences.clone()
    }
}

/// 启动时定义表和索引
///
/// 表保持 schemaless (原系统是 Mongo 文档集合)，但 display_id 和若干业务
/// 字段加 UNIQUE 索引兜底。
async fn define_schema(db: &Surreal<Db>) -> surrealdb::Result<()> {
    db.query(
        r#"
        DEFINE TABLE IF NOT EXISTS movie;
        DEFINE INDEX IF NOT EXISTS movie_display_id ON movie FIELDS display_id UNIQUE;

        DEFINE TABLE IF NOT EXISTS booking;
        DEFINE INDEX IF NOT EXISTS booking_display_id ON booking FIELDS display_id UNIQUE;

        DEFINE TABLE IF NOT EXISTS payment;
        DEFINE INDEX IF NOT EXISTS payment_display_id ON payment FIELDS display_id UNIQUE;

        DEFINE TABLE IF NOT EXISTS promotion;
        DEFINE INDEX IF NOT EXISTS promotion_display_id ON promotion FIELDS display_id UNIQUE;

        DEFINE TABLE IF NOT EXISTS employee;
        DEFINE INDEX IF NOT EXISTS employee_display_id ON employee FIELDS display_id UNIQUE;
        DEFINE INDEX IF NOT EXISTS employee_phone ON employee FIELDS phone UNIQUE;

        DEFINE TABLE IF NOT EXISTS salary;
        DEFINE INDEX IF NOT EXISTS salary_display_id ON salary FIELDS display_id UNIQUE;

        DEFINE TABLE IF NOT EXISTS inventory;
        DEFINE INDEX IF NOT EXISTS inventory_display_id ON inventory FIELDS display_id UNIQUE;

        DEFINE TABLE IF NOT EXISTS feedback;

        DEFINE TABLE IF NOT EXISTS user;
        DEFINE INDEX IF NOT EXISTS user_email ON user FIELDS email UNIQUE;
        "#,
    )
    .await?;
    Ok(())
}
