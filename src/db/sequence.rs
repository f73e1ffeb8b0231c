//! Display-ID sequence allocation
//!
//! 每个集合的人类可读编号 (如 `M001`, `B042`)：取当前最大编号，去掉前缀
//! 字母，数字加一，左补零到 3 位，再拼回前缀。所有实体共用这一个工具，
//! 不再按实体复制粘贴。
//!
//! Display IDs are convenience labels. The SurrealDB [`RecordId`] remains the
//! primary key for every lookup, update, and delete.
//!
//! # Concurrency
//!
//! Two concurrent creates reading the same "current maximum" would allocate
//! the same number, so [`SequenceAllocator::lock`] hands out a per-table async
//! guard. Repositories hold the guard across the read-max + insert pair. The
//! database is embedded and single-process, so an in-process lock closes the
//! race completely; a UNIQUE index on `display_id` backstops it.

use std::sync::Arc;

use dashmap::DashMap;
use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::Surreal;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::repository::{RepoError, RepoResult};

/// 默认补零宽度 (`M001`)，超过 999 后自然变宽，不截断
pub const PAD_WIDTH: usize = 3;

/// Per-table allocation locks
#[derive(Debug, Default)]
pub struct SequenceAllocator {
    locks: DashMap<&'static str, Arc<Mutex<()>>>,
}

impl SequenceAllocator {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Acquire the allocation guard for one table.
    ///
    /// 持有 guard 期间该表的编号分配被串行化，插入完成前不要释放。
    pub async fn lock(&self, table: &'static str) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(table)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }
}

#[derive(Debug, Deserialize)]
struct MaxRow {
    display_id: String,
}

/// Read the current maximum display ID of `table` and compute the next one.
///
/// Callers must hold the table's allocation guard (see [`SequenceAllocator`]).
pub async fn next_id(db: &Surreal<Db>, table: &str, prefix: char) -> RepoResult<String> {
    // Lexicographic order alone is wrong once ids widen ("M999" > "M1000"),
    // so sort by length first. Equal-width zero-padded ids sort correctly.
    let mut result = db
        .query(format!(
            "SELECT display_id, string::len(display_id) AS id_len FROM {table} \
             ORDER BY id_len DESC, display_id DESC LIMIT 1"
        ))
        .await?;
    let row: Option<MaxRow> = result.take(0)?;
    next_display_id(row.as_ref().map(|r| r.display_id.as_str()), prefix, PAD_WIDTH)
}

/// Pure allocation step: `None` ⇒ `<prefix>001`, `Some("M007")` ⇒ `M008`.
///
/// Malformed stored IDs are a typed error instead of silent garbage.
pub fn next_display_id(last: Option<&str>, prefix: char, width: usize) -> RepoResult<String> {
    let next = match last {
        None => 1,
        Some(raw) => {
            let suffix = raw.strip_prefix(prefix).ok_or_else(|| {
                RepoError::Validation(format!(
                    "Malformed display id '{raw}': expected prefix '{prefix}'"
                ))
            })?;
            let n: u64 = suffix.parse().map_err(|_| {
                RepoError::Validation(format!(
                    "Malformed display id '{raw}': non-numeric suffix"
                ))
            })?;
            n + 1
        }
    };
    Ok(format!("{prefix}{next:0width$}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_starts_at_001() {
        assert_eq!(next_display_id(None, 'M', 3).unwrap(), "M001");
        assert_eq!(next_display_id(None, 'B', 3).unwrap(), "B001");
    }

    #[test]
    fn increments_and_keeps_padding() {
        assert_eq!(next_display_id(Some("M007"), 'M', 3).unwrap(), "M008");
        assert_eq!(next_display_id(Some("P099"), 'P', 3).unwrap(), "P100");
        assert_eq!(next_display_id(Some("S010"), 'S', 3).unwrap(), "S011");
    }

    #[test]
    fn widens_past_999_without_truncating() {
        assert_eq!(next_display_id(Some("M999"), 'M', 3).unwrap(), "M1000");
        assert_eq!(next_display_id(Some("M1000"), 'M', 3).unwrap(), "M1001");
    }

    #[test]
    fn malformed_ids_are_rejected() {
        // 原实现会在这里产生 NaN，现在返回带类型的错误
        assert!(next_display_id(Some("007"), 'M', 3).is_err());
        assert!(next_display_id(Some("MX07"), 'M', 3).is_err());
        assert!(next_display_id(Some("M"), 'M', 3).is_err());
        assert!(next_display_id(Some(""), 'M', 3).is_err());
    }

    #[test]
    fn payment_and_promotion_share_the_letter_but_not_the_sequence() {
        // 两个集合各自独立计数，同用 'P' 前缀也不会互相影响
        assert_eq!(next_display_id(Some("P003"), 'P', 3).unwrap(), "P004");
        assert_eq!(next_display_id(None, 'P', 3).unwrap(), "P001");
    }
}
