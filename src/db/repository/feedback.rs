//! Feedback Repository

use chrono::Utc;

use super::{parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::{Feedback, FeedbackCreate};
use crate::db::DbService;

const TABLE: &str = "feedback";

#[derive(Clone)]
pub struct FeedbackRepository {
    base: BaseRepository,
}

impl FeedbackRepository {
    pub fn new(service: &DbService) -> Self {
        Self {
            base: BaseRepository::new(service),
        }
    }

    /// Find all feedback, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Feedback>> {
        let feedback: Vec<Feedback> = self
            .base
            .db()
            .query("SELECT * FROM feedback ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(feedback)
    }

    /// Find feedback by record id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Feedback>> {
        let thing = parse_record_id(TABLE, id)?;
        let feedback: Option<Feedback> = self.base.db().select(thing).await?;
        Ok(feedback)
    }

    /// Create feedback from the public contact page
    pub async fn create(&self, data: FeedbackCreate) -> RepoResult<Feedback> {
        let feedback = Feedback {
            id: None,
            name: data.name,
            email: data.email,
            message: data.message,
            created_at: Utc::now(),
        };

        let created: Option<Feedback> = self.base.db().create(TABLE).content(feedback).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create feedback".to_string()))
    }

    /// Hard delete feedback; false when the record did not exist
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(TABLE, id)?;
        let deleted: Option<Feedback> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }
}
