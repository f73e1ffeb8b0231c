//! Booking Repository

use super::{parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::{Booking, BookingCreate, BookingUpdate};
use crate::db::{sequence, DbService};

const TABLE: &str = "booking";
const PREFIX: char = 'B';

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(service: &DbService) -> Self {
        Self {
            base: BaseRepository::new(service),
        }
    }

    /// Find all bookings, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Booking>> {
        let bookings: Vec<Booking> = self
            .base
            .db()
            .query("SELECT * FROM booking ORDER BY date DESC")
            .await?
            .take(0)?;
        Ok(bookings)
    }

    /// Find booking by record id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Booking>> {
        let thing = parse_record_id(TABLE, id)?;
        let booking: Option<Booking> = self.base.db().select(thing).await?;
        Ok(booking)
    }

    /// Create a new booking
    ///
    /// 座位是自由文本，沿用原系统：无可用性检查、无冲突检测。
    pub async fn create(&self, data: BookingCreate) -> RepoResult<Booking> {
        if data.count == 0 {
            return Err(RepoError::Validation(
                "Ticket count must be at least 1".to_string(),
            ));
        }

        let _guard = self.base.sequences().lock(TABLE).await;
        let display_id = sequence::next_id(self.base.db(), TABLE, PREFIX).await?;

        let booking = Booking {
            id: None,
            display_id,
            ticket_id: data.ticket_id,
            count: data.count,
            movie_id: data.movie_id,
            user_id: data.user_id,
            show_time_id: data.show_time_id,
            date: data.date,
            seat: data.seat,
        };

        let created: Option<Booking> = self.base.db().create(TABLE).content(booking).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create booking".to_string()))
    }

    /// Update a booking (display_id immutable)
    pub async fn update(&self, id: &str, data: BookingUpdate) -> RepoResult<Booking> {
        if let Some(0) = data.count {
            return Err(RepoError::Validation(
                "Ticket count must be at least 1".to_string(),
            ));
        }

        let thing = parse_record_id(TABLE, id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Booking {} not found", id)))?;

        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Booking {} not found", id)))
    }

    /// Hard delete a booking; false when the record did not exist
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(TABLE, id)?;
        let deleted: Option<Booking> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }
}
