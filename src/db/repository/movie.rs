//! Movie Repository

use super::{parse_record_id, BaseRepository, RepoError, RepoResult};
use crate::db::models::{Movie, MovieCreate, MovieUpdate};
use crate::db::{sequence, DbService};

const TABLE: &str = "movie";
const PREFIX: char = 'M';

#[derive(Clone)]
pub struct MovieRepository {
    base: BaseRepository,
}

impl MovieRepository {
    pub fn new(service: &DbService) -> Self {
        Self {
            base: BaseRepository::new(service),
        }
    }

    /// Find all movies ordered by display id
    pub async fn find_all(&self) -> RepoResult<Vec<Movie>> {
        let movies: Vec<Movie> = self
            .base
            .db()
            .query("SELECT * FROM movie ORDER BY display_id")
            .await?
            .take(0)?;
        Ok(movies)
    }

    /// Find movie by record id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Movie>> {
        let thing = parse_record_id(TABLE, id)?;
        let movie: Option<Movie> = self.base.db().select(thing).await?;
        Ok(movie)
    }

    /// Create a new movie with a freshly allocated display id
    pub async fn create(&self, data: MovieCreate) -> RepoResult<Movie> {
        // 编号分配与插入在同一把锁内，防止并发重号
        let _guard = self.base.sequences().lock(TABLE).await;
        let display_id = sequence::next_id(self.base.db(), TABLE, PREFIX).await?;

        let movie = Movie {
            id: None,
            display_id,
            name: data.name,
            rate: data.rate,
            status: data.status,
            image: data.image,
            description: data.description,
        };

        let created: Option<Movie> = self.base.db().create(TABLE).content(movie).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create movie".to_string()))
    }

    /// Update a movie (display_id immutable — not part of the payload)
    pub async fn update(&self, id: &str, data: MovieUpdate) -> RepoResult<Movie> {
        let thing = parse_record_id(TABLE, id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Movie {} not found", id)))?;

        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Movie {} not found", id)))
    }

    /// Hard delete a movie; false when the record did not exist
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(TABLE, id)?;
        let deleted: Option<Movie> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }
}
