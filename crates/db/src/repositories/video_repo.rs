//! Repository for the `videos` table.

use sqlx::PgPool;
use vidrent_core::types::DbId;

use crate::models::video::{CreateVideo, UpdateVideo, Video};

/// Column list shared across queries. Available inventory is derived from
/// the open-rental count; it is never stored. Clamped at zero: a PUT can
/// shrink `total_inventory` below the current open-rental count.
const COLUMNS: &str = "v.id, v.title, v.release_date, v.total_inventory, \
     GREATEST(0, v.total_inventory - (SELECT COUNT(*) FROM rentals r \
      WHERE r.video_id = v.id AND r.returned_at IS NULL))::int AS available_inventory";

/// Provides CRUD operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video, returning the created row.
    ///
    /// A fresh video has no rentals, so every copy is available.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        sqlx::query_as::<_, Video>(
            "INSERT INTO videos (title, release_date, total_inventory)
             VALUES ($1, $2, $3)
             RETURNING id, title, release_date, total_inventory,
                       total_inventory AS available_inventory",
        )
        .bind(&input.title)
        .bind(input.release_date)
        .bind(input.total_inventory)
        .fetch_one(pool)
        .await
    }

    /// Find a video by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos v WHERE v.id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List videos, optionally filtered by exact title, ordered by ID.
    pub async fn list(pool: &PgPool, title: Option<&str>) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos v
             WHERE ($1::text IS NULL OR v.title = $1)
             ORDER BY v.id"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(title)
            .fetch_all(pool)
            .await
    }

    /// Replace a video's fields. Returns `None` if no row with the given
    /// `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVideo,
    ) -> Result<Option<Video>, sqlx::Error> {
        sqlx::query_as::<_, Video>(
            "UPDATE videos v SET title = $2, release_date = $3, total_inventory = $4
             WHERE v.id = $1
             RETURNING v.id, v.title, v.release_date, v.total_inventory,
                       GREATEST(0, v.total_inventory - (SELECT COUNT(*) FROM rentals r
                        WHERE r.video_id = v.id AND r.returned_at IS NULL))::int
                           AS available_inventory",
        )
        .bind(id)
        .bind(&input.title)
        .bind(input.release_date)
        .bind(input.total_inventory)
        .fetch_optional(pool)
        .await
    }

    /// Delete a video by ID. Open rentals cascade. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
