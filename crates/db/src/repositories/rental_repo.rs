//! Repository for the `rentals` table and the check-out / check-in
//! lifecycle.
//!
//! Check-out and check-in each run in a single transaction that locks the
//! video row before reading counts, so two concurrent check-outs cannot
//! both observe the last available copy. Both operations take the video
//! lock first, keeping lock order consistent between them.

use sqlx::{PgPool, Postgres, Transaction};
use vidrent_core::error::CoreError;
use vidrent_core::rental;
use vidrent_core::types::DbId;

use crate::models::rental::{CheckInOutcome, CheckOutOutcome, CustomerRental, Rental, VideoRental};

/// Error from a repository operation: a domain rule violation or a
/// database failure.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Provides rental lifecycle operations and open-rental listings.
pub struct RentalRepo;

impl RentalRepo {
    /// Check out a video to a customer.
    ///
    /// Fails with [`CoreError::NotFound`] if either entity is missing and
    /// [`CoreError::InventoryExhausted`] if every copy is already out. On
    /// success a new open rental is created with
    /// `due_date = NOW() + loan_period_days`, and the returned outcome
    /// carries the post-insert derived counts.
    pub async fn check_out(
        pool: &PgPool,
        customer_id: DbId,
        video_id: DbId,
        loan_period_days: i32,
    ) -> Result<CheckOutOutcome, RepoError> {
        let mut tx = pool.begin().await?;

        let total_inventory = Self::lock_video(&mut tx, video_id).await?;
        Self::require_customer(&mut tx, customer_id).await?;

        let open_for_video = Self::open_count_for_video(&mut tx, video_id).await?;
        if !rental::can_check_out(total_inventory, open_for_video) {
            return Err(CoreError::InventoryExhausted { video_id }.into());
        }

        let created = sqlx::query_as::<_, Rental>(
            "INSERT INTO rentals (customer_id, video_id, due_date)
             VALUES ($1, $2, NOW() + make_interval(days => $3))
             RETURNING id, customer_id, video_id, checked_out_at, due_date, returned_at",
        )
        .bind(customer_id)
        .bind(video_id)
        .bind(loan_period_days)
        .fetch_one(&mut *tx)
        .await?;

        let checked_out = Self::open_count_for_customer(&mut tx, customer_id).await?;
        let available = rental::available_inventory(total_inventory, open_for_video + 1);

        tx.commit().await?;

        tracing::debug!(customer_id, video_id, rental_id = created.id, "Checked out video");

        Ok(CheckOutOutcome {
            customer_id,
            video_id,
            due_date: created.due_date,
            videos_checked_out_count: checked_out,
            available_inventory: available,
        })
    }

    /// Check in a video previously checked out by a customer.
    ///
    /// Closes the *oldest* open rental matching the pair (deterministic
    /// tie-break when a customer holds duplicate copies); at most one
    /// rental is closed. Fails with [`CoreError::RentalNotFound`] if no
    /// open rental matches.
    pub async fn check_in(
        pool: &PgPool,
        customer_id: DbId,
        video_id: DbId,
    ) -> Result<CheckInOutcome, RepoError> {
        let mut tx = pool.begin().await?;

        let total_inventory = Self::lock_video(&mut tx, video_id).await?;
        Self::require_customer(&mut tx, customer_id).await?;

        let open_rental: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM rentals
             WHERE customer_id = $1 AND video_id = $2 AND returned_at IS NULL
             ORDER BY checked_out_at, id
             LIMIT 1
             FOR UPDATE",
        )
        .bind(customer_id)
        .bind(video_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((rental_id,)) = open_rental else {
            return Err(CoreError::RentalNotFound {
                customer_id,
                video_id,
            }
            .into());
        };

        sqlx::query("UPDATE rentals SET returned_at = NOW() WHERE id = $1")
            .bind(rental_id)
            .execute(&mut *tx)
            .await?;

        let open_for_video = Self::open_count_for_video(&mut tx, video_id).await?;
        let checked_out = Self::open_count_for_customer(&mut tx, customer_id).await?;
        let available = rental::available_inventory(total_inventory, open_for_video);

        tx.commit().await?;

        tracing::debug!(customer_id, video_id, rental_id, "Checked in video");

        Ok(CheckInOutcome {
            customer_id,
            video_id,
            videos_checked_out_count: checked_out,
            available_inventory: available,
        })
    }

    /// Open rentals of a customer, joined with video details. Oldest first.
    pub async fn list_for_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<CustomerRental>, sqlx::Error> {
        sqlx::query_as::<_, CustomerRental>(
            "SELECT v.title, v.release_date, r.due_date
             FROM rentals r
             JOIN videos v ON v.id = r.video_id
             WHERE r.customer_id = $1 AND r.returned_at IS NULL
             ORDER BY r.checked_out_at, r.id",
        )
        .bind(customer_id)
        .fetch_all(pool)
        .await
    }

    /// Open rentals of a video, joined with customer details. Oldest first.
    pub async fn list_for_video(
        pool: &PgPool,
        video_id: DbId,
    ) -> Result<Vec<VideoRental>, sqlx::Error> {
        sqlx::query_as::<_, VideoRental>(
            "SELECT c.name, c.phone, c.postal_code, r.due_date
             FROM rentals r
             JOIN customers c ON c.id = r.customer_id
             WHERE r.video_id = $1 AND r.returned_at IS NULL
             ORDER BY r.checked_out_at, r.id",
        )
        .bind(video_id)
        .fetch_all(pool)
        .await
    }

    /// Lock the video row for the duration of the transaction and return
    /// its total inventory.
    async fn lock_video(
        tx: &mut Transaction<'_, Postgres>,
        video_id: DbId,
    ) -> Result<i32, RepoError> {
        let row: Option<(i32,)> =
            sqlx::query_as("SELECT total_inventory FROM videos WHERE id = $1 FOR UPDATE")
                .bind(video_id)
                .fetch_optional(&mut **tx)
                .await?;
        row.map(|(total,)| total).ok_or_else(|| {
            CoreError::NotFound {
                entity: "Video",
                id: video_id,
            }
            .into()
        })
    }

    /// Fail with `NotFound` unless the customer exists.
    async fn require_customer(
        tx: &mut Transaction<'_, Postgres>,
        customer_id: DbId,
    ) -> Result<(), RepoError> {
        let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM customers WHERE id = $1")
            .bind(customer_id)
            .fetch_optional(&mut **tx)
            .await?;
        match row {
            Some(_) => Ok(()),
            None => Err(CoreError::NotFound {
                entity: "Customer",
                id: customer_id,
            }
            .into()),
        }
    }

    async fn open_count_for_video(
        tx: &mut Transaction<'_, Postgres>,
        video_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM rentals WHERE video_id = $1 AND returned_at IS NULL",
        )
        .bind(video_id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(count)
    }

    async fn open_count_for_customer(
        tx: &mut Transaction<'_, Postgres>,
        customer_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM rentals WHERE customer_id = $1 AND returned_at IS NULL",
        )
        .bind(customer_id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(count)
    }
}
