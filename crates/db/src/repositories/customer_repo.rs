//! Repository for the `customers` table.

use sqlx::PgPool;
use vidrent_core::types::DbId;

use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};

/// Column list shared across queries. The open-rental count is derived per
/// row; it is never stored.
const COLUMNS: &str = "c.id, c.name, c.postal_code, c.phone, c.registered_at, \
     (SELECT COUNT(*) FROM rentals r \
      WHERE r.customer_id = c.id AND r.returned_at IS NULL) AS videos_checked_out_count";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    ///
    /// A fresh customer has no rentals, so the derived count is zero.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (name, postal_code, phone)
             VALUES ($1, $2, $3)
             RETURNING id, name, postal_code, phone, registered_at,
                       0::bigint AS videos_checked_out_count",
        )
        .bind(&input.name)
        .bind(&input.postal_code)
        .bind(&input.phone)
        .fetch_one(pool)
        .await
    }

    /// Find a customer by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers c WHERE c.id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List customers, optionally filtered by exact name, ordered by ID.
    pub async fn list(pool: &PgPool, name: Option<&str>) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM customers c
             WHERE ($1::text IS NULL OR c.name = $1)
             ORDER BY c.id"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(name)
            .fetch_all(pool)
            .await
    }

    /// Replace a customer's fields. Returns `None` if no row with the given
    /// `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, sqlx::Error> {
        sqlx::query_as::<_, Customer>(
            "UPDATE customers c SET name = $2, postal_code = $3, phone = $4
             WHERE c.id = $1
             RETURNING c.id, c.name, c.postal_code, c.phone, c.registered_at,
                       (SELECT COUNT(*) FROM rentals r
                        WHERE r.customer_id = c.id AND r.returned_at IS NULL)
                           AS videos_checked_out_count",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.postal_code)
        .bind(&input.phone)
        .fetch_optional(pool)
        .await
    }

    /// Delete a customer by ID. Open rentals cascade. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
