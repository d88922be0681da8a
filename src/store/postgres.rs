use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::UserStore;
use crate::error::{AppError, Result};
use crate::models::{NewUser, User};

const SELECT_COLUMNS: &str = "id, email, first_name, last_name, birthday, address, phone_number";

/// PostgreSQL-backed user store.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Connects to the database and runs any pending migrations.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::InternalServerError(format!("Migration failed: {}", e)))?;

        Ok(Self { pool })
    }

    /// Creates a store over an existing pool. Mainly useful for tests
    /// against a local database.
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, new_user: NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, first_name, last_name, birthday, address, phone_number) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            SELECT_COLUMNS
        ))
        .bind(new_user.email)
        .bind(new_user.first_name)
        .bind(new_user.last_name)
        .bind(new_user.birthday)
        .bind(new_user.address)
        .bind(new_user.phone_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User> {
        let updated = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET email = $1, first_name = $2, last_name = $3, birthday = $4, \
             address = $5, phone_number = $6 WHERE id = $7 RETURNING {}",
            SELECT_COLUMNS
        ))
        .bind(user.email)
        .bind(user.first_name)
        .bind(user.last_name)
        .bind(user.birthday)
        .bind(user.address)
        .bind(user.phone_number)
        .bind(user.id)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| AppError::NotFound(format!("User not found: {}", user.id)))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User not found: {}", id)));
        }

        Ok(())
    }

    async fn find_by_birthday_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE birthday BETWEEN $1 AND $2 ORDER BY id",
            SELECT_COLUMNS
        ))
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
