use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{NewUser, User};

pub mod memory;
pub mod postgres;

/// UserStore trait defining the interface for user persistence backends.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Looks up a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    /// Inserts a new user and returns the persisted record with its
    /// store-assigned id.
    async fn insert(&self, new_user: NewUser) -> Result<User>;

    /// Updates an existing user. The id must already exist.
    async fn update(&self, user: User) -> Result<User>;

    /// Deletes a user by id.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Returns all users whose birthday falls within `[from, to]` inclusive.
    async fn find_by_birthday_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<User>>;
}
