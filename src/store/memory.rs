use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::UserStore;
use crate::error::{AppError, Result};
use crate::models::{NewUser, User};

/// In-memory implementation of UserStore for tests and local runs.
pub struct MemoryUserStore {
    users: RwLock<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl MemoryUserStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Creates an in-memory store seeded with initial records. The id
    /// counter continues after the highest seeded id.
    pub fn with_data(initial_data: Vec<User>) -> Self {
        let mut users = HashMap::new();
        let mut max_id = 0;
        for user in initial_data {
            max_id = max_id.max(user.id);
            users.insert(user.id, user);
        }

        Self {
            users: RwLock::new(users),
            next_id: AtomicI64::new(max_id + 1),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::InternalServerError("Failed to acquire read lock".into()))?;

        Ok(users.get(&id).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::InternalServerError("Failed to acquire write lock".into()))?;

        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            email: new_user.email,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            birthday: new_user.birthday,
            address: new_user.address,
            phone_number: new_user.phone_number,
        };

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::InternalServerError("Failed to acquire write lock".into()))?;

        if !users.contains_key(&user.id) {
            return Err(AppError::NotFound(format!("User not found: {}", user.id)));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::InternalServerError("Failed to acquire write lock".into()))?;

        if users.remove(&id).is_none() {
            return Err(AppError::NotFound(format!("User not found: {}", id)));
        }

        Ok(())
    }

    async fn find_by_birthday_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::InternalServerError("Failed to acquire read lock".into()))?;

        let mut matches: Vec<User> = users
            .values()
            .filter(|user| user.birthday >= from && user.birthday <= to)
            .cloned()
            .collect();

        // HashMap iteration order is arbitrary; keep results deterministic
        matches.sort_by_key(|user| user.id);

        Ok(matches)
    }
}
