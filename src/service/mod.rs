use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::{AppError, Result};
use crate::models::{NewUser, NullableField, User, UserPatch};
use crate::store::UserStore;
use crate::validation::AgePolicy;

/// Orchestrates the user operations over a store. Holds no mutable state, so
/// one instance is shared across all requests.
pub struct UserService<S> {
    store: Arc<S>,
    age_policy: AgePolicy,
}

impl<S> UserService<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>, age_policy: AgePolicy) -> Self {
        Self { store, age_policy }
    }

    /// Creates a user. Field-level validation has already run at the
    /// boundary; this only enforces the age policy before touching the store.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User> {
        if !self.age_policy.is_eligible(new_user.birthday) {
            tracing::warn!(
                birthday = %new_user.birthday,
                "user creation rejected: age below the acceptable limit"
            );
            return Err(AppError::AgeUnacceptable(
                "User age is less than the acceptable limit".into(),
            ));
        }

        let created = self.store.insert(new_user).await?;
        tracing::info!(user_id = created.id, "user created");
        Ok(created)
    }

    /// Full update: every mutable field is overwritten with the replacement's
    /// values, including `None` for optional fields absent from the payload.
    pub async fn update_user(&self, id: i64, replacement: NewUser) -> Result<User> {
        let mut current = self.find_existing(id, "update").await?;

        current.email = replacement.email;
        current.first_name = replacement.first_name;
        current.last_name = replacement.last_name;
        current.birthday = replacement.birthday;
        current.address = replacement.address;
        current.phone_number = replacement.phone_number;

        let updated = self.store.update(current).await?;
        tracing::info!(user_id = updated.id, "user updated");
        Ok(updated)
    }

    /// Partial update: fields absent from the patch are left unchanged.
    /// Explicit null clears the optional fields and is rejected on required
    /// ones.
    pub async fn update_user_fields(&self, id: i64, patch: UserPatch) -> Result<User> {
        let mut current = self.find_existing(id, "partial update").await?;

        match patch.email {
            NullableField::Value(email) => current.email = email,
            NullableField::Null => return Err(required_field_null("email")),
            NullableField::NotPresent => {}
        }
        match patch.first_name {
            NullableField::Value(first_name) => current.first_name = first_name,
            NullableField::Null => return Err(required_field_null("firstName")),
            NullableField::NotPresent => {}
        }
        match patch.last_name {
            NullableField::Value(last_name) => current.last_name = last_name,
            NullableField::Null => return Err(required_field_null("lastName")),
            NullableField::NotPresent => {}
        }
        match patch.birthday {
            NullableField::Value(birthday) => current.birthday = birthday,
            NullableField::Null => return Err(required_field_null("birthday")),
            NullableField::NotPresent => {}
        }
        match patch.address {
            NullableField::Value(address) => current.address = Some(address),
            NullableField::Null => current.address = None,
            NullableField::NotPresent => {}
        }
        match patch.phone_number {
            NullableField::Value(phone_number) => current.phone_number = Some(phone_number),
            NullableField::Null => current.phone_number = None,
            NullableField::NotPresent => {}
        }

        let updated = self.store.update(current).await?;
        tracing::info!(user_id = updated.id, "user fields updated");
        Ok(updated)
    }

    pub async fn delete_user(&self, id: i64) -> Result<()> {
        let current = self.find_existing(id, "deletion").await?;

        self.store.delete(current.id).await?;
        tracing::info!(user_id = current.id, "user deleted");
        Ok(())
    }

    /// Inclusive birthday range search. The store is never queried when the
    /// range is inverted.
    pub async fn find_users_by_birthday_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<User>> {
        if from > to {
            tracing::warn!(%from, %to, "search rejected: wrong date range");
            return Err(AppError::InvalidDateRange(
                "Wrong range of birth date".into(),
            ));
        }

        let users = self.store.find_by_birthday_range(from, to).await?;
        tracing::info!(%from, %to, count = users.len(), "users found by birthday range");
        Ok(users)
    }

    async fn find_existing(&self, id: i64, operation: &str) -> Result<User> {
        self.store.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(user_id = id, "user {} failed: user not found", operation);
            AppError::NotFound(format!("User not found: {}", id))
        })
    }
}

fn required_field_null(field: &str) -> AppError {
    AppError::BadRequest(format!("{} cannot be set to null", field))
}
