use chrono::{Months, NaiveDate, Utc};
use validator::ValidationError;

/// Minimum-age policy applied when a user is created.
///
/// The threshold comes from configuration and is injected into the service;
/// the check itself is pure so it can be tested with a fixed "today".
#[derive(Debug, Clone, Copy)]
pub struct AgePolicy {
    minimum_age_years: u32,
}

impl AgePolicy {
    pub fn new(minimum_age_years: u32) -> Self {
        Self { minimum_age_years }
    }

    /// True iff the birthday is strictly before `today - minimum_age_years`.
    /// A birthday exactly on the cutoff is not eligible.
    pub fn is_eligible_on(&self, birthday: NaiveDate, today: NaiveDate) -> bool {
        // A threshold too large to express as months makes nobody eligible
        let cutoff = self
            .minimum_age_years
            .checked_mul(12)
            .and_then(|months| today.checked_sub_months(Months::new(months)))
            .unwrap_or(NaiveDate::MIN);
        birthday < cutoff
    }

    pub fn is_eligible(&self, birthday: NaiveDate) -> bool {
        self.is_eligible_on(birthday, Utc::now().date_naive())
    }
}

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Birthdays in the present or future are invalid regardless of the age policy.
pub fn birthday_in_past(birthday: &NaiveDate) -> Result<(), ValidationError> {
    if *birthday >= Utc::now().date_naive() {
        return Err(ValidationError::new("birthday_in_past")
            .with_message("birthday must be in the past".into()));
    }
    Ok(())
}
