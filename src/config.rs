use std::env;

use crate::error::{AppError, Result};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_MINIMUM_AGE_YEARS: u32 = 18;

/// Process configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Minimum age, in years, a user must have at creation time.
    pub minimum_age_years: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::Config("DATABASE_URL must be set".into()))?;

        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        let minimum_age_years = match env::var("MINIMUM_AGE_YEARS") {
            Ok(value) => value.parse().map_err(|_| {
                AppError::Config(format!("MINIMUM_AGE_YEARS is not a valid number: {}", value))
            })?,
            Err(_) => DEFAULT_MINIMUM_AGE_YEARS,
        };

        Ok(Self {
            database_url,
            bind_address,
            minimum_age_years,
        })
    }
}
