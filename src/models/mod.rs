use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{birthday_in_past, not_blank};

/// A persisted user record. `id` is assigned by the store on insert and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Insert input: everything except the store-assigned id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

// Request DTOs

/// Body of POST /create and PUT /:id. PUT overwrites every mutable field
/// with these values, so optional fields left out of the payload are cleared.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[validate(email(message = "Incorrect email"))]
    #[validate(custom(function = "not_blank"))]
    pub email: String,

    #[validate(custom(function = "not_blank"))]
    pub first_name: String,

    #[validate(custom(function = "not_blank"))]
    pub last_name: String,

    #[validate(custom(function = "birthday_in_past"))]
    pub birthday: NaiveDate,

    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl From<UserRequest> for NewUser {
    fn from(request: UserRequest) -> Self {
        NewUser {
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            birthday: request.birthday,
            address: request.address,
            phone_number: request.phone_number,
        }
    }
}

/// Body of PATCH /:id. Each field is a `NullableField` so that a field
/// missing from the payload is distinguishable from one explicitly set to
/// null: missing fields are left untouched, null clears optional fields and
/// is rejected on required ones.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    pub email: NullableField<String>,
    pub first_name: NullableField<String>,
    pub last_name: NullableField<String>,
    pub birthday: NullableField<NaiveDate>,
    pub address: NullableField<String>,
    pub phone_number: NullableField<String>,
}

/// Distinguishes null vs. not-present in JSON payloads.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum NullableField<T> {
    Null,
    Value(T),
    #[serde(skip_deserializing)]
    NotPresent,
}

impl<T> Default for NullableField<T> {
    fn default() -> Self {
        NullableField::NotPresent
    }
}

// Response DTOs

/// Uniform success wrapper: every non-empty response body is `{"data": ...}`
/// whether the payload is one record or a list.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Query parameters of GET /search, ISO-8601 calendar dates.
#[derive(Debug, Deserialize)]
pub struct BirthdayRangeQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}
