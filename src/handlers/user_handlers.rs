use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use super::AppJson;
use crate::error::Result;
use crate::models::{BirthdayRangeQuery, DataEnvelope, User, UserPatch, UserRequest};
use crate::service::UserService;
use crate::store::UserStore;

// POST /v1/api/users/create
pub async fn create_user<S>(
    State(service): State<Arc<UserService<S>>>,
    AppJson(payload): AppJson<UserRequest>,
) -> Result<(StatusCode, Json<DataEnvelope<User>>)>
where
    S: UserStore,
{
    tracing::info!("creating user");
    payload.validate()?;

    let created = service.create_user(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(DataEnvelope { data: created })))
}

// PUT /v1/api/users/:id
pub async fn update_user<S>(
    State(service): State<Arc<UserService<S>>>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<UserRequest>,
) -> Result<Json<DataEnvelope<User>>>
where
    S: UserStore,
{
    tracing::info!(user_id = id, "updating user");
    payload.validate()?;

    let updated = service.update_user(id, payload.into()).await?;

    Ok(Json(DataEnvelope { data: updated }))
}

// PATCH /v1/api/users/:id
pub async fn update_user_fields<S>(
    State(service): State<Arc<UserService<S>>>,
    Path(id): Path<i64>,
    AppJson(patch): AppJson<UserPatch>,
) -> Result<Json<DataEnvelope<User>>>
where
    S: UserStore,
{
    tracing::info!(user_id = id, "partial updating user");

    let updated = service.update_user_fields(id, patch).await?;

    Ok(Json(DataEnvelope { data: updated }))
}

// DELETE /v1/api/users/:id
pub async fn delete_user<S>(
    State(service): State<Arc<UserService<S>>>,
    Path(id): Path<i64>,
) -> Result<StatusCode>
where
    S: UserStore,
{
    tracing::info!(user_id = id, "deleting user");

    service.delete_user(id).await?;

    Ok(StatusCode::OK)
}

// GET /v1/api/users/search?from=YYYY-MM-DD&to=YYYY-MM-DD
pub async fn search_users<S>(
    State(service): State<Arc<UserService<S>>>,
    Query(range): Query<BirthdayRangeQuery>,
) -> Result<Json<DataEnvelope<Vec<User>>>>
where
    S: UserStore,
{
    tracing::info!(from = %range.from, to = %range.to, "searching users by birthday range");

    let users = service
        .find_users_by_birthday_range(range.from, range.to)
        .await?;

    Ok(Json(DataEnvelope { data: users }))
}
