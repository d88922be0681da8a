use std::sync::Arc;

use axum::{
    extract::Request,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::Result;
use crate::handlers::user_handlers::{
    create_user, delete_user, search_users, update_user, update_user_fields,
};
use crate::service::UserService;
use crate::store::{postgres::PgUserStore, UserStore};
use crate::validation::AgePolicy;

/// Creates the production router backed by PostgreSQL.
pub async fn create_router(config: &Config) -> Result<Router> {
    tracing::info!("creating router with PostgreSQL store");

    let store = Arc::new(PgUserStore::connect(&config.database_url).await?);

    Ok(create_router_with_store(
        store,
        AgePolicy::new(config.minimum_age_years),
    ))
}

/// Creates a router over a given store implementation.
pub fn create_router_with_store<S>(store: Arc<S>, age_policy: AgePolicy) -> Router
where
    S: UserStore,
{
    let service = Arc::new(UserService::new(store, age_policy));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/v1/api/users/create", post(create_user))
        .route("/v1/api/users/search", get(search_users))
        .route(
            "/v1/api/users/:id",
            put(update_user)
                .patch(update_user_fields)
                .delete(delete_user),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
        .fallback(|req: Request| async move {
            tracing::warn!("no route matched for: {} {}", req.method(), req.uri());
            (
                axum::http::StatusCode::NOT_FOUND,
                "The requested resource was not found".to_string(),
            )
        })
}
