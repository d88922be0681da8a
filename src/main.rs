mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod service;
mod store;
mod validation;

#[cfg(test)]
mod tests;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,user_service=debug".into());

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(true)
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        minimum_age_years = config.minimum_age_years,
        "starting user service"
    );

    let app = routes::create_router(&config).await?;

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
