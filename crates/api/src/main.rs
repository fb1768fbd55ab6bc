use std::sync::Arc;

use diskus_api::app::services::build_postgres_services;
use diskus_api::config::Config;
use diskus_auth::{AuthenticationTokenManager, JwtTokenManager};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    diskus_observability::init();

    let config = Config::from_env()?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;
    diskus_infra::MIGRATOR.run(&pool).await?;

    let token_manager: Arc<dyn AuthenticationTokenManager> = Arc::new(JwtTokenManager::new(
        config.access_token_key.as_bytes(),
        config.refresh_token_key.as_bytes(),
        config.access_token_age,
    ));

    let services = Arc::new(build_postgres_services(pool, token_manager.clone()));
    let app = diskus_api::app::build_app(services, token_manager);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
