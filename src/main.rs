use anyhow::Result;
use tracing_subscriber::EnvFilter;

use wisal_server::{config::Config, db, handlers};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let port = config.port;

    let pool = db::init_db_pool(&config.database_url).await?;
    db::seed_database(&pool, &config).await?;

    let state = handlers::AppState::new(pool, config);
    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on port {port}");
    axum::serve(listener, app).await?;

    Ok(())
}
