//! staff-api — employee records CRUD service
//!
//! Thin HTTP layer over a single `employees` table: route declarations,
//! field marshaling, and pass-through to the store. See `api` and `db`.

use staff_api::api;
use staff_api::config::Config;
use staff_api::state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staff_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let state = AppState::new(&config).await?;
    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("staff-api listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
