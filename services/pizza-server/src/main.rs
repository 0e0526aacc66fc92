use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod handlers;
mod state;

use config::Config;
use state::AppState;

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/specials", get(handlers::get_specials))
        .route("/health", get(handlers::health_check))
        .fallback(handlers::host_page)
        .with_state(state)
        .layer(ServiceBuilder::new().into_inner())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // Seed before the listener starts, so the first request can never
    // observe an unseeded database.
    let mut store = pizzeria_store::PizzaStore::open(&config.database_path)?;
    if store.was_created() {
        pizzeria_store::seed::initialize(&mut store)?;
    }
    drop(store);

    let state = Arc::new(AppState::new(config.clone()));
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Pizza server listening on {}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
