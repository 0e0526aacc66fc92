use axum::{
    http::StatusCode,
    response::{Html, Json},
};
use axum::extract::State;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;

use pizzeria_menu::PizzaSpecial;
use pizzeria_store::PizzaStore;

use crate::state::AppState;

/// `GET /specials` - the full specials listing, ordered by base price
/// descending. Any store failure surfaces as a bare 500.
pub async fn get_specials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PizzaSpecial>>, StatusCode> {
    let specials = fetch_specials(&state.config.database_path).map_err(|e| {
        error!("Specials query failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(specials))
}

fn fetch_specials(database_path: &str) -> pizzeria_store::Result<Vec<PizzaSpecial>> {
    let store = PizzaStore::open(database_path)?;
    store.specials_by_price_desc()
}

pub async fn health_check() -> Result<Json<Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "service": "pizza-server",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

/// Fallback for every unmatched path: the host page for the interactive UI.
pub async fn host_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Pizzeria</title>
</head>
<body>
    <h1>Pizzeria</h1>
    <p>Today's specials are served at <a href="/specials">/specials</a>.</p>
</body>
</html>
"#,
    )
}
