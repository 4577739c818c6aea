use axum::{extract::State, routing::get, Json, Router};

use crate::error::{ApiResult, OrNotFound};
use crate::models::MotivationalQuote;
use super::AppState;

pub fn routes(store: AppState) -> Router {
    Router::new()
        .route("/api/quotes", get(list_quotes))
        .route("/api/quotes/random", get(random_quote))
        .with_state(store)
}

async fn list_quotes(State(store): State<AppState>) -> Json<Vec<MotivationalQuote>> {
    Json(store.quotes().list().await)
}

async fn random_quote(State(store): State<AppState>) -> ApiResult<Json<MotivationalQuote>> {
    let quote = store.quotes().random().await.or_not_found("quote")?;
    Ok(Json(quote))
}
