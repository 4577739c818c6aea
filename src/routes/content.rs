use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::{ApiResult, OrNotFound};
use crate::models::{EducationalContent, Id};
use super::extract::{PathParam, QueryParams};
use super::AppState;

#[derive(Debug, Deserialize)]
pub struct ContentQuery {
    pub category: Option<String>,
}

pub fn routes(store: AppState) -> Router {
    Router::new()
        .route("/api/content", get(list_content))
        .route("/api/content/:id", get(get_content))
        .with_state(store)
}

async fn list_content(
    State(store): State<AppState>,
    QueryParams(query): QueryParams<ContentQuery>,
) -> Json<Vec<EducationalContent>> {
    let items = match query.category {
        Some(category) => store.content().list_by_category(&category).await,
        None => store.content().list().await,
    };
    Json(items)
}

async fn get_content(
    State(store): State<AppState>,
    PathParam(id): PathParam<Id>,
) -> ApiResult<Json<EducationalContent>> {
    let item = store
        .content()
        .get(id)
        .await
        .or_not_found(format!("content {id}"))?;
    Ok(Json(item))
}
