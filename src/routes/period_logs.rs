use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::{ApiResult, OrNotFound};
use crate::models::{Id, NewPeriodLog, PeriodLog, PeriodLogPatch};
use super::extract::{JsonBody, PathParam, QueryParams};
use super::{AppState, LogQuery};

pub fn routes(store: AppState) -> Router {
    Router::new()
        .route("/api/period-logs", get(list_period_logs).post(create_period_log))
        .route("/api/period-logs/:id", get(get_period_log).patch(update_period_log))
        .with_state(store)
}

async fn create_period_log(
    State(store): State<AppState>,
    JsonBody(body): JsonBody<NewPeriodLog>,
) -> ApiResult<(StatusCode, Json<PeriodLog>)> {
    let log = store.period_logs().create(body).await;
    tracing::info!("🩸 Period log {} for user {} on {}", log.id, log.user_id, log.date);
    Ok((StatusCode::CREATED, Json(log)))
}

async fn list_period_logs(
    State(store): State<AppState>,
    QueryParams(query): QueryParams<LogQuery>,
) -> ApiResult<Json<Vec<PeriodLog>>> {
    let logs = match query.range()? {
        Some((start, end)) => {
            store
                .period_logs()
                .list_for_user_in_range(query.user_id, start, end)
                .await
        }
        None => store.period_logs().list_for_user(query.user_id).await,
    };
    Ok(Json(logs))
}

async fn get_period_log(
    State(store): State<AppState>,
    PathParam(id): PathParam<Id>,
) -> ApiResult<Json<PeriodLog>> {
    let log = store
        .period_logs()
        .get(id)
        .await
        .or_not_found(format!("period log {id}"))?;
    Ok(Json(log))
}

async fn update_period_log(
    State(store): State<AppState>,
    PathParam(id): PathParam<Id>,
    JsonBody(patch): JsonBody<PeriodLogPatch>,
) -> ApiResult<Json<PeriodLog>> {
    let log = store
        .period_logs()
        .update(id, patch)
        .await
        .or_not_found(format!("period log {id}"))?;
    Ok(Json(log))
}
