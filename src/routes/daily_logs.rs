use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::{ApiResult, OrNotFound};
use crate::models::{DailyLog, DailyLogPatch, Id, NewDailyLog};
use super::extract::{JsonBody, PathParam, QueryParams};
use super::{validate, AppState, DateQuery, LogQuery};

pub fn routes(store: AppState) -> Router {
    Router::new()
        .route("/api/daily-logs", get(list_daily_logs).post(create_daily_log))
        .route("/api/daily-logs/by-date", get(get_daily_log_by_date))
        .route("/api/daily-logs/:id", get(get_daily_log).patch(update_daily_log))
        .with_state(store)
}

fn check_fields(
    energy: Option<u8>,
    sleep_hours: Option<f32>,
    exercise_duration: Option<u32>,
) -> ApiResult<()> {
    if let Some(energy) = energy {
        validate::scale("energy", energy)?;
    }
    if let Some(hours) = sleep_hours {
        validate::sleep_hours(hours)?;
    }
    if let Some(minutes) = exercise_duration {
        validate::exercise_duration(minutes)?;
    }
    Ok(())
}

async fn create_daily_log(
    State(store): State<AppState>,
    JsonBody(body): JsonBody<NewDailyLog>,
) -> ApiResult<(StatusCode, Json<DailyLog>)> {
    validate::non_empty("mood", &body.mood)?;
    check_fields(Some(body.energy), body.sleep_hours, body.exercise_duration)?;

    let log = store.daily_logs().create(body).await;
    tracing::info!("📝 Daily log {} for user {} on {}", log.id, log.user_id, log.date);
    Ok((StatusCode::CREATED, Json(log)))
}

async fn list_daily_logs(
    State(store): State<AppState>,
    QueryParams(query): QueryParams<LogQuery>,
) -> ApiResult<Json<Vec<DailyLog>>> {
    let logs = match query.range()? {
        Some((start, end)) => {
            store
                .daily_logs()
                .list_for_user_in_range(query.user_id, start, end)
                .await
        }
        None => store.daily_logs().list_for_user(query.user_id).await,
    };
    Ok(Json(logs))
}

async fn get_daily_log_by_date(
    State(store): State<AppState>,
    QueryParams(query): QueryParams<DateQuery>,
) -> ApiResult<Json<DailyLog>> {
    let log = store
        .daily_logs()
        .get_for_user_on_date(query.user_id, query.date)
        .await
        .or_not_found(format!("daily log for user {} on {}", query.user_id, query.date))?;
    Ok(Json(log))
}

async fn get_daily_log(
    State(store): State<AppState>,
    PathParam(id): PathParam<Id>,
) -> ApiResult<Json<DailyLog>> {
    let log = store
        .daily_logs()
        .get(id)
        .await
        .or_not_found(format!("daily log {id}"))?;
    Ok(Json(log))
}

async fn update_daily_log(
    State(store): State<AppState>,
    PathParam(id): PathParam<Id>,
    JsonBody(patch): JsonBody<DailyLogPatch>,
) -> ApiResult<Json<DailyLog>> {
    if let Some(mood) = &patch.mood {
        validate::non_empty("mood", mood)?;
    }
    check_fields(
        patch.energy,
        patch.sleep_hours.flatten(),
        patch.exercise_duration.flatten(),
    )?;

    let log = store
        .daily_logs()
        .update(id, patch)
        .await
        .or_not_found(format!("daily log {id}"))?;
    Ok(Json(log))
}
