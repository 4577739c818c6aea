use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::{ApiResult, OrNotFound};
use crate::models::{Id, MentalHealthLog, MentalHealthLogPatch, NewMentalHealthLog};
use super::extract::{JsonBody, PathParam, QueryParams};
use super::{validate, AppState, DateQuery, LogQuery};

pub fn routes(store: AppState) -> Router {
    Router::new()
        .route("/api/mental-health", get(list_entries).post(create_entry))
        .route("/api/mental-health/by-date", get(get_entry_by_date))
        .route("/api/mental-health/:id", get(get_entry).patch(update_entry))
        .with_state(store)
}

fn check_scores(scores: [(&str, Option<u8>); 4]) -> ApiResult<()> {
    for (field, value) in scores {
        if let Some(value) = value {
            validate::scale(field, value)?;
        }
    }
    Ok(())
}

async fn create_entry(
    State(store): State<AppState>,
    JsonBody(body): JsonBody<NewMentalHealthLog>,
) -> ApiResult<(StatusCode, Json<MentalHealthLog>)> {
    check_scores([
        ("stress_level", Some(body.stress_level)),
        ("anxiety_level", Some(body.anxiety_level)),
        ("mood_level", Some(body.mood_level)),
        ("sleep_quality", Some(body.sleep_quality)),
    ])?;

    let log = store.mental_health_logs().create(body).await;
    tracing::info!("🧘 Mental health entry {} for user {} on {}", log.id, log.user_id, log.date);
    Ok((StatusCode::CREATED, Json(log)))
}

async fn list_entries(
    State(store): State<AppState>,
    QueryParams(query): QueryParams<LogQuery>,
) -> ApiResult<Json<Vec<MentalHealthLog>>> {
    let logs = match query.range()? {
        Some((start, end)) => {
            store
                .mental_health_logs()
                .list_for_user_in_range(query.user_id, start, end)
                .await
        }
        None => store.mental_health_logs().list_for_user(query.user_id).await,
    };
    Ok(Json(logs))
}

async fn get_entry_by_date(
    State(store): State<AppState>,
    QueryParams(query): QueryParams<DateQuery>,
) -> ApiResult<Json<MentalHealthLog>> {
    let log = store
        .mental_health_logs()
        .get_for_user_on_date(query.user_id, query.date)
        .await
        .or_not_found(format!(
            "mental health entry for user {} on {}",
            query.user_id, query.date
        ))?;
    Ok(Json(log))
}

async fn get_entry(
    State(store): State<AppState>,
    PathParam(id): PathParam<Id>,
) -> ApiResult<Json<MentalHealthLog>> {
    let log = store
        .mental_health_logs()
        .get(id)
        .await
        .or_not_found(format!("mental health entry {id}"))?;
    Ok(Json(log))
}

async fn update_entry(
    State(store): State<AppState>,
    PathParam(id): PathParam<Id>,
    JsonBody(patch): JsonBody<MentalHealthLogPatch>,
) -> ApiResult<Json<MentalHealthLog>> {
    check_scores([
        ("stress_level", patch.stress_level),
        ("anxiety_level", patch.anxiety_level),
        ("mood_level", patch.mood_level),
        ("sleep_quality", patch.sleep_quality),
    ])?;

    let log = store
        .mental_health_logs()
        .update(id, patch)
        .await
        .or_not_found(format!("mental health entry {id}"))?;
    Ok(Json(log))
}
