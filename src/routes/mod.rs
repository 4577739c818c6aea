use std::sync::Arc;

use axum::{routing::get, Router};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::models::{day, Id};
use crate::store::Storage;

pub mod content;
pub mod daily_logs;
mod extract;
pub mod mental_health;
pub mod period_logs;
pub mod quotes;
pub mod users;
mod validate;

pub type AppState = Arc<Storage>;

pub fn router(store: AppState) -> Router {
    Router::new()
        .merge(users::routes(store.clone()))
        .merge(period_logs::routes(store.clone()))
        .merge(daily_logs::routes(store.clone()))
        .merge(mental_health::routes(store.clone()))
        .merge(content::routes(store.clone()))
        .merge(quotes::routes(store))
        .route("/health", get(|| async { "✅ Backend up" }))
}

/// `?user_id=&start_date=&end_date=` on the log listings. Both bounds or
/// neither.
#[derive(Debug, Deserialize)]
pub struct LogQuery {
    pub user_id: Id,
    #[serde(default, deserialize_with = "day::deserialize_option")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "day::deserialize_option")]
    pub end_date: Option<NaiveDate>,
}

impl LogQuery {
    pub fn range(&self) -> ApiResult<Option<(NaiveDate, NaiveDate)>> {
        match (self.start_date, self.end_date) {
            (None, None) => Ok(None),
            (Some(start), Some(end)) if start <= end => Ok(Some((start, end))),
            (Some(start), Some(end)) => Err(ApiError::BadRequest(format!(
                "start_date {start} is after end_date {end}"
            ))),
            _ => Err(ApiError::BadRequest(
                "start_date and end_date must be given together".into(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub user_id: Id,
    #[serde(deserialize_with = "day::deserialize")]
    pub date: NaiveDate,
}
