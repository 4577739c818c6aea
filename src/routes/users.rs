use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::error::{ApiError, ApiResult, OrNotFound};
use crate::models::{Id, NewUser, User, UserPatch};
use super::extract::{JsonBody, PathParam};
use super::{validate, AppState};

pub fn routes(store: AppState) -> Router {
    Router::new()
        .route("/api/users", post(create_user))
        .route("/api/users/:id", get(get_user).patch(update_user))
        .route("/api/users/by-username/:username", get(get_user_by_username))
        .with_state(store)
}

async fn ensure_available(
    store: &AppState,
    username: Option<&str>,
    email: Option<&str>,
    current: Option<Id>,
) -> ApiResult<()> {
    let users = store.users();
    if let Some(username) = username {
        if let Some(existing) = users.get_by_username(username).await {
            if Some(existing.id) != current {
                return Err(ApiError::Conflict(format!("username `{username}` is taken")));
            }
        }
    }
    if let Some(email) = email {
        if let Some(existing) = users.get_by_email(email).await {
            if Some(existing.id) != current {
                return Err(ApiError::Conflict(format!("email `{email}` is already registered")));
            }
        }
    }
    Ok(())
}

async fn create_user(
    State(store): State<AppState>,
    JsonBody(body): JsonBody<NewUser>,
) -> ApiResult<(StatusCode, Json<User>)> {
    validate::non_empty("username", &body.username)?;
    validate::non_empty("password", &body.password)?;
    validate::email(&body.email)?;
    ensure_available(&store, Some(&body.username), Some(&body.email), None).await?;

    let user = store.users().create(body).await;
    tracing::info!("🧍 Registered user {} ({})", user.id, user.username);
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user(
    State(store): State<AppState>,
    PathParam(id): PathParam<Id>,
) -> ApiResult<Json<User>> {
    let user = store.users().get(id).await.or_not_found(format!("user {id}"))?;
    Ok(Json(user))
}

async fn get_user_by_username(
    State(store): State<AppState>,
    PathParam(username): PathParam<String>,
) -> ApiResult<Json<User>> {
    let user = store
        .users()
        .get_by_username(&username)
        .await
        .or_not_found(format!("user `{username}`"))?;
    Ok(Json(user))
}

async fn update_user(
    State(store): State<AppState>,
    PathParam(id): PathParam<Id>,
    JsonBody(patch): JsonBody<UserPatch>,
) -> ApiResult<Json<User>> {
    if let Some(username) = &patch.username {
        validate::non_empty("username", username)?;
    }
    if let Some(password) = &patch.password {
        validate::non_empty("password", password)?;
    }
    if let Some(email) = &patch.email {
        validate::email(email)?;
    }
    ensure_available(&store, patch.username.as_deref(), patch.email.as_deref(), Some(id)).await?;

    let user = store
        .users()
        .update(id, patch)
        .await
        .or_not_found(format!("user {id}"))?;
    Ok(Json(user))
}
