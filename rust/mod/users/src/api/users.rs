use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};

use billing_core::ServiceError;

use crate::api::AppState;
use crate::model::{CreateUserInput, ListQuery, UserRecord};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/", delete(delete_user_without_id))
        .route("/users/{user_id}", delete(delete_user))
}

// ---------------------------------------------------------------------------
// GET /users
// ---------------------------------------------------------------------------

async fn list_users(
    State(svc): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<UserRecord>>, ServiceError> {
    let users = svc.list(query.term()).await?;
    Ok(Json(users))
}

// ---------------------------------------------------------------------------
// POST /users
// ---------------------------------------------------------------------------

async fn create_user(
    State(svc): State<AppState>,
    Json(input): Json<CreateUserInput>,
) -> Result<(StatusCode, Json<UserRecord>), ServiceError> {
    let user = svc.create(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

// ---------------------------------------------------------------------------
// DELETE /users/:user_id
// ---------------------------------------------------------------------------

async fn delete_user(
    State(svc): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let deleted = svc.delete(&user_id).await?;
    Ok(Json(serde_json::json!({
        "message": "User deleted successfully",
        "data": deleted,
    })))
}

async fn delete_user_without_id() -> ServiceError {
    ServiceError::Validation("User ID is required".into())
}
