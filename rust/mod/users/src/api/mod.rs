mod users;

use std::sync::Arc;

use axum::Router;

use crate::service::UserService;

/// Shared application state.
pub type AppState = Arc<UserService>;

/// Build the users API router.
///
/// Routes:
/// - `GET    /users?search=`  : list / search by name
/// - `POST   /users`          : create
/// - `DELETE /users/{user_id}`: delete
pub fn build_router(svc: Arc<UserService>) -> Router {
    Router::new().merge(users::routes()).with_state(svc)
}
