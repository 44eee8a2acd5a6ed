//! API route assembly

pub mod health;
pub mod users;

use crate::state::AppState;
use axum::Router;

/// Routes nested under `/api` by `create_router`.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/users", users::router(state))
}
