use crate::state::AppState;
use axum::Router;

mod dto;
mod error;
pub(crate) mod extractors;
pub mod handlers;
mod password;
mod repo;
mod services;
mod validate;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::signup_routes())
        .merge(handlers::session_routes())
}
