use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};

pub mod dto;
pub mod error;
pub mod handler;
pub mod inspector;
pub mod renderer;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(handler::generate_video))
        .route("/{id}", get(handler::get_video))
}
