use crate::docs::ApiDoc;
use crate::state::AppState;
use axum::http::{HeaderValue, Method, header};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Origin of the deployed frontend, always allowed alongside the configured one.
const DEPLOYED_FRONTEND_ORIGIN: &str = "https://algorithm-visualizer-manim.vercel.app";

pub fn configure_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(base_routes())
        .nest("/code", crate::modules::codegen::router())
        .nest("/video", crate::modules::video::router())
        .layer(cors_layer(&state.config.frontend_url))
}

fn base_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            axum::routing::get(|| async { Json(serde_json::json!({ "message": "Algorithm Visualizer Backend" })) }),
        )
        .route("/health", axum::routing::get(|| async { "ok" }))
}

fn cors_layer(frontend_url: &str) -> CorsLayer {
    let origins: Vec<HeaderValue> = [frontend_url, DEPLOYED_FRONTEND_ORIGIN]
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
