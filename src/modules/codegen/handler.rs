use super::dto::{GenerateCodeRequest, GeneratedCodeResponse};
use super::service::CodegenService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

/// Generate Manim code from a natural-language prompt
#[utoipa::path(
    post,
    path = "/code/generate",
    request_body = GenerateCodeRequest,
    responses(
        (status = 201, description = "Code generated", body = ApiResponse<GeneratedCodeResponse>),
        (status = 400, description = "Bad Request"),
        (status = 500, description = "Code generation failed upstream")
    ),
    tag = "Code"
)]
pub async fn generate_code(
    State(state): State<AppState>,
    Json(req): Json<GenerateCodeRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return ApiError(e.to_string(), StatusCode::BAD_REQUEST).into_response();
    }

    match CodegenService::generate(state, req.prompt).await {
        Ok(code) => ApiSuccess(
            ApiResponse::success(GeneratedCodeResponse { code }, "Code generated successfully"),
            StatusCode::CREATED,
        )
        .into_response(),
        Err(e) => {
            tracing::error!("Code generation failed: {e:#}");
            ApiError(format!("{e:#}"), StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
    }
}
