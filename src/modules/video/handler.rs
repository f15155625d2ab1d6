use super::dto::{GenerateVideoRequest, GenerateVideoResponse};
use super::service::RenderService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use axum_extra::{TypedHeader, headers::Range};
use axum_range::{KnownSize, Ranged};
use uuid::Uuid;
use validator::Validate;

/// Render submitted Manim code into a downloadable video
#[utoipa::path(
    post,
    path = "/video/generate",
    request_body = GenerateVideoRequest,
    responses(
        (status = 201, description = "Video rendered", body = ApiResponse<GenerateVideoResponse>),
        (status = 400, description = "No Scene class found in the submitted code"),
        (status = 500, description = "Renderer failure, timeout, or missing output")
    ),
    tag = "Video"
)]
pub async fn generate_video(
    State(state): State<AppState>,
    Json(req): Json<GenerateVideoRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return ApiError(e.to_string(), StatusCode::BAD_REQUEST).into_response();
    }

    match RenderService::render(state, req.python_code).await {
        Ok(artifact) => {
            let res = GenerateVideoResponse {
                video_id: artifact.id,
                video_url: format!("/video/{}", artifact.id),
            };
            ApiSuccess(
                ApiResponse::success(res, "Video generated successfully"),
                StatusCode::CREATED,
            )
            .into_response()
        }
        Err(e) => {
            tracing::error!("Render failed: {e}");
            ApiError(e.to_string(), e.status_code()).into_response()
        }
    }
}

/// Download a rendered video
#[utoipa::path(
    get,
    path = "/video/{id}",
    params(
        ("id" = Uuid, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video content"),
        (status = 206, description = "Partial content"),
        (status = 404, description = "Video not found")
    ),
    tag = "Video"
)]
pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    range: Option<TypedHeader<Range>>,
) -> impl IntoResponse {
    let path = RenderService::artifact_path(&state.config.videos_dir, id);

    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(_) => return ApiError("Video not found".to_string(), StatusCode::NOT_FOUND).into_response(),
    };

    let body = match KnownSize::file(file).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Failed to stat {}: {e}", path.display());
            return ApiError("Video not readable".to_string(), StatusCode::INTERNAL_SERVER_ERROR)
                .into_response();
        }
    };

    let content_type = mime_guess::from_path(&path).first_or_octet_stream().to_string();
    let disposition = format!("attachment; filename=\"{id}.mp4\"");
    let range = range.map(|TypedHeader(range)| range);

    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Ranged::new(range, body),
    )
        .into_response()
}
