use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateVideoRequest {
    /// Manim source to render. Must declare a class deriving from `Scene`.
    #[serde(rename = "pythonCode")]
    #[validate(length(min = 1, message = "Code must not be empty"))]
    pub python_code: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateVideoResponse {
    pub video_id: Uuid,
    /// Relative retrieval path for the rendered video.
    pub video_url: String,
}
