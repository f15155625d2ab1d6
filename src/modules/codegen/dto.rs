use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateCodeRequest {
    /// Natural-language description of the algorithm to visualize.
    #[validate(length(min = 1, message = "Prompt must not be empty"))]
    pub prompt: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GeneratedCodeResponse {
    pub code: String,
}
