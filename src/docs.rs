use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::codegen::handler::generate_code,
        crate::modules::video::handler::generate_video,
        crate::modules::video::handler::get_video,
    ),
    components(
        schemas(
            crate::modules::codegen::dto::GenerateCodeRequest,
            crate::modules::codegen::dto::GeneratedCodeResponse,
            crate::modules::video::dto::GenerateVideoRequest,
            crate::modules::video::dto::GenerateVideoResponse,
        )
    ),
    tags(
        (name = "Code", description = "Manim code generation"),
        (name = "Video", description = "Video rendering and retrieval")
    )
)]
pub struct ApiDoc;
