use axum::http::StatusCode;
use std::path::PathBuf;
use std::time::Duration;

/// Failure modes of the rendering pipeline. All are terminal for the
/// current job; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The submitted code declares no class deriving from `Scene`.
    #[error("No Scene class found in the provided code")]
    EntryPointMissing,

    /// The renderer exited non-zero; carries its stderr verbatim.
    #[error("Manim execution failed: {stderr}")]
    RendererFailed { stderr: String },

    /// The renderer exceeded the wall-clock budget and was killed.
    #[error("Video generation timed out after {0:?}")]
    Timeout(Duration),

    /// Clean exit, but no video file anywhere under the job directory.
    #[error("No rendered video found under {}", .0.display())]
    ArtifactMissing(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Status the error maps to at the HTTP boundary. Only a missing entry
    /// point is the client's fault; everything else is on our side.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RenderError::EntryPointMissing => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
