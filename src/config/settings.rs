use crate::config::env::{self, EnvKey};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub frontend_url: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    /// Root directory for rendered videos; one subdirectory per job.
    pub videos_dir: PathBuf,
    pub manim_bin: String,
    pub render_timeout_secs: u64,
    pub max_concurrent_renders: usize,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 8000),
            frontend_url: env::get(EnvKey::FrontendUrl)?,
            gemini_api_key: env::get(EnvKey::GeminiApiKey)?,
            gemini_model: env::get_or(EnvKey::GeminiModel, "gemini-2.0-flash"),
            videos_dir: PathBuf::from(env::get_or(EnvKey::VideosDir, "videos")),
            manim_bin: env::get_or(EnvKey::ManimBin, "manim"),
            render_timeout_secs: env::get_parsed(EnvKey::RenderTimeoutSecs, 120),
            max_concurrent_renders: env::get_parsed(EnvKey::MaxConcurrentRenders, 2),
        })
    }
}
