use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    FrontendUrl,
    GeminiApiKey,
    GeminiModel,
    VideosDir,
    ManimBin,
    RenderTimeoutSecs,
    MaxConcurrentRenders,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "PORT",
            EnvKey::FrontendUrl => "FRONTEND_URL",
            EnvKey::GeminiApiKey => "GEMINI_API_KEY",
            EnvKey::GeminiModel => "GEMINI_MODEL",
            EnvKey::VideosDir => "VIDEOS_DIR",
            EnvKey::ManimBin => "MANIM_BIN",
            EnvKey::RenderTimeoutSecs => "RENDER_TIMEOUT_SECS",
            EnvKey::MaxConcurrentRenders => "MAX_CONCURRENT_RENDERS",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
