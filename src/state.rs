use crate::config::settings::AppConfig;
use crate::infrastructure::llm::gemini::GeminiClient;
use crate::modules::video::renderer::ManimRenderer;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub llm: GeminiClient,
    pub renderer: ManimRenderer,
    /// Caps the number of renderer child processes alive at once.
    pub render_slots: Arc<Semaphore>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let llm = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_model.clone());
        let renderer = ManimRenderer::new(
            config.manim_bin.clone(),
            Duration::from_secs(config.render_timeout_secs),
        );
        let render_slots = Arc::new(Semaphore::new(config.max_concurrent_renders));

        Self {
            config,
            llm,
            renderer,
            render_slots,
        }
    }
}
