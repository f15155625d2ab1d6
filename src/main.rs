use backend::app;
use backend::config::settings::AppConfig;
use backend::state::AppState;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting server...");

    let config = AppConfig::new().expect("Missing required environment variables");
    let addr = format!("0.0.0.0:{}", config.server_port);

    let state = AppState::new(config);
    let app = app::create_app(state).await;

    let listener = tokio::net::TcpListener::bind(&addr).await.expect("Failed to bind address");
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.expect("Server error");
}
