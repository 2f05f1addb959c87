pub mod api;
pub mod app_state;
pub mod classifier;
pub mod config;

use axum::Router;
use axum::extract::{DefaultBodyLimit, Extension};
use axum::routing::{get, post};
use std::path::PathBuf;
use std::str::FromStr;
use tokio::net::TcpListener;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tracing::info;

//
// Re-export
//
pub use api::{ErrorResponse, HealthResponse, PredictResponse, health, log_request_errors, predict};
pub use app_state::AppState;
pub use classifier::{EMOTIONS, EmotionClassifier, RandomClassifier};
pub use config::Config;

pub async fn run(config: Config) {
    let listen_on_port = config.listen_on_port;

    // Parse workspace path
    let workspace_path =
        PathBuf::from_str(&config.workspace).expect("Failed to parse workspace dir");

    let state = AppState::new(&workspace_path)
        .await
        .expect("Failed to create app state");

    // CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Uploads carry whatever the client sends; no size cap applies.
        .route("/predict", post(predict).layer(DefaultBodyLimit::disable()))
        .route("/health", get(health))
        .layer(axum::middleware::from_fn(log_request_errors))
        .layer(cors)
        .layer(Extension(state));

    let addr = format!("0.0.0.0:{listen_on_port}");
    info!("Listening on {addr}");
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind API listener");

    axum::serve(listener, app).await.expect("API server error");
}
