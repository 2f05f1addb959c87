mod middleware;
mod routes;

pub use middleware::log_request_errors;
pub use routes::{AUDIO_FIELD, ErrorResponse, HealthResponse, PredictResponse, health, predict};
