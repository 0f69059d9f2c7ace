use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("controller returned status {status} for {endpoint}")]
    Fetch { endpoint: String, status: u16 },

    #[error("SmartZone API error: {0}")]
    Api(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExporterError>;
