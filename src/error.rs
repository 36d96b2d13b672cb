use thiserror::Error;

/// Main error type for the cooperative ledger
#[derive(Error, Debug)]
pub enum CoopError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Input errors
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("Input closed before the session was complete")]
    InputClosed,

    // Arithmetic errors
    #[error("Arithmetic overflow computing {0}")]
    Overflow(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CoopError
pub type Result<T> = std::result::Result<T, CoopError>;
