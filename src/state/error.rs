// Error types for the window state store

use thiserror::Error;

/// Failures the store can report. Operations on unknown window ids are not
/// errors; they are silent no-ops returning `None`.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("App not found: {0}")]
    UnknownApp(String),

    #[error("Invalid resize direction: {0}")]
    InvalidResizeDirection(String),

    #[error("Invalid window manager config: {0}")]
    InvalidConfig(String),

    #[error("Failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type StateResult<T> = Result<T, StateError>;
