use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpotdeskError {
    #[error("Not in a spotdesk project. Run 'spotdesk init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .spotdesk/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Ticket not found: {0}")]
    TicketNotFound(String),

    #[error("Invalid ticket type: {0}")]
    InvalidTicketType(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SpotdeskError>;
