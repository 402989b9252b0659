use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarmGuardError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Input error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] farmguard_common::Error),

    #[error(transparent)]
    Invocation(#[from] farmguard_common::InvocationError),
}

pub type Result<T> = std::result::Result<T, FarmGuardError>;
