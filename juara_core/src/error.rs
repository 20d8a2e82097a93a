use thiserror::Error;

#[derive(Error, Debug)]
pub enum JuaraError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Unknown {kind}: {value}")]
    Parse { kind: &'static str, value: String },
}

pub type JuaraResult<T> = Result<T, JuaraError>;
