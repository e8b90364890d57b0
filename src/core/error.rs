use thiserror::Error;

#[derive(Error, Debug)]
pub enum MusterError {
    #[error("Unit not found: {0}")]
    UnitNotFound(String),

    #[error("Army not found: {0}")]
    ArmyNotFound(String),

    #[error("Malformed unit '{name}': {reason}")]
    MalformedUnit { name: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, MusterError>;
