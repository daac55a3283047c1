use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoriesError>;

#[derive(Debug, Error)]
pub enum StoriesError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),

    #[error("Error operating on Sled database: {0}")]
    SledError(#[from] sled::Error),

    #[error("Error parsing duration: {0}")]
    DurationParseError(#[from] duration_str::DError),

    #[error("Error converting bytes to UTF-8 string: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    #[error("Other: {0}")]
    Other(String),
}

impl<T> From<StoriesError> for Result<T> {
    fn from(val: StoriesError) -> Self {
        Err(val)
    }
}
