//! Error types for nova-emoji
//!
//! Provides standardized error handling across the extension.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the dataset or preferences
#[derive(Debug, Error)]
pub enum EmojiError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// SQLite errors from the emoji database
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Database connection mutex was poisoned
    #[error("Database lock poisoned: {0}")]
    Lock(String),

    /// Database file does not exist
    #[error("Emoji database not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Refused to overwrite an existing database
    #[error("Refusing to overwrite existing file: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Dataset import errors
    #[error("Dataset parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for nova-emoji operations
pub type EmojiResult<T> = Result<T, EmojiError>;
