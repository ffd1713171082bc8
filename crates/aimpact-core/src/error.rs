//! Error types for aimpact-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors from the chat and content generation features.
///
/// Text analysis itself never fails; see [`crate::metrics::analyze`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    /// The generation prompt is empty or whitespace only.
    #[error("prompt is empty")]
    EmptyPrompt,

    /// The chat message is empty or whitespace only.
    #[error("message is empty")]
    EmptyMessage,

    /// An unknown template name was provided.
    #[error("unknown template: {name}. Use: {available}")]
    UnknownTemplate {
        /// The template name that was requested.
        name: String,
        /// Comma-separated list of available template names.
        available: String,
    },
}

/// Result type alias using [`ContentError`].
pub type ContentResult<T> = Result<T, ContentError>;
