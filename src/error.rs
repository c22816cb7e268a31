use thiserror::Error;

/// Library error type for mcrender operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The tooltip builder was finalized without an item to describe.
    #[error("tooltip builder requires an item")]
    MissingItem,

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),

    /// PNG encode/decode error.
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// A background render task panicked or was cancelled.
    #[error("render task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
