/// Convenience alias for results carrying [`EsplosoError`].
pub type EsplosoResult<T> = Result<T, EsplosoError>;

/// Crate-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum EsplosoError {
    /// A boundary input (assembly JSON, timeline configuration) violated an invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// An animation value or configuration was unusable.
    #[error("animation error: {0}")]
    Animation(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, preserved with its source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EsplosoError {
    /// Build a [`EsplosoError::Validation`] from a message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`EsplosoError::Animation`] from a message.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`EsplosoError::Serde`] from a message.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
