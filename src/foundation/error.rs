/// Convenience result type used across the resampler.
pub type ResizeResult<T> = Result<T, ResizeError>;

/// Top-level error taxonomy used by resampling APIs.
#[derive(thiserror::Error, Debug)]
pub enum ResizeError {
    /// Invalid caller-provided geometry, filter name, options or buffer shape.
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal inconsistency detected while running a convolution pass.
    #[error("convolution error: {0}")]
    Convolution(String),

    /// Errors when serializing or deserializing options.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ResizeError {
    /// Build a [`ResizeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ResizeError::Convolution`] value.
    pub fn convolution(msg: impl Into<String>) -> Self {
        Self::Convolution(msg.into())
    }

    /// Build a [`ResizeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
