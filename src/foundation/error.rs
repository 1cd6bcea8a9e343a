/// Convenience result type used across the crate.
pub type ChoroplethResult<T> = Result<T, ChoroplethError>;

/// Top-level error taxonomy used by loading, configuration and rendering APIs.
///
/// The framing core never returns this type: unresolvable focus targets and
/// degenerate geometry degrade to documented defaults instead.
#[derive(thiserror::Error, Debug)]
pub enum ChoroplethError {
    /// Invalid user-provided values (viewport, config, counts).
    #[error("validation error: {0}")]
    Validation(String),

    /// Input data that cannot be interpreted as features or counts.
    #[error("data error: {0}")]
    Data(String),

    /// Failures while building or rasterizing a map scene.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChoroplethError {
    /// Build a [`ChoroplethError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChoroplethError::Data`] value.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Build a [`ChoroplethError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ChoroplethError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ChoroplethError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
