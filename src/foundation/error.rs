/// Convenience result type used across Orrery.
pub type OrreryResult<T> = Result<T, OrreryError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum OrreryError {
    /// Invalid authored data (non-finite transforms, bad camera parameters,
    /// zero viewports, degenerate light directions).
    #[error("validation error: {0}")]
    Validation(String),

    /// Structural scene-graph faults (unknown node ids, parent cycles).
    #[error("scene error: {0}")]
    Scene(String),

    /// Faults raised by or on behalf of a render target.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or collaborators.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OrreryError {
    /// Build an [`OrreryError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`OrreryError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build an [`OrreryError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
