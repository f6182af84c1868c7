//! # Framework Errors
//!
//! Common error type shared by every state actor and its clients.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("State error: {0}")]
    StateError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the state's own error type from a `StateError`.
    ///
    /// Returns the original `FrameworkError` unchanged when it carries something else.
    pub fn downcast<E: std::error::Error + Send + Sync + 'static>(self) -> Result<E, Self> {
        match self {
            FrameworkError::StateError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(FrameworkError::StateError(other)),
            },
            other => Err(other),
        }
    }
}
