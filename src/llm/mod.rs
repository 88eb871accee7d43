//! Text-generation service boundary.
//!
//! The pipeline only ever sees the `GenerationClient` trait and a structured
//! error taxonomy; retry logic branches on an explicit transient/fatal
//! variant instead of string-matching error text.

use thiserror::Error;

mod chat;

pub use chat::{ChatClient, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Classified failure of a generation call.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service asked us to slow down (HTTP 429)
    #[error("generation service rate-limited the request: {0}")]
    RateLimited(String),

    /// The service is temporarily overloaded (HTTP 502/503)
    #[error("generation service overloaded: {0}")]
    Overloaded(String),

    /// Anything else: auth failures, bad requests, transport errors,
    /// unparseable responses
    #[error("generation service failure: {0}")]
    Fatal(String),
}

impl ServiceError {
    /// Transient errors are worth a backoff-and-retry; fatal ones are not.
    pub fn is_transient(&self) -> bool {
        matches!(self, ServiceError::RateLimited(_) | ServiceError::Overloaded(_))
    }
}

/// Request envelope shared by client implementations.
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    /// System instruction pinning the copywriter behavior
    pub system: &'a str,
    /// Fully rendered user prompt
    pub prompt: &'a str,
    /// Output length bound, in tokens
    pub max_tokens: usize,
    /// Sampling temperature for this attempt
    pub temperature: f32,
}

/// Trait implemented by concrete generation backends.
///
/// The orchestrator is generic over this so tests drive it with a scripted
/// mock instead of a network service.
pub trait GenerationClient {
    /// Issue one completion call and return the raw response text.
    fn complete(&self, request: &GenerationRequest<'_>) -> Result<String, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(ServiceError::RateLimited("429".into()).is_transient());
        assert!(ServiceError::Overloaded("503".into()).is_transient());
        assert!(!ServiceError::Fatal("401".into()).is_transient());
    }
}
