//! Error taxonomy for dimension resolution
//!
//! Only user input and the gateway boundary can fail. Table and index are
//! total functions; gateway failures are converted into terminal
//! [`Resolution`](crate::resolver::Resolution) values, never propagated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a caller of [`Resolver::resolve`](crate::resolver::Resolver::resolve)
/// must handle before any lookup happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No quantity name supplied. Recoverable: re-prompt the user. Never
    /// reaches the table or the gateway.
    #[error("no quantity name provided")]
    EmptyInput,
}

/// Why a fallback resolution terminated without an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message")]
pub enum NotFoundReason {
    /// No inference credential configured; the fallback feature is disabled
    /// and no gateway call was attempted.
    GatewayUnavailable,
    /// The gateway call failed; the underlying message is forwarded for
    /// diagnostics and is not parsed.
    GatewayError(String),
}

impl std::fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotFoundReason::GatewayUnavailable => {
                write!(f, "AI fallback disabled: no inference credential configured")
            }
            NotFoundReason::GatewayError(message) => {
                write!(f, "AI lookup failed: {}", message)
            }
        }
    }
}
