//! Threadgate error types.

use thiserror::Error;

use crate::hooks::EventKind;

/// Errors that can occur while setting up content gating.
///
/// Restriction outcomes (403 responses, redirects, notices) are not errors;
/// they are the intended behavior and carried by the guard result types.
#[derive(Debug, Error)]
pub enum GateError {
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A hook is already registered for this event.
    #[error("Hook already registered for event: {event}")]
    HookConflict {
        /// The event that already has a registered hook.
        event: EventKind,
    },
}
