//! Session identity as supplied by the host's authentication layer.

/// The current authenticated actor, as reported by the host.
///
/// Threadgate never authenticates, stores credentials, or manages sessions.
/// The policy only consumes *presence or absence* of this value for the
/// current request or page load; the username exists so hosts can thread
/// the same value they already hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    /// Host-side username of the authenticated actor.
    pub username: String,
}

impl SessionIdentity {
    /// Create a session identity for the given username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
