//! Guards for profile read endpoints.
//!
//! Each guard wraps an existing host read operation (profile show, user
//! activity listing). When the policy restricts, the wrapped handler is
//! never invoked and the caller receives a structured 403 payload; when it
//! does not, the handler's response passes through unchanged. The guards
//! mutate no state and have no failure modes of their own: denial *is* the
//! intended outcome for anonymous access, not a guard fault.

use serde::Serialize;
use tracing::debug;

use crate::i18n::{keys, message, MessageCatalog};
use crate::policy::access::PolicySnapshot;

/// The guarded host read endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    /// Fetch of a single user's profile.
    ProfileShow,
    /// Listing of a user's posts and activity.
    UserActivity,
}

/// Structured error payload returned when an endpoint is restricted.
///
/// Serializes to the wire body `{"error": "<localized message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Localized, human-readable error message.
    pub error: String,
}

impl ApiError {
    /// HTTP status code accompanying every restriction payload.
    pub const STATUS: u16 = 403;

    /// Serialize to the JSON wire body.
    pub fn to_json(&self) -> String {
        serde_json::json!({ "error": self.error }).to_string()
    }
}

/// Result of consulting a guard before running the wrapped handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Delegate to the wrapped handler unchanged.
    Allowed,
    /// Short-circuit with a 403 response; do not invoke the handler.
    Denied(ApiError),
}

/// Check an endpoint against the policy.
///
/// Both guarded endpoints restrict under the same condition and share the
/// same message key, so one check covers them; the endpoint kind exists
/// for dispatch and logging.
pub fn guard_endpoint(
    endpoint: EndpointKind,
    policy: &PolicySnapshot,
    catalog: &dyn MessageCatalog,
) -> GuardOutcome {
    if policy.restricts_profiles() {
        debug!(?endpoint, "restricting anonymous endpoint access");
        GuardOutcome::Denied(ApiError {
            error: message(catalog, keys::PROFILE_RESTRICTED),
        })
    } else {
        GuardOutcome::Allowed
    }
}

/// Run a host handler behind the guard.
///
/// Returns the handler's `(status, body)` untouched when access is
/// allowed, or `(403, {"error": ...})` when restricted. The handler is not
/// invoked on the denied path.
pub fn wrap<H>(
    endpoint: EndpointKind,
    policy: &PolicySnapshot,
    catalog: &dyn MessageCatalog,
    handler: H,
) -> (u16, String)
where
    H: FnOnce() -> (u16, String),
{
    match guard_endpoint(endpoint, policy, catalog) {
        GuardOutcome::Allowed => handler(),
        GuardOutcome::Denied(err) => (ApiError::STATUS, err.to_json()),
    }
}
