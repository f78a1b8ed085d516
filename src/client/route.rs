//! Navigation guard for user-profile views.
//!
//! The host router asks the guard about a pending navigation before
//! committing it. Enforcement happens exactly once, at the navigation
//! layer; the redirect is one-shot and non-retryable.

use tracing::debug;

use crate::i18n::{keys, message, MessageCatalog};
use crate::policy::access::PolicySnapshot;

/// Kinds of client-side routes the guard can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// A user-profile view.
    UserProfile,
    /// Any route the gate does not care about.
    Other,
}

/// What the host router should do with a pending navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDirective {
    /// Let the navigation proceed normally.
    Proceed,
    /// Cancel the navigation, present the blocking notice, and go to the
    /// fallback listing view instead.
    Redirect {
        /// Route identifier of the fallback listing view.
        to: String,
        /// Localized blocking notice to present.
        notice: String,
    },
}

/// Decide a pending navigation against the policy.
///
/// The policy snapshot is captured once per page load (see
/// [`crate::Threadgate::new`]); hosts where a session can appear without a
/// full reload should call [`crate::Threadgate::refresh_session`] on login.
pub fn guard_navigation(
    route: RouteKind,
    policy: &PolicySnapshot,
    fallback_route: &str,
    catalog: &dyn MessageCatalog,
) -> NavigationDirective {
    if route == RouteKind::UserProfile && policy.restricts_profiles() {
        debug!(fallback_route, "redirecting anonymous profile navigation");
        NavigationDirective::Redirect {
            to: fallback_route.to_string(),
            notice: message(catalog, keys::PROFILE_ACCESS_MESSAGE),
        }
    } else {
        NavigationDirective::Proceed
    }
}
