//! Localized string lookup.
//!
//! Every user-visible string is resolved by key through the host's
//! localization catalog, with a compiled-in default when the host has no
//! translation. Threadgate never hard-codes display text at its
//! enforcement points.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Message keys used by threadgate.
pub mod keys {
    /// Blocking notice shown when profile navigation is cancelled.
    pub const PROFILE_ACCESS_MESSAGE: &str = "threadgate.profile_access_message";

    /// Error body for restricted profile API responses.
    pub const PROFILE_RESTRICTED: &str = "threadgate.profile_restricted";

    /// Placeholder label shown in place of a hidden author name.
    pub const HIDDEN_USER: &str = "threadgate.hidden_user";

    /// Call-to-action overlay title.
    pub const OVERLAY_TITLE: &str = "threadgate.overlay_title";

    /// Call-to-action overlay body text.
    pub const OVERLAY_MESSAGE: &str = "threadgate.overlay_message";

    /// Signup button label on the overlay.
    pub const SIGNUP_BUTTON: &str = "threadgate.signup_button";

    /// Login button label on the overlay.
    pub const LOGIN_BUTTON: &str = "threadgate.login_button";

    /// Notice shown instead of the user card on obscured posts.
    pub const SIGNUP_TO_SEE_USERS: &str = "threadgate.signup_to_see_users";
}

/// Compiled-in fallback strings, matching the reference plugin's defaults.
static DEFAULTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            keys::PROFILE_ACCESS_MESSAGE,
            "Please sign up or log in to view user profiles.",
        ),
        (
            keys::PROFILE_RESTRICTED,
            "Please sign up or log in to view user profiles.",
        ),
        (keys::HIDDEN_USER, "Community Member"),
        (keys::OVERLAY_TITLE, "Want to read more?"),
        (
            keys::OVERLAY_MESSAGE,
            "Sign up for free to unlock all discussions and join the conversation!",
        ),
        (keys::SIGNUP_BUTTON, "Sign Up Free"),
        (keys::LOGIN_BUTTON, "Already a member? Log In"),
        (
            keys::SIGNUP_TO_SEE_USERS,
            "Sign up to see who's participating in this discussion!",
        ),
    ])
});

/// Host-provided localization catalog.
///
/// Implement this over the host platform's translation store. Returning
/// `None` for a key falls back to the compiled-in default string.
pub trait MessageCatalog: Send + Sync {
    /// Look up a translated string for a key.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Catalog with no host translations; every lookup uses the defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCatalog;

impl MessageCatalog for DefaultCatalog {
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Resolve a message key through the catalog with fallback defaults.
///
/// Unknown keys resolve to the key itself rather than failing, so a typo
/// surfaces visibly instead of breaking enforcement.
pub fn message(catalog: &dyn MessageCatalog, key: &str) -> String {
    catalog
        .lookup(key)
        .unwrap_or_else(|| DEFAULTS.get(key).copied().unwrap_or(key).to_string())
}
