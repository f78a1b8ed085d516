//! Restriction decision logic.
//!
//! Single source of truth for the restricted-or-not decision. Every
//! enforcement point (server guards, route guard, post decorator, card
//! guard) goes through this module; the boolean is never re-derived
//! elsewhere, so server and client cannot drift.

use crate::config::GateConfig;

/// Decide whether content should be restricted for the current actor.
///
/// Pure and total: restriction applies iff there is no authenticated
/// session and gating is enabled. No other input matters.
///
/// # Arguments
/// * `session_present` - Whether the host reports an authenticated session
/// * `enabled` - The gating site setting
pub fn should_restrict(session_present: bool, enabled: bool) -> bool {
    !session_present && enabled
}

/// Consistent snapshot of the policy inputs for one request or page load.
///
/// Both inputs are captured in a single call so a decision never mixes a
/// stale session with a fresh flag value or vice versa. The snapshot is
/// `Copy`; hand it to every enforcement point for the same request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicySnapshot {
    session_present: bool,
    enabled: bool,
    visible_posts: u32,
}

impl PolicySnapshot {
    /// Capture a snapshot from the injected config and session presence.
    pub fn capture(config: &GateConfig, session_present: bool) -> Self {
        Self {
            session_present,
            enabled: config.enabled,
            visible_posts: config.visible_posts,
        }
    }

    /// Whether profile pages and profile endpoints are restricted.
    pub fn restricts_profiles(&self) -> bool {
        should_restrict(self.session_present, self.enabled)
    }

    /// Whether the post at the given 1-based position is restricted.
    ///
    /// Position 1 is the original post; positions up to `visible_posts`
    /// stay readable for everyone. Position 0 means the host supplied no
    /// ordinal and is never restricted.
    pub fn restricts_post(&self, position: u32) -> bool {
        position > self.visible_posts && should_restrict(self.session_present, self.enabled)
    }

    /// The visible-post threshold this snapshot was captured with.
    pub fn visible_posts(&self) -> u32 {
        self.visible_posts
    }
}
