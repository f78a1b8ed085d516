//! Guard for the explicit "show user card" interaction.
//!
//! The post decorator already swallows clicks on author-identity elements,
//! but hosts expose other paths to the user card (keyboard shortcuts,
//! mention popups). This guard covers those: for obscured posts it
//! substitutes an informational notice for the card.

use crate::i18n::{keys, message, MessageCatalog};
use crate::policy::access::PolicySnapshot;

/// What the host should do with a user-card request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardDirective {
    /// Show the card normally.
    Show,
    /// Suppress the card and present this localized notice instead.
    Notice(String),
}

/// Decide a show-user-card request for the post at the given position.
pub fn guard_user_card(
    position: u32,
    policy: &PolicySnapshot,
    catalog: &dyn MessageCatalog,
) -> CardDirective {
    if policy.restricts_post(position) {
        CardDirective::Notice(message(catalog, keys::SIGNUP_TO_SEE_USERS))
    } else {
        CardDirective::Show
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GateConfig;
    use crate::i18n::DefaultCatalog;

    fn policy(session_present: bool, enabled: bool) -> PolicySnapshot {
        let config = GateConfig {
            enabled,
            ..GateConfig::default()
        };
        PolicySnapshot::capture(&config, session_present)
    }

    #[test]
    fn test_card_shown_for_visible_positions() {
        let policy = policy(false, true);
        for position in 1..=4 {
            assert_eq!(
                guard_user_card(position, &policy, &DefaultCatalog),
                CardDirective::Show
            );
        }
    }

    #[test]
    fn test_card_suppressed_beyond_threshold() {
        let directive = guard_user_card(5, &policy(false, true), &DefaultCatalog);
        assert_eq!(
            directive,
            CardDirective::Notice(
                "Sign up to see who's participating in this discussion!".to_string()
            )
        );
    }

    #[test]
    fn test_card_shown_for_authenticated_users() {
        let directive = guard_user_card(5, &policy(true, true), &DefaultCatalog);
        assert_eq!(directive, CardDirective::Show);
    }

    #[test]
    fn test_card_shown_when_gate_disabled() {
        let directive = guard_user_card(5, &policy(false, false), &DefaultCatalog);
        assert_eq!(directive, CardDirective::Show);
    }
}
