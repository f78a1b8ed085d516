//! Post-render decoration for obscured replies.
//!
//! The host's render hook hands the decorator a [`PostView`] — a model of
//! the parts of one rendered post the gate may touch. For posts past the
//! visible threshold under restriction, the decorator blurs the container,
//! masks the author name, swallows identity clicks, and inserts a single
//! call-to-action overlay. Every mutation is idempotent and confined to
//! that one view; a skipped or malformed post never affects its siblings.

use serde::Serialize;
use tracing::debug;

use crate::config::GateConfig;
use crate::i18n::{keys, message, MessageCatalog};
use crate::policy::access::PolicySnapshot;

/// Marker class applied to a blurred post container.
pub const BLUR_CLASS: &str = "threadgate-blur";

/// Call-to-action overlay inserted into an obscured post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlay {
    /// Localized overlay title.
    pub title: String,
    /// Localized overlay body text.
    pub message: String,
    /// Localized signup button label.
    pub signup_label: String,
    /// Signup page URL.
    pub signup_url: String,
    /// Localized login button label.
    pub login_label: String,
    /// Login page URL.
    pub login_url: String,
}

/// Model of one rendered post handed to the decorator by the host.
///
/// Mirrors the parts of the rendered subtree the gate may touch; the host
/// owns everything else about the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    /// 1-based position within the thread; 0 when the host had no ordinal.
    pub position: u32,
    /// Author name as currently displayed.
    pub author_name: String,
    /// Marker classes on the post container.
    pub container_classes: Vec<String>,
    /// Whether clicks on author-identity elements (avatar, username link,
    /// card trigger) are swallowed instead of navigating.
    pub identity_clicks_disabled: bool,
    /// Call-to-action overlay, once inserted.
    pub overlay: Option<Overlay>,
}

impl PostView {
    /// Create an undecorated view for a post at the given position.
    pub fn new(position: u32, author_name: impl Into<String>) -> Self {
        Self {
            position,
            author_name: author_name.into(),
            container_classes: Vec::new(),
            identity_clicks_disabled: false,
            overlay: None,
        }
    }

    /// Whether the container carries the blur marker.
    pub fn is_blurred(&self) -> bool {
        self.container_classes.iter().any(|c| c == BLUR_CLASS)
    }
}

/// Apply restriction decoration to one rendered post.
///
/// No-ops for visible positions, for missing ordinals (position 0), and
/// whenever the policy does not restrict. Idempotent: running the
/// decorator twice leaves the view exactly as after one run.
pub fn decorate_post(
    view: &mut PostView,
    policy: &PolicySnapshot,
    config: &GateConfig,
    catalog: &dyn MessageCatalog,
) {
    if !policy.restricts_post(view.position) {
        return;
    }

    debug!(position = view.position, "obscuring post past threshold");

    // Marker check keeps repeated render passes from stacking classes.
    if !view.is_blurred() {
        view.container_classes.push(BLUR_CLASS.to_string());
    }

    let hidden = message(catalog, keys::HIDDEN_USER);
    if view.author_name != hidden {
        view.author_name = hidden;
    }

    view.identity_clicks_disabled = true;

    if view.overlay.is_none() {
        view.overlay = Some(Overlay {
            title: message(catalog, keys::OVERLAY_TITLE),
            message: message(catalog, keys::OVERLAY_MESSAGE),
            signup_label: message(catalog, keys::SIGNUP_BUTTON),
            signup_url: config.signup_url.to_string(),
            login_label: message(catalog, keys::LOGIN_BUTTON),
            login_url: config.login_url.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::DefaultCatalog;

    fn anonymous_policy(config: &GateConfig) -> PolicySnapshot {
        PolicySnapshot::capture(config, false)
    }

    #[test]
    fn test_visible_positions_untouched() {
        let config = GateConfig::default();
        let policy = anonymous_policy(&config);

        for position in 1..=4 {
            let mut view = PostView::new(position, "eviltrout");
            let before = view.clone();
            decorate_post(&mut view, &policy, &config, &DefaultCatalog);
            assert_eq!(view, before, "position {} was mutated", position);
        }
    }

    #[test]
    fn test_missing_ordinal_is_a_noop() {
        let config = GateConfig::default();
        let policy = anonymous_policy(&config);

        let mut view = PostView::new(0, "eviltrout");
        let before = view.clone();
        decorate_post(&mut view, &policy, &config, &DefaultCatalog);
        assert_eq!(view, before);
    }

    #[test]
    fn test_obscured_post_fully_decorated() {
        let config = GateConfig::default();
        let policy = anonymous_policy(&config);

        let mut view = PostView::new(5, "eviltrout");
        decorate_post(&mut view, &policy, &config, &DefaultCatalog);

        assert!(view.is_blurred());
        assert_eq!(view.author_name, "Community Member");
        assert!(view.identity_clicks_disabled);

        let overlay = view.overlay.expect("overlay inserted");
        assert_eq!(overlay.title, "Want to read more?");
        assert_eq!(overlay.signup_url, "/signup");
        assert_eq!(overlay.login_url, "/login");
    }

    #[test]
    fn test_decoration_is_idempotent() {
        let config = GateConfig::default();
        let policy = anonymous_policy(&config);

        let mut once = PostView::new(7, "eviltrout");
        decorate_post(&mut once, &policy, &config, &DefaultCatalog);

        let mut twice = PostView::new(7, "eviltrout");
        decorate_post(&mut twice, &policy, &config, &DefaultCatalog);
        decorate_post(&mut twice, &policy, &config, &DefaultCatalog);

        assert_eq!(once, twice);
        assert_eq!(
            twice
                .container_classes
                .iter()
                .filter(|c| *c == BLUR_CLASS)
                .count(),
            1
        );
    }

    #[test]
    fn test_existing_classes_preserved() {
        let config = GateConfig::default();
        let policy = anonymous_policy(&config);

        let mut view = PostView::new(5, "eviltrout");
        view.container_classes.push("topic-post".to_string());
        decorate_post(&mut view, &policy, &config, &DefaultCatalog);

        assert!(view.container_classes.iter().any(|c| c == "topic-post"));
        assert!(view.is_blurred());
    }

    #[test]
    fn test_authenticated_sees_everything() {
        let config = GateConfig::default();
        let policy = PolicySnapshot::capture(&config, true);

        let mut view = PostView::new(50, "eviltrout");
        let before = view.clone();
        decorate_post(&mut view, &policy, &config, &DefaultCatalog);
        assert_eq!(view, before);
    }

    #[test]
    fn test_disabled_gate_leaves_posts_alone() {
        let config = GateConfig {
            enabled: false,
            ..GateConfig::default()
        };
        let policy = anonymous_policy(&config);

        let mut view = PostView::new(50, "eviltrout");
        let before = view.clone();
        decorate_post(&mut view, &policy, &config, &DefaultCatalog);
        assert_eq!(view, before);
    }

    #[test]
    fn test_custom_urls_reach_the_overlay() {
        let config = GateConfig {
            signup_url: "/join",
            login_url: "/session/new",
            ..GateConfig::default()
        };
        let policy = anonymous_policy(&config);

        let mut view = PostView::new(5, "eviltrout");
        decorate_post(&mut view, &policy, &config, &DefaultCatalog);

        let overlay = view.overlay.expect("overlay inserted");
        assert_eq!(overlay.signup_url, "/join");
        assert_eq!(overlay.login_url, "/session/new");
    }
}
