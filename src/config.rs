//! Threadgate configuration.

/// Configuration for content gating.
///
/// This struct contains all site-specific settings the gate needs. Values
/// are injected explicitly at construction; nothing is read from ambient
/// global state, so two gates with different configs can coexist in tests.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Whether gating is enabled.
    /// Administrator-controlled site setting; read-only at request time.
    pub enabled: bool,

    /// Number of posts an anonymous visitor can read per thread, counting
    /// the original post. Posts at positions beyond this are obscured.
    pub visible_posts: u32,

    /// Route identifier blocked profile navigations are redirected to
    /// (a "latest discussions" listing on the host).
    pub fallback_route: &'static str,

    /// Signup page URL used by the call-to-action overlay.
    pub signup_url: &'static str,

    /// Login page URL used by the call-to-action overlay.
    pub login_url: &'static str,
}

impl Default for GateConfig {
    /// Reference behavior: gating on, original post plus first 3 replies
    /// visible, redirect to the latest-discussions listing.
    fn default() -> Self {
        Self {
            enabled: true,
            visible_posts: 4,
            fallback_route: "discovery.latest",
            signup_url: "/signup",
            login_url: "/login",
        }
    }
}

impl GateConfig {
    /// Validate configuration for obvious errors.
    pub fn validate(&self) -> Result<(), crate::GateError> {
        if self.visible_posts == 0 {
            return Err(crate::GateError::ConfigError(
                "visible_posts must be at least 1 (the original post)".to_string(),
            ));
        }
        if self.fallback_route.is_empty() {
            return Err(crate::GateError::ConfigError(
                "fallback_route cannot be empty".to_string(),
            ));
        }
        if self.signup_url.is_empty() || self.login_url.is_empty() {
            return Err(crate::GateError::ConfigError(
                "signup_url and login_url cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
