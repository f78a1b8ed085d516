//! Threadgate — the main public API.
//!
//! Construct one `Threadgate` per server request or client page load and
//! use it for every guard and decoration within that scope. Construction
//! validates the config and captures the policy snapshot, so all decisions
//! made through one instance see the same session identity and flag value.

use std::sync::Arc;

use crate::client::card::{guard_user_card, CardDirective};
use crate::client::decorate::{decorate_post, PostView};
use crate::client::route::{guard_navigation, NavigationDirective, RouteKind};
use crate::config::GateConfig;
use crate::hooks::{EventKind, HookPayload, HookRegistry};
use crate::i18n::{DefaultCatalog, MessageCatalog};
use crate::policy::access::PolicySnapshot;
use crate::server::guards::{guard_endpoint, wrap, EndpointKind, GuardOutcome};
use crate::session::SessionIdentity;
use crate::GateError;

/// Main content gate.
///
/// Holds the injected configuration, the per-scope policy snapshot, and
/// the localization catalog, and exposes every enforcement point.
pub struct Threadgate {
    config: GateConfig,
    policy: PolicySnapshot,
    catalog: Arc<dyn MessageCatalog>,
}

impl Threadgate {
    /// Create a gate with the compiled-in default strings.
    ///
    /// `session` is the host's current session identity, or `None` for an
    /// anonymous actor. Presence is captured here, once per scope.
    ///
    /// # Errors
    /// Returns an error if configuration validation fails.
    pub fn new(config: GateConfig, session: Option<&SessionIdentity>) -> Result<Self, GateError> {
        Self::with_catalog(config, session, Arc::new(DefaultCatalog))
    }

    /// Create a gate with a host localization catalog.
    ///
    /// # Errors
    /// Returns an error if configuration validation fails.
    pub fn with_catalog(
        config: GateConfig,
        session: Option<&SessionIdentity>,
        catalog: Arc<dyn MessageCatalog>,
    ) -> Result<Self, GateError> {
        config.validate()?;
        let policy = PolicySnapshot::capture(&config, session.is_some());
        Ok(Self {
            config,
            policy,
            catalog,
        })
    }

    /// Re-capture the policy snapshot after a session change.
    ///
    /// The snapshot is otherwise fixed for this gate's lifetime. Hosts
    /// where a session can appear without a full page reload (login via
    /// modal) call this on login; hooks installed from an `Arc` keep
    /// seeing the snapshot they were installed with, so such hosts should
    /// install fresh hooks after refreshing.
    pub fn refresh_session(&mut self, session: Option<&SessionIdentity>) {
        self.policy = PolicySnapshot::capture(&self.config, session.is_some());
    }

    /// The policy snapshot this gate decides with.
    pub fn policy(&self) -> &PolicySnapshot {
        &self.policy
    }

    /// The injected configuration.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Check a server endpoint against the policy.
    pub fn guard_endpoint(&self, endpoint: EndpointKind) -> GuardOutcome {
        guard_endpoint(endpoint, &self.policy, self.catalog.as_ref())
    }

    /// Run a host handler behind the endpoint guard.
    ///
    /// Returns `(403, {"error": ...})` when restricted without invoking
    /// the handler; otherwise the handler's `(status, body)` unchanged.
    pub fn wrap_endpoint<H>(&self, endpoint: EndpointKind, handler: H) -> (u16, String)
    where
        H: FnOnce() -> (u16, String),
    {
        wrap(endpoint, &self.policy, self.catalog.as_ref(), handler)
    }

    /// Decide a pending client navigation.
    pub fn guard_navigation(&self, route: RouteKind) -> NavigationDirective {
        guard_navigation(
            route,
            &self.policy,
            self.config.fallback_route,
            self.catalog.as_ref(),
        )
    }

    /// Decorate one rendered post in place.
    pub fn decorate_post(&self, view: &mut PostView) {
        decorate_post(view, &self.policy, &self.config, self.catalog.as_ref());
    }

    /// Decide a show-user-card interaction for the given post position.
    pub fn guard_user_card(&self, position: u32) -> CardDirective {
        guard_user_card(position, &self.policy, self.catalog.as_ref())
    }

    /// Register this gate's hooks with the host registry.
    ///
    /// Installs one hook per event: pre-navigation, post-render, and
    /// pre-action. The gate is shared into the hooks via `Arc`, so the
    /// registry can outlive the caller's binding.
    ///
    /// # Errors
    /// Returns [`GateError::HookConflict`] if any event already has a
    /// registered hook. Hooks registered before the conflicting one stay
    /// registered.
    pub fn install(self: Arc<Self>, registry: &mut HookRegistry) -> Result<(), GateError> {
        let gate = Arc::clone(&self);
        registry.register(
            EventKind::PreNavigation,
            Box::new(move |payload| {
                if let HookPayload::Navigation { route, directive } = payload {
                    *directive = gate.guard_navigation(*route);
                }
            }),
        )?;

        let gate = Arc::clone(&self);
        registry.register(
            EventKind::PostRender,
            Box::new(move |payload| {
                if let HookPayload::Render { view } = payload {
                    gate.decorate_post(view);
                }
            }),
        )?;

        let gate = Arc::clone(&self);
        registry.register(
            EventKind::PreAction,
            Box::new(move |payload| {
                if let HookPayload::Action {
                    position,
                    directive,
                } = payload
                {
                    *directive = gate.guard_user_card(*position);
                }
            }),
        )?;

        Ok(())
    }
}
