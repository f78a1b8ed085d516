//! Extension-point registration.
//!
//! Instead of redefining host framework internals, the gate attaches to
//! documented hook points: the host exposes a [`HookRegistry`], the gate
//! registers one hook per [`EventKind`], and the host dispatches each
//! navigation, render, and interaction event through the registry. At most
//! one hook per event; registering twice is a setup error.

use std::collections::HashMap;
use std::fmt;

use crate::client::card::CardDirective;
use crate::client::decorate::PostView;
use crate::client::route::{NavigationDirective, RouteKind};
use crate::errors::GateError;

/// Host events a hook can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Before a client-side navigation commits.
    PreNavigation,
    /// After a post's content is rendered.
    PostRender,
    /// Before an explicit interaction (show-user-card) runs.
    PreAction,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::PreNavigation => "pre-navigation",
            EventKind::PostRender => "post-render",
            EventKind::PreAction => "pre-action",
        };
        f.write_str(name)
    }
}

/// Mutable event payload passed through a dispatched hook.
///
/// Each variant carries the inputs the host already has plus the output
/// slot the hook writes its decision into.
#[derive(Debug)]
pub enum HookPayload {
    /// A pending navigation; the hook writes its directive.
    Navigation {
        /// Kind of route being navigated to.
        route: RouteKind,
        /// Decision slot, pre-set to proceed.
        directive: NavigationDirective,
    },
    /// A freshly rendered post; the hook decorates the view in place.
    Render {
        /// The rendered post model.
        view: PostView,
    },
    /// A show-user-card interaction; the hook writes its directive.
    Action {
        /// 1-based position of the post the card was requested for.
        position: u32,
        /// Decision slot, pre-set to show.
        directive: CardDirective,
    },
}

/// A registered hook function.
pub type Hook = Box<dyn Fn(&mut HookPayload) + Send + Sync>;

/// Hook functions keyed by event.
///
/// Owned by the host integration layer; events with no registered hook
/// dispatch as no-ops.
#[derive(Default)]
pub struct HookRegistry {
    hooks: HashMap<EventKind, Hook>,
}

impl HookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook for an event.
    ///
    /// # Errors
    /// Returns [`GateError::HookConflict`] if the event already has a hook.
    pub fn register(&mut self, event: EventKind, hook: Hook) -> Result<(), GateError> {
        if self.hooks.contains_key(&event) {
            return Err(GateError::HookConflict { event });
        }
        self.hooks.insert(event, hook);
        Ok(())
    }

    /// Whether a hook is registered for the event.
    pub fn has_hook(&self, event: EventKind) -> bool {
        self.hooks.contains_key(&event)
    }

    /// Dispatch an event through its registered hook, if any.
    pub fn dispatch(&self, event: EventKind, payload: &mut HookPayload) {
        if let Some(hook) = self.hooks.get(&event) {
            hook(payload);
        }
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("events", &self.hooks.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_dispatch() {
        let mut registry = HookRegistry::new();
        registry
            .register(
                EventKind::PreNavigation,
                Box::new(|payload| {
                    if let HookPayload::Navigation { directive, .. } = payload {
                        *directive = NavigationDirective::Redirect {
                            to: "discovery.latest".to_string(),
                            notice: "blocked".to_string(),
                        };
                    }
                }),
            )
            .unwrap();

        let mut payload = HookPayload::Navigation {
            route: RouteKind::UserProfile,
            directive: NavigationDirective::Proceed,
        };
        registry.dispatch(EventKind::PreNavigation, &mut payload);

        match payload {
            HookPayload::Navigation { directive, .. } => {
                assert!(matches!(directive, NavigationDirective::Redirect { .. }));
            }
            _ => panic!("payload variant changed"),
        }
    }

    #[test]
    fn test_duplicate_registration_conflicts() {
        let mut registry = HookRegistry::new();
        registry
            .register(EventKind::PreAction, Box::new(|_| {}))
            .unwrap();

        let result = registry.register(EventKind::PreAction, Box::new(|_| {}));
        assert!(matches!(
            result,
            Err(GateError::HookConflict {
                event: EventKind::PreAction
            })
        ));
    }

    #[test]
    fn test_unregistered_event_dispatches_as_noop() {
        let registry = HookRegistry::new();
        let mut payload = HookPayload::Action {
            position: 5,
            directive: CardDirective::Show,
        };
        registry.dispatch(EventKind::PreAction, &mut payload);

        match payload {
            HookPayload::Action { directive, .. } => {
                assert_eq!(directive, CardDirective::Show);
            }
            _ => panic!("payload variant changed"),
        }
    }

    #[test]
    fn test_event_kind_display() {
        assert_eq!(EventKind::PreNavigation.to_string(), "pre-navigation");
        assert_eq!(EventKind::PostRender.to_string(), "post-render");
        assert_eq!(EventKind::PreAction.to_string(), "pre-action");
    }
}
