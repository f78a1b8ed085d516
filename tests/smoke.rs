//! Basic smoke test to verify crate compiles, plus one full gating pass.

use std::sync::Arc;

use threadgate::{
    CardDirective, EventKind, GateConfig, HookPayload, HookRegistry, NavigationDirective, PostView,
    RouteKind, Threadgate,
};

#[test]
fn crate_compiles() {
    // If this test runs, the crate skeleton is valid.
    let _ = std::any::type_name::<threadgate::GateConfig>();
    let _ = std::any::type_name::<threadgate::GateError>();
}

#[test]
fn anonymous_page_load_end_to_end() {
    let gate = Arc::new(Threadgate::new(GateConfig::default(), None).unwrap());
    let mut registry = HookRegistry::new();
    gate.install(&mut registry).unwrap();

    // Profile navigation bounces to the listing view.
    let mut nav = HookPayload::Navigation {
        route: RouteKind::UserProfile,
        directive: NavigationDirective::Proceed,
    };
    registry.dispatch(EventKind::PreNavigation, &mut nav);
    let HookPayload::Navigation { directive, .. } = nav else {
        panic!("payload variant changed");
    };
    assert!(matches!(
        directive,
        NavigationDirective::Redirect { ref to, .. } if to == "discovery.latest"
    ));

    // First four posts render untouched; the fifth is obscured.
    for position in 1..=5u32 {
        let mut render = HookPayload::Render {
            view: PostView::new(position, "eviltrout"),
        };
        registry.dispatch(EventKind::PostRender, &mut render);
        let HookPayload::Render { view } = render else {
            panic!("payload variant changed");
        };
        assert_eq!(view.is_blurred(), position > 4);
    }

    // The user card is suppressed on obscured posts only.
    let mut action = HookPayload::Action {
        position: 2,
        directive: CardDirective::Show,
    };
    registry.dispatch(EventKind::PreAction, &mut action);
    let HookPayload::Action { directive, .. } = action else {
        panic!("payload variant changed");
    };
    assert_eq!(directive, CardDirective::Show);
}
