//! Basic content gating example.
//!
//! This example walks one anonymous page load through every enforcement
//! point: the server guard, the route guard, the post decorator, and the
//! user-card guard.
//!
//! # Running
//!
//! ```bash
//! cargo run --example basic_gating
//! ```

use threadgate::{
    CardDirective, EndpointKind, GateConfig, NavigationDirective, PostView, RouteKind, Threadgate,
};

fn main() {
    // Site settings the host administrator controls. In production these
    // come from the host's settings store, injected at request time.
    let config = GateConfig {
        enabled: true,
        visible_posts: 4, // original post + first 3 replies
        fallback_route: "discovery.latest",
        signup_url: "/signup",
        login_url: "/login",
    };

    // Anonymous visitor: no session identity.
    let gate = match Threadgate::new(config, None) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Server side: the profile endpoint short-circuits with a 403.
    let (status, body) = gate.wrap_endpoint(EndpointKind::ProfileShow, || {
        (200, r#"{"user":{"username":"eviltrout"}}"#.to_string())
    });
    println!("GET /u/eviltrout -> {} {}", status, body);

    // Client side: profile navigation bounces to the listing view.
    match gate.guard_navigation(RouteKind::UserProfile) {
        NavigationDirective::Redirect { to, notice } => {
            println!("navigation blocked -> {} ({})", to, notice);
        }
        NavigationDirective::Proceed => println!("navigation allowed"),
    }

    // Render a short thread: the fifth post gets obscured.
    for position in 1..=5 {
        let mut view = PostView::new(position, "eviltrout");
        gate.decorate_post(&mut view);
        println!(
            "post {} by {:<16} blurred: {}",
            position, view.author_name, view.is_blurred()
        );
    }

    // The user card on an obscured post becomes a notice.
    match gate.guard_user_card(5) {
        CardDirective::Notice(notice) => println!("user card suppressed: {}", notice),
        CardDirective::Show => println!("user card shown"),
    }
}
