//! # Threadgate
//!
//! **Signup-prompt content gating for discussion forum platforms.**
//!
//! Threadgate hides user profile pages and visually obscures replies beyond
//! a configured threshold from anonymous visitors, while authenticated users
//! see everything. It owns exactly one decision — *should this actor see
//! this content?* — and a set of enforcement points that apply the decision
//! consistently on both the server and the client:
//!
//! - **Server guards** — short-circuit profile-show and user-activity
//!   endpoints with a `403` JSON payload
//! - **Route guard** — redirects anonymous profile navigation to a fallback
//!   listing view with a blocking notice
//! - **Post decorator** — blurs posts past the visible threshold, masks the
//!   author name, swallows identity clicks, and inserts a call-to-action
//!   overlay
//! - **Card guard** — substitutes a notice for the "show user card"
//!   interaction on obscured posts
//!
//! The restriction decision itself lives in one pure predicate
//! ([`policy::access::should_restrict`]); every enforcement point consults
//! it through a [`PolicySnapshot`], so server and client can never drift.
//!
//! ## Quickstart
//!
//! ```
//! use threadgate::{GateConfig, NavigationDirective, RouteKind, Threadgate};
//!
//! fn main() -> Result<(), threadgate::GateError> {
//!     // Anonymous page load with gating enabled.
//!     let gate = Threadgate::new(GateConfig::default(), None)?;
//!
//!     match gate.guard_navigation(RouteKind::UserProfile) {
//!         NavigationDirective::Redirect { to, notice } => {
//!             println!("redirected to {}: {}", to, notice);
//!         }
//!         NavigationDirective::Proceed => println!("profile allowed"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Integration model
//!
//! Threadgate never authenticates, routes, or renders. The host platform
//! supplies the session identity, the post position ordinals, and the hook
//! points; Threadgate registers one hook per event through a
//! [`HookRegistry`] (see [`Threadgate::install`]) and the host dispatches
//! navigation, render, and interaction events through it.
//!
//! ## Configuration
//!
//! - `enabled` — administrator-controlled flag turning gating on or off
//! - `visible_posts` — posts readable by anonymous visitors (original post
//!   included; default 4)
//! - `fallback_route` — listing view blocked navigations land on
//!
//! See [`GateConfig`] for full documentation.

#![deny(warnings)]
#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/threadgate/0.1.0")]

// Core modules
pub mod config;
pub mod errors;
pub mod i18n;
pub mod session;

// Policy layer
pub mod policy;

// Server-side enforcement
pub mod server;

// Client-side enforcement
pub mod client;

// Extension points
pub mod hooks;

// Manager (main public API)
pub mod manager;

// Re-exports for public API
pub use client::card::CardDirective;
pub use client::decorate::{Overlay, PostView, BLUR_CLASS};
pub use client::route::{NavigationDirective, RouteKind};
pub use config::GateConfig;
pub use errors::GateError;
pub use hooks::{EventKind, HookPayload, HookRegistry};
pub use i18n::{DefaultCatalog, MessageCatalog};
pub use manager::Threadgate;
pub use policy::access::{should_restrict, PolicySnapshot};
pub use server::guards::{ApiError, EndpointKind, GuardOutcome};
pub use session::SessionIdentity;
