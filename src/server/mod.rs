//! Server-side endpoint guards.

pub mod guards;
