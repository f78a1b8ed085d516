//! Client-side enforcement: route guard, post decorator, card guard.

pub mod card;
pub mod decorate;
pub mod route;
