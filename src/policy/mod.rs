//! Access policy layer.

pub mod access;
