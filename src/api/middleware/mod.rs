//! API middleware.
//!
//! A single layer: the access gate. Every route in both services sits
//! behind it, including the liveness probe.

pub mod auth;
