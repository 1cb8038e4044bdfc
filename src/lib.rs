//! Token-gated HTTP CRUD services for bot conversation and message
//! records.
//!
//! Two structurally parallel services — conversations and the messages
//! belonging to them — share a static bearer-token access gate and a
//! SQLite store. Every entity mutation runs inside an explicit
//! transaction; constraint enforcement (required fields, enum
//! membership, score ranges, referential integrity) lives in the
//! schema, with closed enums validated again at the JSON boundary.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
