//! HTTP surface: two structurally parallel CRUD services behind one
//! access gate.
//!
//! `conversation_router` and `message_router` are independently
//! mountable; `api_router` merges them for the single-process default.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::{api_router, conversation_router, message_router};
pub use server::{start_api_server, ApiServer};
pub use types::{ApiContext, ApiSecret};
