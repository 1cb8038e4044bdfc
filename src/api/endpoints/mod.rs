//! API endpoint handlers, one module per service.

pub mod conversations;
pub mod health;
pub mod messages;
