//! Repository layer — entity-scoped database operations.
//!
//! Free functions over a borrowed connection so callers can run them
//! inside or outside an explicit transaction (`Transaction` derefs to
//! `Connection`).

mod conversation;
mod message;

pub use conversation::*;
pub use message::*;
