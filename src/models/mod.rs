pub mod conversation;
pub mod enums;
pub mod message;

pub use conversation::*;
pub use message::*;
