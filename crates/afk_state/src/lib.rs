//! afk_state - Presence state machine for the AFK engine
//!
//! This crate decides, for every inbound command and message, how the
//! presence state transitions and which reply (if any) goes back out.

pub mod machine;

// Re-export commonly used types
pub use machine::{AfkEvent, PresenceController, ReplyDirective};
