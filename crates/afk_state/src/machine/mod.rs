//! State machine module
//!
//! Events in, durable transitions through the store, reply directives out.

mod controller;
mod directives;
mod events;

pub use controller::PresenceController;
pub use directives::ReplyDirective;
pub use events::AfkEvent;
