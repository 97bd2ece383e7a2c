//! Reply directives - instructions handed back to the message bus
//!
//! The controller never performs transport I/O itself. Each handled event
//! yields at most one directive, and the bus is responsible for delivery.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyDirective {
    /// Replace the triggering command message with a confirmation.
    EditMessage { text: String },

    /// Send a free-standing message to a correspondent.
    SendMessage { recipient: i64, text: String },
}

impl ReplyDirective {
    /// The reply text, whichever delivery form it takes.
    pub fn text(&self) -> &str {
        match self {
            Self::EditMessage { text } => text,
            Self::SendMessage { text, .. } => text,
        }
    }
}
