//! Presence events - what the message bus delivers to the controller

use serde::{Deserialize, Serialize};

/// Events that drive presence transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AfkEvent {
    /// The user switched AFK mode on, optionally giving a reason.
    /// A blank message is valid. Re-activating while already active
    /// starts a fresh session.
    Activate { message: String },

    /// The user switched AFK mode off.
    Deactivate,

    /// A message arrived from a correspondent. Only private one-to-one
    /// messages are eligible for an auto-reply.
    MessageReceived { sender: i64, is_private: bool },
}

impl AfkEvent {
    /// Check if this event is a user-issued command (as opposed to
    /// inbound traffic).
    pub fn is_command(&self) -> bool {
        matches!(self, Self::Activate { .. } | Self::Deactivate)
    }
}
