//! Chat transport boundary
//!
//! The engine depends only on this capability trait: an inbound event
//! stream plus directive delivery. Transport internals (connection,
//! authentication, wire protocol) stay entirely behind it.

use anyhow::Result;
use async_trait::async_trait;

use afk_state::ReplyDirective;

/// An event delivered by the chat transport.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    /// A message the account holder sent; candidate command text.
    OutgoingCommand { text: String },

    /// A message received from a correspondent.
    IncomingMessage { sender: i64, is_private: bool },
}

#[async_trait]
pub trait ChatTransport: Send {
    /// Establish (and, if needed, authorize) the transport session.
    async fn connect(&mut self) -> Result<()>;

    /// Next inbound event, or `None` once the transport is closed.
    async fn next_event(&mut self) -> Option<TransportEvent>;

    /// Deliver a reply directive produced by the controller.
    async fn execute(&mut self, directive: ReplyDirective) -> Result<()>;
}
