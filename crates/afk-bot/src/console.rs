//! Console transport
//!
//! Line-oriented transport over stdin/stdout for local runs:
//! - `.afk [message]` / `.unafk` (or any other line): outgoing text from
//!   the account holder
//! - `@<sender_id> <text>`: private message from a correspondent
//! - `#<sender_id> <text>`: group message
//!
//! Directives are printed to stdout. A real chat transport implements the
//! same [`ChatTransport`] trait against its network client.

use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use afk_state::ReplyDirective;

use crate::transport::{ChatTransport, TransportEvent};

pub struct ConsoleTransport {
    lines: Lines<BufReader<Stdin>>,
}

impl ConsoleTransport {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_line(line: &str) -> Option<TransportEvent> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(rest) = trimmed.strip_prefix('@') {
        return parse_peer_message(rest, true);
    }
    if let Some(rest) = trimmed.strip_prefix('#') {
        return parse_peer_message(rest, false);
    }
    Some(TransportEvent::OutgoingCommand {
        text: trimmed.to_string(),
    })
}

fn parse_peer_message(rest: &str, is_private: bool) -> Option<TransportEvent> {
    // `<sender_id> <text>` - the text itself is irrelevant to the engine.
    let sender = rest.split_whitespace().next()?.parse::<i64>().ok()?;
    Some(TransportEvent::IncomingMessage { sender, is_private })
}

#[async_trait]
impl ChatTransport for ConsoleTransport {
    async fn connect(&mut self) -> Result<()> {
        log::info!("Console transport ready, reading events from stdin.");
        Ok(())
    }

    async fn next_event(&mut self) -> Option<TransportEvent> {
        loop {
            match self.lines.next_line().await {
                Ok(Some(line)) => {
                    if let Some(event) = parse_line(&line) {
                        return Some(event);
                    }
                }
                Ok(None) => return None,
                Err(err) => {
                    log::error!("Failed to read from stdin: {}", err);
                    return None;
                }
            }
        }
    }

    async fn execute(&mut self, directive: ReplyDirective) -> Result<()> {
        match directive {
            ReplyDirective::EditMessage { text } => println!("[me] {}", text),
            ReplyDirective::SendMessage { recipient, text } => {
                println!("[-> {}] {}", recipient, text)
            }
        }
        Ok(())
    }
}
