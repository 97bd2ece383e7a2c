//! Event dispatch loop
//!
//! Pulls one transport event at a time, translates it to a presence event,
//! runs it through the controller, and hands any resulting directive back
//! to the transport. A store failure is fatal for that event only.

use afk_state::{AfkEvent, PresenceController};

use crate::commands;
use crate::transport::{ChatTransport, TransportEvent};

pub struct Runner<T: ChatTransport> {
    transport: T,
    controller: PresenceController,
}

impl<T: ChatTransport> Runner<T> {
    pub fn new(transport: T, controller: PresenceController) -> Self {
        Self {
            transport,
            controller,
        }
    }

    /// Run until the transport closes.
    pub async fn run(mut self) -> anyhow::Result<()> {
        while let Some(event) = self.transport.next_event().await {
            if let Err(err) = self.dispatch(event).await {
                log::error!("Failed to process event: {}", err);
            }
        }
        log::info!("Transport closed, shutting down.");
        Ok(())
    }

    async fn dispatch(&mut self, event: TransportEvent) -> anyhow::Result<()> {
        let machine_event = match event {
            TransportEvent::OutgoingCommand { text } => match commands::parse_command(&text) {
                Some(command) => command,
                None => return Ok(()),
            },
            TransportEvent::IncomingMessage { sender, is_private } => {
                AfkEvent::MessageReceived { sender, is_private }
            }
        };

        if machine_event.is_command() {
            log::debug!("Dispatching user command: {:?}", machine_event);
        }

        if let Some(directive) = self.controller.handle_event(machine_event).await? {
            self.transport.execute(directive).await?;
        }
        Ok(())
    }
}
