//! Presence controller - the transition logic
//!
//! Each event is one sequential load-mutate-save cycle against the store,
//! followed by at most one reply directive. Directives that report a
//! persisted fact are only produced after the save succeeds.

use std::sync::Arc;

use tokio::sync::Mutex;

use afk_core::{format_duration, Clock, PresenceState};
use presence_store::{Result, StateStore};

use super::directives::ReplyDirective;
use super::events::AfkEvent;

pub struct PresenceController {
    store: Arc<dyn StateStore>,
    clock: Arc<dyn Clock>,
    /// Serializes load-mutate-save cycles. Without it, two concurrently
    /// dispatched messages from the same sender could both pass the
    /// not-yet-notified check before either persists.
    transition_lock: Mutex<()>,
}

impl PresenceController {
    pub fn new(store: Arc<dyn StateStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            transition_lock: Mutex::new(()),
        }
    }

    /// Process one event to completion, returning the reply to deliver
    /// (if any). A failed save aborts the event with no directive.
    pub async fn handle_event(&self, event: AfkEvent) -> Result<Option<ReplyDirective>> {
        match event {
            AfkEvent::Activate { message } => self.activate(message).await,
            AfkEvent::Deactivate => self.deactivate().await,
            AfkEvent::MessageReceived { sender, is_private } => {
                self.message_received(sender, is_private).await
            }
        }
    }

    /// Activation always starts a fresh session, whatever the current
    /// state: a brand-new record with an empty notified set is persisted,
    /// which is what resets the per-session dedup.
    async fn activate(&self, message: String) -> Result<Option<ReplyDirective>> {
        let _guard = self.transition_lock.lock().await;

        let state = PresenceState::new_session(message, self.clock.now());
        self.store.save(&state).await?;

        log::info!("AFK mode activated with message: '{}'", state.message);

        let mut text = String::from("**AFK mode activated**");
        if !state.message.is_empty() {
            text.push_str(&format!("\nMessage: `{}`", state.message));
        }

        Ok(Some(ReplyDirective::EditMessage { text }))
    }

    async fn deactivate(&self) -> Result<Option<ReplyDirective>> {
        let _guard = self.transition_lock.lock().await;
        let now = self.clock.now();

        let mut state = self.store.load().await;
        if !state.is_active {
            log::warn!("Attempted to deactivate AFK mode, but it was not active.");
            return Ok(Some(ReplyDirective::EditMessage {
                text: "**AFK mode was not active**".to_string(),
            }));
        }

        // The rest of the record goes stale here and is overwritten
        // wholesale by the next activation.
        state.is_active = false;
        self.store.save(&state).await?;

        let elapsed = format_duration(now.signed_duration_since(state.started_at));
        log::info!("AFK mode deactivated. Duration: {}", elapsed);

        Ok(Some(ReplyDirective::EditMessage {
            text: format!("**AFK mode deactivated**\nYou were AFK for `{}`", elapsed),
        }))
    }

    async fn message_received(
        &self,
        sender: i64,
        is_private: bool,
    ) -> Result<Option<ReplyDirective>> {
        // Only private one-to-one messages are eligible; groups and
        // broadcasts never touch the state.
        if !is_private {
            return Ok(None);
        }

        let _guard = self.transition_lock.lock().await;
        let now = self.clock.now();

        let mut state = self.store.load().await;
        if !state.is_active {
            log::debug!("No AFK reply sent to {} because AFK mode is inactive.", sender);
            return Ok(None);
        }

        if !state.mark_notified(sender) {
            log::debug!("User {} already notified about AFK status.", sender);
            return Ok(None);
        }

        self.store.save(&state).await?;

        let mut text = String::from("**I am currently AFK**");
        if !state.message.is_empty() {
            text.push_str(&format!("\nReason: `{}`", state.message));
        }
        text.push_str(&format!(
            "\nDuration: `{}`",
            format_duration(now.signed_duration_since(state.started_at))
        ));

        log::info!("Sent AFK notification to user {}.", sender);

        Ok(Some(ReplyDirective::SendMessage {
            recipient: sender,
            text,
        }))
    }
}
