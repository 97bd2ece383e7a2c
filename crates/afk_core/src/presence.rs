//! Presence record - the single persisted entity of the engine

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The durable AFK presence record.
///
/// Exactly one record exists per running instance. A new one is built by
/// [`PresenceState::new_session`] on every activation (which is how the
/// per-session notification dedup resets), mutated only by the presence
/// controller, and written back after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenceState {
    /// Free-text AFK reason. Empty means none was given.
    #[serde(default)]
    pub message: String,

    /// Correspondents already auto-replied to in the current session.
    /// A set: membership matters, insertion order does not.
    #[serde(default)]
    pub notified_ids: BTreeSet<i64>,

    /// Whether AFK mode is currently on.
    #[serde(default)]
    pub is_active: bool,

    /// When the current session began. Stale once `is_active` is false;
    /// the next activation replaces it wholesale.
    pub started_at: DateTime<FixedOffset>,
}

impl PresenceState {
    /// A fresh inactive record. Used on first run and whenever the
    /// persisted file cannot be read back.
    pub fn inactive_at(now: DateTime<FixedOffset>) -> Self {
        Self {
            message: String::new(),
            notified_ids: BTreeSet::new(),
            is_active: false,
            started_at: now,
        }
    }

    /// Start a brand-new AFK session. The notified set always starts empty,
    /// never carried over from a previous session.
    pub fn new_session(message: String, now: DateTime<FixedOffset>) -> Self {
        Self {
            message,
            notified_ids: BTreeSet::new(),
            is_active: true,
            started_at: now,
        }
    }

    /// Record that `sender` has been notified in this session.
    ///
    /// Returns `false` when they already were, leaving the set unchanged.
    pub fn mark_notified(&mut self, sender: i64) -> bool {
        self.notified_ids.insert(sender)
    }

    /// Check whether `sender` was already notified in this session.
    pub fn is_notified(&self, sender: i64) -> bool {
        self.notified_ids.contains(&sender)
    }
}
