//! State store trait and file-backed implementation

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use tokio::fs;

use afk_core::{Clock, PresenceState};

use crate::error::Result;

/// Presence state storage trait.
///
/// `load` never fails: unreadable or malformed records degrade to a fresh
/// default state. `save` failures propagate, because the reply that reports
/// a transition must not be sent when the underpinning write did not land.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Load the persisted state, substituting defaults on any read failure.
    async fn load(&self) -> PresenceState;

    /// Persist the full state, replacing prior content.
    async fn save(&self, state: &PresenceState) -> Result<()>;
}

/// Raw on-disk shape of the record.
///
/// `started_at` stays a string at this layer so an unparsable timestamp can
/// be repaired on its own without discarding the rest of the record. Any
/// other field-shape violation fails the whole decode, which degrades the
/// record to defaults. Unknown fields are ignored, missing fields default.
#[derive(Debug, Deserialize)]
struct RawPresenceState {
    #[serde(default)]
    message: String,
    #[serde(default)]
    notified_ids: Vec<i64>,
    #[serde(default)]
    is_active: bool,
    #[serde(default)]
    started_at: Option<String>,
}

impl RawPresenceState {
    fn into_state(self, now: DateTime<FixedOffset>) -> PresenceState {
        let started_at = match self.started_at {
            Some(raw) => match DateTime::parse_from_rfc3339(&raw) {
                Ok(timestamp) => timestamp,
                Err(err) => {
                    log::warn!(
                        "Unparsable started_at '{}' in state file, substituting current time: {}",
                        raw,
                        err
                    );
                    now
                }
            },
            None => now,
        };

        PresenceState {
            message: self.message,
            // Collapses duplicate ids from hand-edited files.
            notified_ids: self.notified_ids.into_iter().collect::<BTreeSet<i64>>(),
            is_active: self.is_active,
            started_at,
        }
    }
}

/// JSON-file-backed presence state storage.
#[derive(Clone)]
pub struct FileStateStore {
    path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl FileStateStore {
    pub fn new<P: AsRef<Path>>(path: P, clock: Arc<dyn Clock>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            clock,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.as_os_str().to_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

#[async_trait]
impl StateStore for FileStateStore {
    async fn load(&self) -> PresenceState {
        let now = self.clock.now();

        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) => {
                log::warn!("Failed to load state from {}: {}", self.path.display(), err);
                return PresenceState::inactive_at(now);
            }
        };

        match serde_json::from_str::<RawPresenceState>(&contents) {
            Ok(raw) => raw.into_state(now),
            Err(err) => {
                log::warn!("Failed to load state from {}: {}", self.path.display(), err);
                PresenceState::inactive_at(now)
            }
        }
    }

    async fn save(&self, state: &PresenceState) -> Result<()> {
        let contents = serde_json::to_string(state)?;

        // Write to a sibling temp file and rename over the target, so a
        // reader never observes a half-written record.
        let tmp = self.tmp_path();
        fs::write(&tmp, contents).await?;
        fs::rename(&tmp, &self.path).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    struct FixedClock(DateTime<FixedOffset>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<FixedOffset> {
            self.0
        }
    }

    fn noon() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-05-01T12:00:00+02:00").unwrap()
    }

    fn store_at(dir: &Path) -> FileStateStore {
        FileStateStore::new(dir.join("afk_state.json"), Arc::new(FixedClock(noon())))
    }

    #[tokio::test]
    async fn save_then_load_round_trips_the_record() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());

        let mut state = PresenceState::new_session("lunch".to_string(), noon());
        state.mark_notified(42);
        state.mark_notified(99);
        store.save(&state).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded, state);
    }

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());

        let loaded = store.load().await;
        assert!(!loaded.is_active);
        assert!(loaded.message.is_empty());
        assert!(loaded.notified_ids.is_empty());
        assert_eq!(loaded.started_at, noon());
    }

    #[tokio::test]
    async fn malformed_document_yields_defaults() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());
        std::fs::write(store.path(), "{not json").unwrap();

        let loaded = store.load().await;
        assert!(!loaded.is_active);
        assert!(loaded.notified_ids.is_empty());
    }

    #[tokio::test]
    async fn wrong_field_shape_degrades_whole_record() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());
        std::fs::write(store.path(), r#"{"is_active": "yes", "message": "m"}"#).unwrap();

        let loaded = store.load().await;
        assert!(!loaded.is_active);
        assert!(loaded.message.is_empty());
    }

    #[tokio::test]
    async fn unparsable_timestamp_is_repaired_field_by_field() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());
        std::fs::write(
            store.path(),
            r#"{"message": "afk", "notified_ids": [7], "is_active": true, "started_at": "not-a-time"}"#,
        )
        .unwrap();

        let loaded = store.load().await;
        assert!(loaded.is_active);
        assert_eq!(loaded.message, "afk");
        assert!(loaded.is_notified(7));
        assert_eq!(loaded.started_at, noon());
    }

    #[tokio::test]
    async fn missing_fields_take_defaults_and_unknown_fields_are_ignored() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());
        std::fs::write(
            store.path(),
            r#"{"message": "out", "future_field": {"nested": true}}"#,
        )
        .unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded.message, "out");
        assert!(!loaded.is_active);
        assert!(loaded.notified_ids.is_empty());
        assert_eq!(loaded.started_at, noon());
    }

    #[tokio::test]
    async fn duplicate_ids_in_file_collapse_on_load() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());
        std::fs::write(
            store.path(),
            r#"{"notified_ids": [42, 42, 7], "is_active": true, "started_at": "2024-05-01T10:00:00+02:00"}"#,
        )
        .unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded.notified_ids.len(), 2);
        assert!(loaded.is_notified(42));
        assert!(loaded.is_notified(7));
    }

    #[tokio::test]
    async fn save_replaces_prior_content_wholesale() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());

        let mut first = PresenceState::new_session("first".to_string(), noon());
        first.mark_notified(1);
        first.mark_notified(2);
        store.save(&first).await.unwrap();

        let second = PresenceState::new_session("second".to_string(), noon());
        store.save(&second).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded.message, "second");
        assert!(loaded.notified_ids.is_empty());
    }

    #[tokio::test]
    async fn save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let store = FileStateStore::new(
            dir.path().join("no-such-dir").join("afk_state.json"),
            Arc::new(FixedClock(noon())),
        );

        let state = PresenceState::inactive_at(noon());
        assert!(store.save(&state).await.is_err());
    }
}
